use chrono::Utc;

use crate::models::{ChatIntent, ChatReply};

/// One keyword-triggered canned reply
#[derive(Debug, Clone)]
struct ReplyRule {
    intent: ChatIntent,
    keywords: &'static [&'static str],
    reply: &'static str,
}

/// Pure mapping from keyword-matched intent to canned response text
///
/// Rules are scanned in order; the first rule with a keyword contained in
/// the lowercased input wins. Containment is the same substring semantics
/// the course filter uses. No UI state is involved.
#[derive(Debug, Clone)]
pub struct Responder {
    rules: Vec<ReplyRule>,
    fallback: &'static str,
}

impl Responder {
    pub fn new() -> Self {
        Self {
            rules: vec![
                ReplyRule {
                    intent: ChatIntent::Greeting,
                    keywords: &["hello", "hi", "hey", "good morning", "good afternoon"],
                    reply: "Hi there! 👋 I'm the UniPathways assistant. Ask me about GPA \
                            requirements, intakes, or how to use the course finder.",
                },
                ReplyRule {
                    intent: ChatIntent::Gpa,
                    keywords: &["gpa", "grade", "score", "requirement"],
                    reply: "Enter your GPA in the search form and each matching course will \
                            be rated excellent, good, close, or challenging for you.",
                },
                ReplyRule {
                    intent: ChatIntent::Intakes,
                    keywords: &["intake", "deadline", "apply", "application", "semester"],
                    reply: "Most local universities have an August intake; SUTD starts in \
                            September. Application windows usually open early in the year.",
                },
                ReplyRule {
                    intent: ChatIntent::Contact,
                    keywords: &["telegram", "contact", "human", "advisor", "help"],
                    reply: "You can reach a human advisor through our Telegram bot: \
                            https://t.me/UniPathway_bot",
                },
            ],
            fallback: "I'm not sure about that yet. Try asking about GPA requirements, \
                       intakes, or applications.",
        }
    }

    /// Produce the canned reply for a free-text message
    pub fn reply(&self, input: &str) -> ChatReply {
        let needle = input.trim().to_lowercase();

        let (intent, message) = self
            .rules
            .iter()
            .find(|rule| rule.keywords.iter().any(|keyword| needle.contains(keyword)))
            .map(|rule| (rule.intent, rule.reply))
            .unwrap_or((ChatIntent::Fallback, self.fallback));

        ChatReply {
            intent,
            message: message.to_string(),
            timestamp: Utc::now(),
        }
    }
}

impl Default for Responder {
    fn default() -> Self {
        Self::new()
    }
}
