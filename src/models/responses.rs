use serde::{Deserialize, Serialize};
use crate::models::domain::{ChatIntent, CourseMatch};

/// Response for a course search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub institution: String,
    pub matches: Vec<CourseMatch>,
    pub total_matches: usize,
}

/// A canned chat reply
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatReply {
    pub intent: ChatIntent,
    pub message: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}
