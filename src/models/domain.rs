use serde::{Deserialize, Serialize};

/// One degree program offering at one institution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseRecord {
    pub name: String,
    pub faculty: String,
    #[serde(rename = "gpaRequirement")]
    pub gpa_requirement: f64,
    pub duration: String,
    pub intake: String,
    #[serde(rename = "additionalInfo", default)]
    pub additional_info: Option<String>,
    #[serde(rename = "lastUpdated")]
    pub last_updated: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// One institution with its ordered course list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Institution {
    pub code: String,
    pub name: String,
    pub courses: Vec<CourseRecord>,
}

/// Qualitative GPA-fit bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitStatus {
    Excellent,
    Good,
    Close,
    Challenging,
}

impl FitStatus {
    /// Fixed user-facing message for this bucket
    pub fn message(&self) -> &'static str {
        match self {
            FitStatus::Excellent => {
                "🎉 Excellent match! Your GPA exceeds the requirement significantly."
            }
            FitStatus::Good => "✅ Good match! Your GPA meets the requirement.",
            FitStatus::Close => "⚠️ Close! Consider applying, as requirements can vary by year.",
            FitStatus::Challenging => {
                "🎯 Consider improving your GPA or exploring alternative pathways."
            }
        }
    }

    /// Presentation tag consumed by the rendering layer, not by the engine
    pub fn presentation_class(&self) -> &'static str {
        match self {
            FitStatus::Excellent | FitStatus::Good => "gpa-match",
            FitStatus::Close => "gpa-close",
            FitStatus::Challenging => "gpa-far",
        }
    }
}

/// Fit classification attached to a matched course when a GPA was supplied
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub status: FitStatus,
    pub message: String,
    #[serde(rename = "class")]
    pub css_class: String,
}

/// A matched course as returned to the caller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseMatch {
    pub name: String,
    pub faculty: String,
    #[serde(rename = "gpaRequirement")]
    pub gpa_requirement: f64,
    pub duration: String,
    pub intake: String,
    #[serde(rename = "additionalInfo")]
    pub additional_info: Option<String>,
    #[serde(rename = "lastUpdated")]
    pub last_updated: String,
    #[serde(default)]
    pub recommendation: Option<Recommendation>,
}

impl CourseMatch {
    pub fn from_record(record: &CourseRecord, recommendation: Option<Recommendation>) -> Self {
        Self {
            name: record.name.clone(),
            faculty: record.faculty.clone(),
            gpa_requirement: record.gpa_requirement,
            duration: record.duration.clone(),
            intake: record.intake.clone(),
            additional_info: record.additional_info.clone(),
            last_updated: record.last_updated.clone(),
            recommendation,
        }
    }
}

/// Classification thresholds on the GPA difference
#[derive(Debug, Clone, Copy)]
pub struct FitThresholds {
    /// Difference at or above which a course is an excellent fit
    pub excellent_margin: f64,
    /// How far below the requirement still counts as close
    pub close_margin: f64,
}

impl Default for FitThresholds {
    fn default() -> Self {
        Self {
            excellent_margin: 0.3,
            close_margin: 0.2,
        }
    }
}

/// Intent recognized by the canned-reply responder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatIntent {
    Greeting,
    Gpa,
    Intakes,
    Contact,
    Fallback,
}
