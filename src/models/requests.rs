use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to search an institution's courses
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SearchRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "university")]
    pub institution: String,
    #[validate(length(min = 1))]
    #[serde(alias = "course")]
    pub query: String,
    #[validate(range(min = 0.0, max = 5.0))]
    #[serde(default)]
    pub gpa: Option<f64>,
}

/// Request for a canned chat reply
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ChatRequest {
    #[validate(length(min = 1))]
    pub message: String,
}
