// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{ChatIntent, CourseMatch, CourseRecord, FitStatus, FitThresholds, Institution, Recommendation};
pub use requests::{ChatRequest, SearchRequest};
pub use responses::{ChatReply, SearchResponse};
