//! Pathways Algo - Course matching engine for UniversityPathways
//!
//! This library provides the course search used by the UniversityPathways
//! course finder. It matches free-text queries against an institution's
//! course catalog and, when an applicant shares a GPA, classifies how well
//! each matching course fits.

pub mod catalog;
pub mod chat;
pub mod config;
pub mod core;
pub mod models;

// Re-export commonly used types
pub use catalog::{CatalogError, CourseCatalog};
pub use chat::Responder;
pub use core::{MatchEngine, SearchError};
pub use models::{CourseMatch, CourseRecord, FitStatus, FitThresholds, Recommendation, SearchRequest, SearchResponse};
