// Core algorithm exports
pub mod filters;
pub mod matcher;
pub mod scoring;

pub use filters::{matches_query, normalize_query};
pub use matcher::{MatchEngine, SearchError};
pub use scoring::classify_fit;
