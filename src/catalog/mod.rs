// Catalog store and loaders
pub mod data;
pub mod loader;

pub use loader::{from_json_file, from_json_str, CatalogError};

use std::collections::HashMap;

use crate::models::Institution;

/// Immutable mapping from institution code to its ordered course list
///
/// Built once at startup and shared read-only for the life of the process.
/// Lookups for unknown codes are "not found", never an empty sequence.
#[derive(Debug, Clone)]
pub struct CourseCatalog {
    institutions: HashMap<String, Institution>,
}

impl CourseCatalog {
    pub fn new(institutions: Vec<Institution>) -> Self {
        let institutions = institutions
            .into_iter()
            .map(|institution| (institution.code.clone(), institution))
            .collect();

        Self { institutions }
    }

    /// The canonical built-in dataset
    pub fn builtin() -> Self {
        Self::new(data::builtin_institutions())
    }

    /// Exact, case-sensitive lookup of an institution by code
    pub fn lookup(&self, code: &str) -> Option<&Institution> {
        self.institutions.get(code)
    }

    /// Display name for an institution code
    pub fn display_name(&self, code: &str) -> Option<&str> {
        self.lookup(code).map(|institution| institution.name.as_str())
    }

    /// All known institution codes, sorted
    pub fn institution_codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.institutions.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }

    /// Course names offered by an institution, in catalog order
    pub fn suggestions(&self, code: &str) -> Option<Vec<&str>> {
        self.lookup(code).map(|institution| {
            institution
                .courses
                .iter()
                .map(|course| course.name.as_str())
                .collect()
        })
    }

    pub fn total_courses(&self) -> usize {
        self.institutions
            .values()
            .map(|institution| institution.courses.len())
            .sum()
    }
}

impl Default for CourseCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
