use std::path::Path;

use thiserror::Error;
use tracing::info;

use crate::catalog::CourseCatalog;
use crate::models::Institution;

/// Errors that can occur when loading an external catalog file
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Catalog contains no institutions")]
    Empty,

    #[error("Institution {0} has no courses")]
    EmptyInstitution(String),

    #[error("Course {0} has an invalid GPA requirement")]
    InvalidGpa(String),
}

/// Parse a catalog from a JSON string
///
/// Expected shape: an array of institutions, each with `code`, `name` and a
/// `courses` array in the same camelCase format the records serialize to.
pub fn from_json_str(json: &str) -> Result<CourseCatalog, CatalogError> {
    let institutions: Vec<Institution> = serde_json::from_str(json)?;
    validate(&institutions)?;

    Ok(CourseCatalog::new(institutions))
}

/// Load a catalog from a JSON file on disk
pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<CourseCatalog, CatalogError> {
    let json = std::fs::read_to_string(path.as_ref())?;
    let catalog = from_json_str(&json)?;

    info!(
        path = %path.as_ref().display(),
        institutions = catalog.institution_codes().len(),
        courses = catalog.total_courses(),
        "catalog loaded"
    );

    Ok(catalog)
}

fn validate(institutions: &[Institution]) -> Result<(), CatalogError> {
    if institutions.is_empty() {
        return Err(CatalogError::Empty);
    }

    for institution in institutions {
        if institution.courses.is_empty() {
            return Err(CatalogError::EmptyInstitution(institution.code.clone()));
        }

        for course in &institution.courses {
            if !course.gpa_requirement.is_finite() || course.gpa_requirement < 0.0 {
                return Err(CatalogError::InvalidGpa(course.name.clone()));
            }
        }
    }

    Ok(())
}
