use thiserror::Error;
use tracing::debug;

use crate::catalog::CourseCatalog;
use crate::core::{
    filters::{matches_query, normalize_query},
    scoring::classify_fit,
};
use crate::models::{CourseMatch, FitThresholds};

/// Expected, user-facing search failures
///
/// Both variants are normal outcomes of a request and must stay
/// distinguishable so the caller can render distinct messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("University not found: {0}")]
    UnknownInstitution(String),

    #[error("No courses found matching your search: {0}")]
    NoMatches(String),
}

/// Main matching orchestrator
///
/// # Pipeline Stages
/// 1. Institution lookup
/// 2. Text filter over course names and keywords
/// 3. GPA-fit classification (only when a GPA was supplied)
#[derive(Debug, Clone)]
pub struct MatchEngine {
    thresholds: FitThresholds,
}

impl MatchEngine {
    pub fn new(thresholds: FitThresholds) -> Self {
        Self { thresholds }
    }

    pub fn with_default_thresholds() -> Self {
        Self {
            thresholds: FitThresholds::default(),
        }
    }

    /// Find courses for an institution matching a free-text query
    ///
    /// Results keep the institution's original course order; the filter is
    /// stable and nothing is re-sorted by fit or relevance.
    ///
    /// # Arguments
    /// * `catalog` - The course catalog to search
    /// * `institution` - Institution code, exact and case-sensitive
    /// * `query` - Free-text course query
    /// * `gpa` - The applicant's GPA, if they chose to share one
    pub fn find_courses(
        &self,
        catalog: &CourseCatalog,
        institution: &str,
        query: &str,
        gpa: Option<f64>,
    ) -> Result<Vec<CourseMatch>, SearchError> {
        let courses = &catalog
            .lookup(institution)
            .ok_or_else(|| SearchError::UnknownInstitution(institution.to_string()))?
            .courses;

        let needle = normalize_query(query);

        let matches: Vec<CourseMatch> = courses
            .iter()
            .filter(|course| matches_query(course, &needle))
            .map(|course| {
                let recommendation =
                    gpa.map(|gpa| classify_fit(gpa, course.gpa_requirement, &self.thresholds));
                CourseMatch::from_record(course, recommendation)
            })
            .collect();

        if matches.is_empty() {
            return Err(SearchError::NoMatches(query.to_string()));
        }

        debug!(
            institution,
            query = %needle,
            matches = matches.len(),
            "course search completed"
        );

        Ok(matches)
    }
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self::with_default_thresholds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CourseCatalog;
    use crate::models::{CourseRecord, FitStatus, Institution};

    fn create_course(name: &str, gpa_requirement: f64, keywords: &[&str]) -> CourseRecord {
        CourseRecord {
            name: name.to_string(),
            faculty: "Test Faculty".to_string(),
            gpa_requirement,
            duration: "4 years".to_string(),
            intake: "August".to_string(),
            additional_info: None,
            last_updated: "January 2025".to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }

    fn create_catalog() -> CourseCatalog {
        CourseCatalog::new(vec![Institution {
            code: "tst".to_string(),
            name: "Test University".to_string(),
            courses: vec![
                create_course("Computer Science", 3.7, &["computer", "computing", "tech"]),
                create_course("Business Administration", 3.5, &["business", "commerce"]),
                create_course("Computer Engineering", 3.6, &["computer", "hardware"]),
            ],
        }])
    }

    #[test]
    fn test_unknown_institution() {
        let engine = MatchEngine::with_default_thresholds();
        let result = engine.find_courses(&create_catalog(), "xyz", "computer", None);

        assert_eq!(
            result.unwrap_err(),
            SearchError::UnknownInstitution("xyz".to_string())
        );
    }

    #[test]
    fn test_institution_code_is_case_sensitive() {
        let engine = MatchEngine::with_default_thresholds();
        let result = engine.find_courses(&create_catalog(), "TST", "computer", None);

        assert!(matches!(result, Err(SearchError::UnknownInstitution(_))));
    }

    #[test]
    fn test_no_matches() {
        let engine = MatchEngine::with_default_thresholds();
        let result = engine.find_courses(&create_catalog(), "tst", "medicine", None);

        assert_eq!(
            result.unwrap_err(),
            SearchError::NoMatches("medicine".to_string())
        );
    }

    #[test]
    fn test_matches_preserve_catalog_order() {
        let engine = MatchEngine::with_default_thresholds();
        let matches = engine
            .find_courses(&create_catalog(), "tst", "computer", None)
            .unwrap();

        let names: Vec<&str> = matches.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Computer Science", "Computer Engineering"]);
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let engine = MatchEngine::with_default_thresholds();
        let catalog = create_catalog();

        let upper = engine.find_courses(&catalog, "tst", "COMPUTER", None).unwrap();
        let lower = engine.find_courses(&catalog, "tst", "computer", None).unwrap();

        let upper_names: Vec<&str> = upper.iter().map(|m| m.name.as_str()).collect();
        let lower_names: Vec<&str> = lower.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(upper_names, lower_names);
    }

    #[test]
    fn test_no_gpa_means_no_recommendation() {
        let engine = MatchEngine::with_default_thresholds();
        let matches = engine
            .find_courses(&create_catalog(), "tst", "computer", None)
            .unwrap();

        assert!(matches.iter().all(|m| m.recommendation.is_none()));
    }

    #[test]
    fn test_gpa_attaches_recommendation_to_every_match() {
        let engine = MatchEngine::with_default_thresholds();
        let matches = engine
            .find_courses(&create_catalog(), "tst", "computer", Some(3.8))
            .unwrap();

        assert_eq!(matches.len(), 2);
        // 3.8 against 3.7 is good; against 3.6 the 0.2 gap is still good
        assert_eq!(
            matches[0].recommendation.as_ref().unwrap().status,
            FitStatus::Good
        );
        assert_eq!(
            matches[1].recommendation.as_ref().unwrap().status,
            FitStatus::Good
        );
    }

    #[test]
    fn test_repeat_queries_are_stable() {
        let engine = MatchEngine::with_default_thresholds();
        let catalog = create_catalog();

        let first = engine.find_courses(&catalog, "tst", "computer", Some(3.5)).unwrap();
        let second = engine.find_courses(&catalog, "tst", "computer", Some(3.5)).unwrap();

        let first_names: Vec<&str> = first.iter().map(|m| m.name.as_str()).collect();
        let second_names: Vec<&str> = second.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(first_names, second_names);
    }
}
