use crate::models::CourseRecord;

/// Check if a course matches the lowercased search needle
///
/// This is Stage 2 of the matching pipeline. Matching is substring
/// containment over the course name and its keyword list, not whole-word
/// matching: "comp" matches "Computer Science" and the keyword "computing".
#[inline]
pub fn matches_query(course: &CourseRecord, needle: &str) -> bool {
    if course.name.to_lowercase().contains(needle) {
        return true;
    }

    course
        .keywords
        .iter()
        .any(|keyword| keyword.to_lowercase().contains(needle))
}

/// Normalize a raw query into the needle used for comparison
#[inline]
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_course(name: &str, keywords: &[&str]) -> CourseRecord {
        CourseRecord {
            name: name.to_string(),
            faculty: "School of Computing".to_string(),
            gpa_requirement: 3.7,
            duration: "4 years".to_string(),
            intake: "August".to_string(),
            additional_info: None,
            last_updated: "January 2025".to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }

    #[test]
    fn test_name_substring_match() {
        let course = create_test_course("Computer Science", &[]);
        assert!(matches_query(&course, "comp"));
        assert!(matches_query(&course, "science"));
    }

    #[test]
    fn test_keyword_substring_match() {
        let course = create_test_course("Computer Science", &["programming", "computing"]);
        assert!(matches_query(&course, "gram"));
    }

    #[test]
    fn test_no_match() {
        let course = create_test_course("Computer Science", &["programming"]);
        assert!(!matches_query(&course, "medicine"));
    }

    #[test]
    fn test_needle_already_lowercased() {
        // Callers normalize first; uppercase names still match
        let course = create_test_course("Computer Science", &[]);
        assert!(matches_query(&course, "computer"));
    }

    #[test]
    fn test_normalize_query() {
        assert_eq!(normalize_query("  COMPUTER "), "computer");
        assert_eq!(normalize_query("Business"), "business");
    }

    #[test]
    fn test_empty_keywords_fall_back_to_name() {
        let course = create_test_course("Psychology", &[]);
        assert!(matches_query(&course, "psych"));
        assert!(!matches_query(&course, "biology"));
    }
}
