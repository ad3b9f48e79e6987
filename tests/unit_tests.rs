// Unit tests for Pathways Algo

use pathways_algo::core::{
    filters::{matches_query, normalize_query},
    scoring::classify_fit,
};
use pathways_algo::models::{CourseRecord, FitStatus, FitThresholds};

fn create_course(name: &str, gpa_requirement: f64, keywords: &[&str]) -> CourseRecord {
    CourseRecord {
        name: name.to_string(),
        faculty: "School of Computing".to_string(),
        gpa_requirement,
        duration: "4 years".to_string(),
        intake: "August".to_string(),
        additional_info: None,
        last_updated: "January 2025".to_string(),
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
    }
}

#[test]
fn test_normalize_lowercases_and_trims() {
    assert_eq!(normalize_query(" Computer Science "), "computer science");
}

#[test]
fn test_substring_match_on_name() {
    let course = create_course("Computer Science", 3.7, &[]);
    assert!(matches_query(&course, "comp"));
}

#[test]
fn test_substring_match_on_keyword() {
    let course = create_course("Computer Science", 3.7, &["computing"]);
    // "comp" is a substring of the keyword, not a whole word
    assert!(matches_query(&course, "comp"));
}

#[test]
fn test_unmatched_query() {
    let course = create_course("Computer Science", 3.7, &["computing"]);
    assert!(!matches_query(&course, "law"));
}

#[test]
fn test_classification_thresholds() {
    let thresholds = FitThresholds::default();

    assert_eq!(classify_fit(3.9, 3.5, &thresholds).status, FitStatus::Excellent);
    assert_eq!(classify_fit(3.6, 3.5, &thresholds).status, FitStatus::Good);
    assert_eq!(classify_fit(3.4, 3.5, &thresholds).status, FitStatus::Close);
    assert_eq!(classify_fit(3.0, 3.5, &thresholds).status, FitStatus::Challenging);
}

#[test]
fn test_classification_boundaries() {
    let thresholds = FitThresholds::default();

    // A difference of exactly +0.3 is excellent, exactly -0.2 is still close
    assert_eq!(classify_fit(3.8, 3.5, &thresholds).status, FitStatus::Excellent);
    assert_eq!(classify_fit(3.3, 3.5, &thresholds).status, FitStatus::Close);
}

#[test]
fn test_recommendation_messages_match_status() {
    let thresholds = FitThresholds::default();

    let excellent = classify_fit(4.0, 3.5, &thresholds);
    assert!(excellent.message.contains("Excellent match"));
    assert_eq!(excellent.css_class, "gpa-match");

    let close = classify_fit(3.35, 3.5, &thresholds);
    assert!(close.message.contains("Close"));
    assert_eq!(close.css_class, "gpa-close");
}
