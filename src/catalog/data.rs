use crate::models::{CourseRecord, Institution};

fn course(
    name: &str,
    faculty: &str,
    gpa_requirement: f64,
    intake: &str,
    additional_info: &str,
    keywords: &[&str],
) -> CourseRecord {
    CourseRecord {
        name: name.to_string(),
        faculty: faculty.to_string(),
        gpa_requirement,
        duration: "4 years".to_string(),
        intake: intake.to_string(),
        additional_info: Some(additional_info.to_string()),
        last_updated: "January 2025".to_string(),
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
    }
}

/// The built-in dataset: six Singapore universities and their headline
/// undergraduate programs. GPA requirements are indicative, on a 5.0 scale.
pub fn builtin_institutions() -> Vec<Institution> {
    vec![
        Institution {
            code: "nus".to_string(),
            name: "National University of Singapore (NUS)".to_string(),
            courses: vec![
                course(
                    "Computer Science",
                    "School of Computing",
                    3.7,
                    "August",
                    "Strong emphasis on software engineering and AI",
                    &["computer", "programming", "software", "tech", "it", "computing"],
                ),
                course(
                    "Business Administration",
                    "NUS Business School",
                    3.5,
                    "August",
                    "Includes overseas exchange opportunities",
                    &["business", "management", "administration", "commerce", "marketing"],
                ),
                course(
                    "Mechanical Engineering",
                    "Faculty of Engineering",
                    3.4,
                    "August",
                    "ABET accredited program",
                    &["mechanical", "engineering", "machines", "manufacturing", "design"],
                ),
                course(
                    "Psychology",
                    "Faculty of Arts and Social Sciences",
                    3.6,
                    "August",
                    "Clinical and research tracks available",
                    &["psychology", "mental", "behavior", "research", "social"],
                ),
            ],
        },
        Institution {
            code: "ntu".to_string(),
            name: "Nanyang Technological University (NTU)".to_string(),
            courses: vec![
                course(
                    "Computer Science",
                    "School of Computer Science and Engineering",
                    3.6,
                    "August",
                    "Strong industry partnerships",
                    &["computer", "programming", "software", "tech", "it", "computing"],
                ),
                course(
                    "Electrical and Electronic Engineering",
                    "School of Electrical and Electronic Engineering",
                    3.5,
                    "August",
                    "Includes IoT and smart systems specializations",
                    &["electrical", "electronic", "engineering", "circuits", "systems"],
                ),
                course(
                    "Business",
                    "Nanyang Business School",
                    3.4,
                    "August",
                    "Triple accredited business school",
                    &["business", "management", "finance", "commerce", "marketing"],
                ),
            ],
        },
        Institution {
            code: "smu".to_string(),
            name: "Singapore Management University (SMU)".to_string(),
            courses: vec![
                course(
                    "Information Systems",
                    "School of Information Systems",
                    3.5,
                    "August",
                    "Focus on business technology solutions",
                    &["information", "systems", "technology", "business", "it"],
                ),
                course(
                    "Business Management",
                    "Lee Kong Chian School of Business",
                    3.6,
                    "August",
                    "Emphasis on case-based learning",
                    &["business", "management", "leadership", "strategy", "commerce"],
                ),
                course(
                    "Economics",
                    "School of Economics",
                    3.4,
                    "August",
                    "Strong quantitative focus",
                    &["economics", "finance", "quantitative", "analysis", "policy"],
                ),
            ],
        },
        Institution {
            code: "sutd".to_string(),
            name: "Singapore University of Technology and Design (SUTD)".to_string(),
            courses: vec![
                course(
                    "Computer Science and Design",
                    "Information Systems Technology and Design",
                    3.5,
                    "September",
                    "Integrates design thinking with computer science",
                    &["computer", "design", "technology", "innovation", "systems"],
                ),
                course(
                    "Engineering Product Development",
                    "Engineering Product Development",
                    3.4,
                    "September",
                    "Focus on product innovation and development",
                    &["engineering", "product", "development", "innovation", "design"],
                ),
            ],
        },
        Institution {
            code: "sit".to_string(),
            name: "Singapore Institute of Technology (SIT)".to_string(),
            courses: vec![
                course(
                    "Software Engineering",
                    "School of Computing",
                    3.2,
                    "August",
                    "Applied learning approach with industry projects",
                    &["software", "engineering", "programming", "development", "applications"],
                ),
                course(
                    "Hospitality Business",
                    "School of Business",
                    3.0,
                    "August",
                    "Strong industry connections in hospitality sector",
                    &["hospitality", "business", "tourism", "service", "management"],
                ),
            ],
        },
        Institution {
            code: "suss".to_string(),
            name: "Singapore University of Social Sciences (SUSS)".to_string(),
            courses: vec![
                course(
                    "Social Work",
                    "School of Humanities and Behavioural Sciences",
                    3.0,
                    "August",
                    "Strong focus on community service and social impact",
                    &["social", "work", "community", "service", "counseling"],
                ),
                course(
                    "Business Analytics",
                    "School of Business",
                    3.3,
                    "August",
                    "Combines business knowledge with data analytics",
                    &["business", "analytics", "data", "analysis", "statistics"],
                ),
            ],
        },
    ]
}
