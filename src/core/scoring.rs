use crate::models::{FitStatus, FitThresholds, Recommendation};

/// GPA inputs carry at most a couple of decimal places; tolerate float
/// noise so an exact-margin difference lands in the higher bucket
const GPA_EPSILON: f64 = 1e-9;

/// Classify how well a GPA fits a course's requirement
///
/// Classification buckets on `difference = gpa - required`:
/// ```text
/// difference >= excellent_margin  -> excellent
/// difference >= 0                 -> good
/// difference >= -close_margin     -> close
/// otherwise                       -> challenging
/// ```
pub fn classify_fit(gpa: f64, required: f64, thresholds: &FitThresholds) -> Recommendation {
    let difference = gpa - required;

    let status = if difference >= thresholds.excellent_margin - GPA_EPSILON {
        FitStatus::Excellent
    } else if difference >= -GPA_EPSILON {
        FitStatus::Good
    } else if difference >= -thresholds.close_margin - GPA_EPSILON {
        FitStatus::Close
    } else {
        FitStatus::Challenging
    };

    Recommendation {
        status,
        message: status.message().to_string(),
        css_class: status.presentation_class().to_string(),
    }
}
