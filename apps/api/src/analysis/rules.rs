//! Deterministic rule-based suggestions.
//!
//! A fixed-order decision table over the extracted text and score. Output
//! order equals rule-evaluation order; no sorting, no deduplication.

/// Fired when score < 40.
pub const LOW_SCORE_TIP: &str = "Add more technical skills.";
/// Fired when 40 <= score < 70.
pub const MODERATE_SCORE_TIP: &str = "Improve resume by adding more relevant tools.";
/// Fired when score >= 70.
pub const STRONG_SCORE_TIP: &str = "Strong profile. Add measurable achievements.";

pub const PROJECTS_TIP: &str = "Add project experience.";
pub const EXPERIENCE_TIP: &str = "Add internship or work experience details.";
pub const FORMATTING_TIP: &str = "Improve formatting and readability.";

/// Evaluates the decision table against lower-cased resume text.
///
/// Rule 1 always fires (exactly one tier message), so the result is never
/// empty; the final formatting rule is a defensive guarantee only.
pub fn rule_suggestions(text: &str, score: u8) -> Vec<String> {
    let mut suggestions = Vec::new();

    if score < 40 {
        suggestions.push(LOW_SCORE_TIP.to_string());
    } else if score < 70 {
        suggestions.push(MODERATE_SCORE_TIP.to_string());
    } else {
        suggestions.push(STRONG_SCORE_TIP.to_string());
    }

    // "projects" contains "project", so one containment check covers both forms
    if !text.contains("project") {
        suggestions.push(PROJECTS_TIP.to_string());
    }

    if !text.contains("internship") && !text.contains("experience") {
        suggestions.push(EXPERIENCE_TIP.to_string());
    }

    if suggestions.is_empty() {
        suggestions.push(FORMATTING_TIP.to_string());
    }

    suggestions
}
