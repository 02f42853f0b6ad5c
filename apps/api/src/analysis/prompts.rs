// LLM prompt constants for the analysis module.

/// Resume review prompt template. Replace `{resume_text}` before sending.
///
/// Asks for concise, actionable bullets (not a rewrite) covering ATS
/// compatibility, clarity, quantifiable impact, and missing skills/sections.
pub const REVIEW_PROMPT_TEMPLATE: &str = r#"Review the following resume and give short bullet-point suggestions to improve it. Cover:
- ATS (applicant tracking system) compatibility
- Clarity and readability
- Quantifiable impact (numbers, outcomes)
- Missing skills or sections worth adding

Keep each suggestion to one line. Do NOT rewrite the resume.

Resume:
{resume_text}"#;

pub fn build_review_prompt(resume_text: &str) -> String {
    REVIEW_PROMPT_TEMPLATE.replace("{resume_text}", resume_text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_resume_text() {
        let prompt = build_review_prompt("python developer, 3 years");
        assert!(prompt.contains("python developer, 3 years"));
        assert!(!prompt.contains("{resume_text}"));
    }
}
