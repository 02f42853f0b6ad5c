// Resume analysis pipeline: extract → match → score → rule suggestions,
// plus the AI advisory call. All LLM traffic goes through llm_client —
// no direct Gemini calls here.

pub mod advisor;
pub mod catalog;
pub mod extract;
pub mod handlers;
pub mod matcher;
pub mod prompts;
pub mod rules;
pub mod scoring;

use crate::analysis::catalog::SkillCatalog;
use crate::analysis::matcher::{match_skills, SkillMatch};
use crate::analysis::rules::rule_suggestions;
use crate::analysis::scoring::compute_score;

/// Deterministic half of an analysis: everything except the AI feedback.
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    pub score: u8,
    pub skills: SkillMatch,
    pub rule_suggestions: Vec<String>,
}

/// Runs the synchronous pipeline over already-extracted, lower-cased text.
pub fn analyze_text(text: &str, catalog: &SkillCatalog) -> AnalysisReport {
    let skills = match_skills(text, catalog);
    let score = compute_score(skills.found.len(), catalog.len());
    let rule_suggestions = rule_suggestions(text, score);

    AnalysisReport {
        score,
        skills,
        rule_suggestions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::rules;

    #[test]
    fn test_end_to_end_python_sql_docker_scenario() {
        let catalog = SkillCatalog::new(vec![
            "python".to_string(),
            "sql".to_string(),
            "docker".to_string(),
        ]);
        // Lower-cased as TextExtractor would produce it
        let text = "i used python and sql in my project";

        let report = analyze_text(text, &catalog);

        assert_eq!(report.skills.found, vec!["python", "sql"]);
        assert_eq!(report.skills.missing, vec!["docker"]);
        assert_eq!(report.score, 66);
        assert_eq!(report.rule_suggestions[0], rules::MODERATE_SCORE_TIP);
        // "project" is present, so no projects tip; no experience keyword,
        // so the experience tip fires
        assert!(!report
            .rule_suggestions
            .iter()
            .any(|s| s == rules::PROJECTS_TIP));
        assert!(report
            .rule_suggestions
            .iter()
            .any(|s| s == rules::EXPERIENCE_TIP));
    }

    #[test]
    fn test_empty_catalog_scores_zero_end_to_end() {
        let catalog = SkillCatalog::new(vec![]);
        let report = analyze_text("python everywhere", &catalog);
        assert_eq!(report.score, 0);
        assert!(report.skills.found.is_empty());
        assert!(report.skills.missing.is_empty());
        assert!(!report.rule_suggestions.is_empty());
    }
}
