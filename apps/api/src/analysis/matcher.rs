//! Skill matching: case-insensitive substring scan of extracted resume text
//! against the catalog.
//!
//! Known limitation, kept on purpose: matching is plain substring containment
//! with no word-boundary enforcement, so a catalog entry "go" matches inside
//! "algorithm". Callers wanting stricter semantics should curate the catalog
//! (use "golang") rather than expect fuzzy or token-level matching here.

use serde::Serialize;

use crate::analysis::catalog::SkillCatalog;

/// Partition of the catalog into skills present in the text and the rest.
/// Both lists preserve catalog order and are disjoint by construction.
#[derive(Debug, Clone, Serialize)]
pub struct SkillMatch {
    pub found: Vec<String>,
    pub missing: Vec<String>,
}

/// Scans `text` for each catalog skill in catalog order.
/// `text` is expected to be lower-cased already (TextExtractor guarantees
/// this); skill names are lowered here so catalogs may carry display casing.
pub fn match_skills(text: &str, catalog: &SkillCatalog) -> SkillMatch {
    let mut found = Vec::new();
    let mut missing = Vec::new();

    for skill in catalog.skills() {
        if text.contains(&skill.to_lowercase()) {
            found.push(skill.clone());
        } else {
            missing.push(skill.clone());
        }
    }

    SkillMatch { found, missing }
}
