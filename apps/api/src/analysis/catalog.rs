//! The reference skill catalog: an ordered list of skill keywords, fixed at
//! process start and shared read-only across requests.

use anyhow::{Context, Result};
use std::path::Path;

/// Skills checked when SKILL_CATALOG_PATH is not configured.
/// Order matters: found/missing lists are reported in catalog order.
const DEFAULT_SKILLS: &[&str] = &[
    "python",
    "java",
    "c++",
    "javascript",
    "sql",
    "html",
    "css",
    "react",
    "node.js",
    "django",
    "flask",
    "machine learning",
    "data analysis",
    "git",
    "docker",
    "aws",
    "linux",
    "excel",
    "communication",
    "teamwork",
];

/// Ordered, case-insensitively deduplicated skill list.
#[derive(Debug, Clone)]
pub struct SkillCatalog {
    skills: Vec<String>,
}

impl SkillCatalog {
    /// Builds a catalog from raw entries, preserving first-occurrence order
    /// and dropping blank or case-insensitive duplicate entries.
    pub fn new(entries: Vec<String>) -> Self {
        let mut skills: Vec<String> = Vec::with_capacity(entries.len());
        for entry in entries {
            let entry = entry.trim().to_string();
            if entry.is_empty() {
                continue;
            }
            let lower = entry.to_lowercase();
            if !skills.iter().any(|s| s.to_lowercase() == lower) {
                skills.push(entry);
            }
        }
        Self { skills }
    }

    /// Loads the catalog from a JSON array of strings, or falls back to the
    /// built-in default list when no path is configured.
    ///
    /// A path that is configured but unreadable or unparsable is a startup
    /// error — config mistakes should fail loudly, not silently score 0.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let entries = match path {
            Some(path) => {
                let raw = std::fs::read_to_string(path).with_context(|| {
                    format!("failed to read skill catalog at {}", path.display())
                })?;
                serde_json::from_str::<Vec<String>>(&raw).with_context(|| {
                    format!("skill catalog at {} is not a JSON string array", path.display())
                })?
            }
            None => DEFAULT_SKILLS.iter().map(|s| s.to_string()).collect(),
        };
        Ok(Self::new(entries))
    }

    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}
