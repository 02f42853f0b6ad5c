use std::sync::Arc;

use crate::analysis::advisor::AiAdvisor;
use crate::analysis::catalog::SkillCatalog;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Everything here is read-only for the process lifetime: the catalog is
/// loaded once at startup and never mutated, so handlers need no locking.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<SkillCatalog>,
    pub advisor: Arc<AiAdvisor>,
}
