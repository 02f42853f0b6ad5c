//! AI-generated resume feedback with total failure absorption.
//!
//! `AiAdvisor::advise` always returns a displayable string. Every failure
//! mode of the external call — and the absence of a configured client — is
//! converted into one of a small set of canned fallback messages.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::analysis::prompts::build_review_prompt;
use crate::llm_client::{GenerativeClient, LlmError};

/// Longest resume prefix sent to the model. Bounds cost and latency of the
/// downstream call; resumes longer than this are reviewed on their head.
const MAX_PROMPT_CHARS: usize = 4000;

pub const EMPTY_INPUT_FEEDBACK: &str = "Resume text is empty. Cannot analyze.";

pub const AUTH_FALLBACK: &str = "AI suggestions are unavailable: the Gemini API rejected the \
    configured credentials. Check GEMINI_API_KEY in your environment or .env file.";

pub const MODEL_FALLBACK: &str = "AI suggestions are unavailable: the configured model could not \
    be found. Update GEMINI_MODEL to an available model name.";

pub const GENERIC_FALLBACK: &str = "AI suggestions are temporarily unavailable.\n\n\
    Meanwhile, consider these improvements:\n\
    - Add measurable achievements (numbers, impact)\n\
    - Use strong action verbs\n\
    - Tailor skills to the job description\n\
    - Improve formatting for ATS compatibility\n\
    - Add relevant projects or internships";

/// Calls the generative service once per analysis and classifies failures
/// into fixed fallback messages. Constructed without a client when no API
/// key is configured, in which case it degrades to the generic fallback.
pub struct AiAdvisor {
    client: Option<Arc<dyn GenerativeClient>>,
    model: String,
}

impl AiAdvisor {
    pub fn new(client: Option<Arc<dyn GenerativeClient>>, model: String) -> Self {
        Self { client, model }
    }

    /// Produces AI feedback for the extracted resume text.
    ///
    /// Infallible by contract: whitespace-only input short-circuits to the
    /// empty-input message without touching the network, and any error from
    /// the external call is absorbed into a fallback string.
    pub async fn advise(&self, text: &str) -> String {
        if text.trim().is_empty() {
            return EMPTY_INPUT_FEEDBACK.to_string();
        }

        let Some(client) = &self.client else {
            debug!("no generative client configured, returning static tips");
            return GENERIC_FALLBACK.to_string();
        };

        let prompt = build_review_prompt(truncate_chars(text, MAX_PROMPT_CHARS));

        match client.generate(&self.model, &prompt).await {
            Ok(feedback) => feedback.trim().to_string(),
            Err(e) => {
                warn!("generative call failed: {e}");
                fallback_for(&e).to_string()
            }
        }
    }
}

/// Selects the canned fallback for a classified failure.
fn fallback_for(err: &LlmError) -> &'static str {
    match err {
        LlmError::Auth { .. } => AUTH_FALLBACK,
        LlmError::ModelUnavailable { .. } => MODEL_FALLBACK,
        _ => GENERIC_FALLBACK,
    }
}

/// Char-boundary-safe prefix of at most `max_chars` characters.
fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
