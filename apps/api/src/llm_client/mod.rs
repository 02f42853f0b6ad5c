/// LLM Client — the single point of entry for all Gemini API calls in Skillscan.
///
/// ARCHITECTURAL RULE: No other module may call the Generative Language API
/// directly. All LLM interactions MUST go through this module, behind the
/// `GenerativeClient` trait so callers can be tested with a fake.
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
/// Default model when GEMINI_MODEL is not configured.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Failure modes of a generative call, pre-classified so callers never have
/// to sniff provider error prose themselves.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Authentication rejected: {message}")]
    Auth { message: String },

    #[error("Model unavailable: {message}")]
    ModelUnavailable { message: String },

    #[error("Rate limited: {message}")]
    RateLimited { message: String },

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// The capability seam for external text generation.
///
/// One method, one attempt: callers decide how to absorb failures.
/// Production uses `GeminiClient`; tests substitute an in-process fake.
#[async_trait]
pub trait GenerativeClient: Send + Sync {
    async fn generate(&self, model: &str, prompt: &str) -> Result<String, LlmError>;
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

impl GenerateResponse {
    /// Extracts the text of the first candidate's first text part.
    fn text(&self) -> Option<&str> {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .and_then(|c| c.parts.iter().find_map(|p| p.text.as_deref()))
    }
}

#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Production client for the Google Generative Language REST API.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
}

impl GeminiClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }
}

#[async_trait]
impl GenerativeClient for GeminiClient {
    /// Makes a single call to `models/{model}:generateContent`.
    /// No retry: the advisory layer absorbs any failure into fallback text,
    /// so retrying here would only add latency to an already-degraded path.
    async fn generate(&self, model: &str, prompt: &str) -> Result<String, LlmError> {
        let url = format!("{GEMINI_API_BASE}/models/{model}:generateContent");
        let request_body = GenerateRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Prefer the structured error message when the body parses
            let message = serde_json::from_str::<ApiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(classify_failure(status.as_u16(), message));
        }

        let body = response.text().await?;
        let parsed: GenerateResponse = serde_json::from_str(&body)?;

        debug!("generative call succeeded (model: {model})");

        parsed
            .text()
            .map(|t| t.to_string())
            .ok_or(LlmError::EmptyContent)
    }
}

/// Maps a non-success response onto the error taxonomy.
///
/// HTTP status is the structured signal and wins when it is unambiguous.
/// For ambiguous statuses (Gemini reports a bad API key as 400) we fall back
/// to substring classification of the error message — a documented
/// imprecision inherited from the provider's free-text errors.
fn classify_failure(status: u16, message: String) -> LlmError {
    match status {
        401 | 403 => LlmError::Auth { message },
        404 => LlmError::ModelUnavailable { message },
        429 => LlmError::RateLimited { message },
        _ => {
            let lower = message.to_lowercase();
            if lower.contains("api key") {
                LlmError::Auth { message }
            } else if lower.contains("not found") || lower.contains("model") {
                LlmError::ModelUnavailable { message }
            } else {
                LlmError::Api { status, message }
            }
        }
    }
}
