use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use tracing::{debug, info};

use crate::analysis::{analyze_text, extract};
use crate::errors::AppError;
use crate::state::AppState;

/// Multipart field name carrying the uploaded resume.
const RESUME_FIELD: &str = "resume";

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub score: u8,
    pub found_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub rule_suggestions: Vec<String>,
    pub ai_feedback: String,
}

/// POST /api/v1/analyze
///
/// Accepts a multipart upload with a `resume` file field and responds with
/// the full analysis payload. Request-shape problems (missing file, empty
/// filename, nothing extractable) surface as error responses; pipeline
/// failures never do.
pub async fn handle_analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let (filename, data) = read_resume_field(&mut multipart).await?;

    if filename.is_empty() {
        return Err(AppError::Validation("no file selected".to_string()));
    }

    let text = extract::extract_text(&data);
    debug!("extracted {} chars from '{filename}'", text.len());

    if text.trim().is_empty() {
        return Err(AppError::UnprocessableEntity(format!(
            "could not extract any text from '{filename}'"
        )));
    }

    let report = analyze_text(&text, &state.catalog);
    let ai_feedback = state.advisor.advise(&text).await;

    info!(
        score = report.score,
        found = report.skills.found.len(),
        missing = report.skills.missing.len(),
        "resume analyzed"
    );

    Ok(Json(AnalyzeResponse {
        score: report.score,
        found_skills: report.skills.found,
        missing_skills: report.skills.missing,
        rule_suggestions: report.rule_suggestions,
        ai_feedback,
    }))
}

/// Pulls the `resume` field out of the multipart stream.
/// A missing field is a validation error; so is a malformed stream.
async fn read_resume_field(multipart: &mut Multipart) -> Result<(String, Bytes), AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("malformed multipart request: {e}")))?
    {
        if field.name() == Some(RESUME_FIELD) {
            let filename = field.file_name().unwrap_or_default().to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("failed to read upload: {e}")))?;
            return Ok((filename, data));
        }
    }

    Err(AppError::Validation("no file uploaded".to_string()))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::analysis::advisor::AiAdvisor;
    use crate::analysis::catalog::SkillCatalog;
    use crate::routes::build_router;
    use crate::state::AppState;

    const BOUNDARY: &str = "skillscan-request-boundary";

    fn test_state() -> AppState {
        AppState {
            catalog: Arc::new(SkillCatalog::new(vec![
                "python".to_string(),
                "sql".to_string(),
            ])),
            advisor: Arc::new(AiAdvisor::new(None, "gemini-2.0-flash".to_string())),
        }
    }

    /// Builds a one-field multipart POST to the analyze endpoint.
    fn analyze_request(field: &str, filename: &str, payload: &[u8]) -> Request<Body> {
        let mut body = Vec::new();
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; \
                 name=\"{field}\"; filename=\"{filename}\"\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(payload);
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

        Request::builder()
            .method("POST")
            .uri("/api/v1/analyze")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    async fn error_code(response: axum::response::Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        json["error"]["code"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_missing_resume_field_is_rejected_with_400() {
        let app = build_router(test_state());
        let response = app
            .oneshot(analyze_request("attachment", "resume.pdf", b"whatever"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(error_code(response).await, "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_empty_filename_is_rejected_with_400() {
        let app = build_router(test_state());
        let response = app
            .oneshot(analyze_request("resume", "", b"%PDF-1.7 pretend"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(error_code(response).await, "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_unextractable_upload_is_rejected_with_422() {
        let app = build_router(test_state());
        let response = app
            .oneshot(analyze_request(
                "resume",
                "resume.pdf",
                b"definitely not a pdf",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(error_code(response).await, "UNPROCESSABLE_ENTITY");
    }
}
