//! Axum route handlers for the evaluation form.

use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    response::Html,
    Json,
};
use bytes::Bytes;

use crate::errors::AppError;
use crate::evaluation::shell::{run_action, Action, EvaluationForm, EvaluationOutcome};
use crate::state::AppState;

/// Largest accepted upload. Applied as the body limit on the evaluation route.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

const INDEX_HTML: &str = include_str!("../../static/index.html");

/// GET /
///
/// Serves the form page.
pub async fn handle_index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// POST /api/v1/evaluations
///
/// Multipart fields: `action`, `job_description`, `custom_prompt`, `resume` (PDF file).
/// Unknown fields are drained and ignored.
pub async fn handle_evaluate(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<EvaluationOutcome>, AppError> {
    let form = read_form(multipart).await?;
    let outcome = run_action(form, &state.renderer, state.evaluator.as_ref()).await?;
    Ok(Json(outcome))
}

async fn read_form(mut multipart: Multipart) -> Result<EvaluationForm, AppError> {
    let mut action: Option<Action> = None;
    let mut job_description = String::new();
    let mut custom_prompt = String::new();
    let mut document: Option<Bytes> = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "action" => {
                let value = field_text(field).await?;
                action = Some(
                    Action::parse(&value)
                        .ok_or_else(|| AppError::Validation(format!("Unknown action '{value}'")))?,
                );
            }
            "job_description" => job_description = field_text(field).await?,
            "custom_prompt" => custom_prompt = field_text(field).await?,
            "resume" => {
                document = Some(field.bytes().await.map_err(multipart_error)?);
            }
            _ => {
                let _ = field.bytes().await.map_err(multipart_error)?;
            }
        }
    }

    let action = action.ok_or_else(|| AppError::Validation("action is required".to_string()))?;

    Ok(EvaluationForm {
        action,
        job_description,
        custom_prompt,
        document,
    })
}

async fn field_text(field: axum::extract::multipart::Field<'_>) -> Result<String, AppError> {
    field.text().await.map_err(multipart_error)
}

/// Keeps the body-limit rejection distinct from malformed input.
fn multipart_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge
    } else {
        AppError::Validation(format!("Malformed form data: {}", err.body_text()))
    }
}
