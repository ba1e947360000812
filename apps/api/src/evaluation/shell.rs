//! Interaction Shell: turns one button press into exactly one evaluation flow.
//!
//! Flow: document check → template selection → render first page → evaluate → outcome.
//!
//! Validation runs before the expensive path: a missing résumé or a blank custom
//! prompt never reaches the renderer or the evaluator.

use bytes::Bytes;
use serde::Serialize;
use tracing::info;

use crate::document::DocumentRenderer;
use crate::errors::AppError;
use crate::evaluation::evaluator::Evaluator;
use crate::evaluation::prompts::PromptTemplate;

/// The three form buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    ResumeReview,
    MatchPercentage,
    CustomPrompt,
}

impl Action {
    /// Heading shown above the result.
    pub fn heading(self) -> &'static str {
        match self {
            Action::ResumeReview => "Evaluation Results",
            Action::MatchPercentage => "Percentage Match",
            Action::CustomPrompt => "Custom Prompt Response",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "resume_review" => Some(Action::ResumeReview),
            "match_percentage" => Some(Action::MatchPercentage),
            "custom_prompt" => Some(Action::CustomPrompt),
            _ => None,
        }
    }
}

/// Everything the form submits for one action.
#[derive(Debug, Clone)]
pub struct EvaluationForm {
    pub action: Action,
    pub job_description: String,
    pub custom_prompt: String,
    /// Raw PDF bytes. `None` when no file was chosen.
    pub document: Option<Bytes>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EvaluationOutcome {
    pub action: Action,
    pub heading: &'static str,
    /// The model's reply, unparsed.
    pub response: String,
}

/// Runs one action to completion.
pub async fn run_action(
    form: EvaluationForm,
    renderer: &DocumentRenderer,
    evaluator: &dyn Evaluator,
) -> Result<EvaluationOutcome, AppError> {
    let document = form
        .document
        .filter(|bytes| !bytes.is_empty())
        .ok_or(AppError::MissingDocument)?;

    let template = match form.action {
        Action::ResumeReview => PromptTemplate::ResumeReview,
        Action::MatchPercentage => PromptTemplate::MatchPercentage,
        Action::CustomPrompt => PromptTemplate::custom(form.custom_prompt)?,
    };

    info!(
        "Running {:?} on a {} byte document",
        form.action,
        document.len()
    );

    let image = renderer.render_first_page(document).await?;
    let response = evaluator
        .evaluate(&form.job_description, &image, template.instruction())
        .await?;

    Ok(EvaluationOutcome {
        action: form.action,
        heading: form.action.heading(),
        response,
    })
}
