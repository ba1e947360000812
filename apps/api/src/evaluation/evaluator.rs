//! Evaluator: the one capability the shell needs from the outside world.
//!
//! `AppState` holds an `Arc<dyn Evaluator>`; production wires in `GeminiEvaluator`,
//! tests swap in a stub that never touches the network.

use async_trait::async_trait;
use tracing::info;

use crate::document::PageImage;
use crate::errors::AppError;
use crate::llm_client::{GeminiClient, InlineData, Part};

/// Sends (instruction, page image, job description) to a model and returns its reply verbatim.
///
/// Every failure of the external call (auth, network, quota, blocked output)
/// comes back as `AppError::Service`. No retry.
#[async_trait]
pub trait Evaluator: Send + Sync {
    async fn evaluate(
        &self,
        job_description: &str,
        image: &PageImage,
        instruction: &str,
    ) -> Result<String, AppError>;
}

/// Gemini-backed evaluator.
pub struct GeminiEvaluator(pub GeminiClient);

#[async_trait]
impl Evaluator for GeminiEvaluator {
    async fn evaluate(
        &self,
        job_description: &str,
        image: &PageImage,
        instruction: &str,
    ) -> Result<String, AppError> {
        let parts = evaluation_parts(job_description, image, instruction);

        let response = self
            .0
            .generate(&parts)
            .await
            .map_err(|e| AppError::Service(format!("Gemini evaluation failed: {e}")))?;

        let text = response
            .into_text()
            .map_err(|e| AppError::Service(format!("Gemini evaluation failed: {e}")))?;

        info!("Evaluation completed ({} chars)", text.len());
        Ok(text)
    }
}

/// Orders the request parts: instruction, then the page image, then the job description.
/// A blank job description is still sent.
fn evaluation_parts<'a>(
    job_description: &'a str,
    image: &'a PageImage,
    instruction: &'a str,
) -> [Part<'a>; 3] {
    [
        Part::Text { text: instruction },
        Part::InlineData {
            inline_data: InlineData {
                mime_type: image.mime_type(),
                data: image.data(),
            },
        },
        Part::Text {
            text: job_description,
        },
    ]
}
