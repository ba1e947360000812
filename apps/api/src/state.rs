use std::sync::Arc;

use crate::config::Config;
use crate::document::DocumentRenderer;
use crate::evaluation::evaluator::Evaluator;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only after startup; requests share nothing else.
#[derive(Clone)]
pub struct AppState {
    pub renderer: DocumentRenderer,
    /// Pluggable evaluator. Default: GeminiEvaluator.
    pub evaluator: Arc<dyn Evaluator>,
    pub config: Config,
}
