// Evaluation: Prompt Catalog, Evaluator seam, and the Interaction Shell.
// All model calls go through llm_client; nothing here talks to Gemini directly.

pub mod evaluator;
pub mod handlers;
pub mod prompts;
pub mod shell;
