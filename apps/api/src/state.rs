use std::sync::Arc;

use crate::extract::TextExtractor;
use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
/// Immutable: nothing here is written after startup.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
    /// Pluggable document extractor. Default: PdfTextExtractor.
    pub extractor: Arc<dyn TextExtractor>,
}
