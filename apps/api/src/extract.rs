//! Document text extraction for uploaded résumés and job descriptions.

use std::sync::Arc;

use bytes::Bytes;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("PDF extraction error: {0}")]
    Pdf(String),
}

/// Turns an uploaded document into plain text.
/// Implementations are synchronous; callers go through `extract_document_text`.
pub trait TextExtractor: Send + Sync {
    fn extract_text(&self, bytes: &[u8]) -> Result<String, ExtractError>;
}

/// `pdf-extract` backed extractor. No OCR: scanned PDFs yield no text.
pub struct PdfTextExtractor;

impl TextExtractor for PdfTextExtractor {
    fn extract_text(&self, bytes: &[u8]) -> Result<String, ExtractError> {
        pdf_extract::extract_text_from_mem(bytes).map_err(|e| ExtractError::Pdf(e.to_string()))
    }
}

/// Runs extraction on the blocking pool and returns the trimmed text.
///
/// `None` when the library fails, panics, or finds only whitespace.
pub async fn extract_document_text(
    extractor: Arc<dyn TextExtractor>,
    bytes: Bytes,
) -> Option<String> {
    let size = bytes.len();
    let outcome = tokio::task::spawn_blocking(move || extractor.extract_text(&bytes)).await;

    match outcome {
        Ok(Ok(text)) => {
            let text = text.trim();
            if text.is_empty() {
                warn!(size, "Document contained no extractable text");
                None
            } else {
                debug!(size, chars = text.chars().count(), "Extracted document text");
                Some(text.to_string())
            }
        }
        Ok(Err(e)) => {
            warn!(size, "{e}");
            None
        }
        Err(e) => {
            warn!(size, "PDF extraction task failed: {e}");
            None
        }
    }
}
