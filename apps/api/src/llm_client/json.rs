//! Recovery of a JSON object from free-form model output.
//!
//! Models often wrap JSON in markdown fences or add a sentence before it.
//! The recovery is deliberately simple: drop the fences, take everything from
//! the first `{` to the last `}`, parse that. Output with braces in the
//! surrounding prose, or with several objects, will not parse.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::llm_client::prompts::truncate_chars;
use crate::llm_client::LlmError;

/// Maximum characters of raw model output kept in a parse error.
pub const RAW_SAMPLE_CHARS: usize = 200;

static JSON_FENCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"```json\s*").expect("valid regex"));
static BARE_FENCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"```").expect("valid regex"));
static OBJECT_SPAN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)\{.*\}").expect("valid regex"));

/// Removes ```json and ``` markers anywhere in the text.
pub fn strip_json_fences(text: &str) -> String {
    let text = JSON_FENCE.replace_all(text.trim(), "");
    BARE_FENCE.replace_all(&text, "").into_owned()
}

/// Parses model output into a JSON value.
///
/// Tries the first `{...}` span, then the whole trimmed text. The error keeps
/// at most `RAW_SAMPLE_CHARS` characters of the original output.
pub fn parse_model_json(raw: &str) -> Result<Value, LlmError> {
    let cleaned = strip_json_fences(raw);
    let cleaned = cleaned.trim();

    let from_span = OBJECT_SPAN
        .find(cleaned)
        .and_then(|m| serde_json::from_str::<Value>(m.as_str()).ok());
    if let Some(value) = from_span {
        return Ok(value);
    }

    serde_json::from_str::<Value>(cleaned).map_err(|source| LlmError::Parse {
        source,
        raw_response: raw_sample(raw),
    })
}

pub fn raw_sample(raw: &str) -> String {
    truncate_chars(raw, RAW_SAMPLE_CHARS).to_string()
}
