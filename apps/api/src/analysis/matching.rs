//! Resume Matching — compares résumé text with the JD analysis from step 1.

use serde_json::Value;
use tracing::debug;

use crate::analysis::prompts::{resume_match_prompt, NOT_AVAILABLE};
use crate::errors::AppError;
use crate::llm_client::LlmClient;

/// Role and skills pulled from the `jd_analysis` JSON the browser echoes back.
#[derive(Debug, Clone, PartialEq)]
pub struct JdContext {
    pub job_role: String,
    pub key_skills: String,
}

impl JdContext {
    /// Never fails: unreadable input degrades to "N/A" placeholders.
    pub fn from_analysis_json(raw: &str) -> Self {
        let Ok(value) = serde_json::from_str::<Value>(raw) else {
            debug!("jd_analysis is not valid JSON; using placeholders");
            return Self {
                job_role: NOT_AVAILABLE.to_string(),
                key_skills: NOT_AVAILABLE.to_string(),
            };
        };

        let job_role = value
            .get("job_role")
            .and_then(Value::as_str)
            .unwrap_or(NOT_AVAILABLE)
            .to_string();

        let key_skills = match value.get("key_skills") {
            None | Some(Value::Null) => String::new(),
            Some(Value::Array(items)) => items
                .iter()
                .map(Value::as_str)
                .collect::<Option<Vec<_>>>()
                .map(|skills| skills.join(", "))
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            Some(_) => NOT_AVAILABLE.to_string(),
        };

        Self {
            job_role,
            key_skills,
        }
    }
}

pub const MIN_MATCH_SCORE: i64 = 1;
pub const MAX_MATCH_SCORE: i64 = 10;

/// Rounds a numeric `match_score` into `MIN_MATCH_SCORE..=MAX_MATCH_SCORE`.
/// Anything else in the object, a missing or non-numeric score included, is left alone.
pub fn clamp_match_score(analysis: &mut Value) {
    let Some(score) = analysis.get_mut("match_score") else {
        return;
    };
    if let Some(raw) = score.as_f64().filter(|s| s.is_finite()) {
        let clamped = (raw.round() as i64).clamp(MIN_MATCH_SCORE, MAX_MATCH_SCORE);
        *score = Value::from(clamped);
    }
}

/// Returns the model's JSON, only normalizing `match_score`.
pub async fn analyze_resume(
    jd: &JdContext,
    resume_text: &str,
    llm: &LlmClient,
) -> Result<Value, AppError> {
    let prompt = resume_match_prompt(&jd.job_role, &jd.key_skills, resume_text);
    let mut analysis = llm.call_json(&prompt).await?;
    clamp_match_score(&mut analysis);
    Ok(analysis)
}
