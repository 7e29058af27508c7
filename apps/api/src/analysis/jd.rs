//! JD Analysis — extracts role, skills and experience from a raw job description.

use serde_json::Value;

use crate::analysis::prompts::jd_analysis_prompt;
use crate::errors::AppError;
use crate::llm_client::LlmClient;

/// Returns the model's JSON as-is: `{job_role, key_skills, experience_required, summary}`
/// when the model follows the prompt.
pub async fn analyze_jd(jd_text: &str, llm: &LlmClient) -> Result<Value, AppError> {
    let prompt = jd_analysis_prompt(jd_text);
    Ok(llm.call_json(&prompt).await?)
}
