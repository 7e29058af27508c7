//! Job Suggestions — role ideas from a résumé, with search links we control.

use serde_json::Value;
use tracing::warn;

use crate::analysis::prompts::job_suggestion_prompt;
use crate::errors::AppError;
use crate::llm_client::LlmClient;

pub const JOB_SEARCH_URL: &str = "https://www.linkedin.com/jobs/search/?keywords=";

/// Search URL for a role title, spaces replaced by `+`.
pub fn job_search_link(role_title: &str) -> String {
    format!("{JOB_SEARCH_URL}{}", role_title.replace(' ', "+"))
}

/// Replaces every model-written `apply_link` with the search URL of its role.
///
/// Works on whatever shape the model returned: a role without a string
/// `role_title` or without an `example_jobs` array is left as it is, and
/// only object entries inside `example_jobs` get a link.
pub fn rewrite_apply_links(suggestions: &mut Value) {
    let Some(roles) = suggestions
        .get_mut("suggested_roles")
        .and_then(Value::as_array_mut)
    else {
        return;
    };

    for role in roles {
        let Some(link) = role
            .get("role_title")
            .and_then(Value::as_str)
            .map(job_search_link)
        else {
            warn!("Suggested role has no string role_title; leaving its links untouched");
            continue;
        };
        let Some(jobs) = role.get_mut("example_jobs").and_then(Value::as_array_mut) else {
            continue;
        };
        for job in jobs.iter_mut().filter_map(Value::as_object_mut) {
            job.insert("apply_link".to_string(), Value::String(link.clone()));
        }
    }
}

pub async fn suggest_jobs(resume_text: &str, llm: &LlmClient) -> Result<Value, AppError> {
    let prompt = job_suggestion_prompt(resume_text);
    let mut suggestions = llm.call_json(&prompt).await?;
    rewrite_apply_links(&mut suggestions);
    Ok(suggestions)
}
