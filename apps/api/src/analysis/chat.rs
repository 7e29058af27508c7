//! Career chat — the coach follow-up on an analysis, and the open Ask-AI chat.

use serde::{Deserialize, Serialize};

use crate::analysis::prompts::{ask_ai_prompt, coach_chat_prompt};
use crate::errors::AppError;
use crate::llm_client::LlmClient;

const DEFAULT_ROLE: &str = "the role";

#[derive(Debug, Deserialize)]
pub struct CoachChatRequest {
    #[serde(default)]
    pub message: String,
    // Sent by the analyze page; the coach prompt works from the analysis alone.
    #[allow(dead_code)]
    #[serde(default)]
    pub jd_text: String,
    #[serde(default)]
    pub resume_analysis: Option<CoachContext>,
}

/// The parts of a résumé analysis the coach needs.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CoachContext {
    pub job_role: Option<String>,
    pub skills_found: Vec<String>,
    pub missing_skills: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct AskAiRequest {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChatReply {
    pub reply: String,
}

pub async fn coach_reply(
    message: &str,
    context: &CoachContext,
    llm: &LlmClient,
) -> Result<ChatReply, AppError> {
    let role = context.job_role.as_deref().unwrap_or(DEFAULT_ROLE);
    let prompt = coach_chat_prompt(role, &context.skills_found, &context.missing_skills, message);
    let reply = llm.call_text(&prompt).await?;
    Ok(ChatReply { reply })
}

pub async fn ask_ai_reply(message: &str, llm: &LlmClient) -> Result<ChatReply, AppError> {
    let reply = llm.call_text(&ask_ai_prompt(message)).await?;
    Ok(ChatReply { reply })
}
