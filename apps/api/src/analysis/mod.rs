// Résumé & JD analysis: JD extraction, résumé matching, job suggestions, career chat.
// All LLM calls go through llm_client — no direct Gemini calls here.

pub mod chat;
pub mod form;
pub mod handlers;
pub mod jd;
pub mod jobs;
pub mod matching;
pub mod prompts;
