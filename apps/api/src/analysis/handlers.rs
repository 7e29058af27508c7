//! Axum route handlers for the analysis API.

use axum::{
    extract::{
        multipart::MultipartRejection,
        rejection::JsonRejection,
        Multipart, State,
    },
    Json,
};
use serde_json::Value;
use tracing::info;

use crate::analysis::chat::{ask_ai_reply, coach_reply, AskAiRequest, ChatReply, CoachChatRequest};
use crate::analysis::form::{UploadForm, UploadedFile};
use crate::analysis::jd::analyze_jd;
use crate::analysis::jobs::suggest_jobs;
use crate::analysis::matching::{analyze_resume, JdContext};
use crate::errors::AppError;
use crate::extract::extract_document_text;
use crate::state::AppState;

const MSG_NO_JD: &str = "Please provide a Job Description (paste text or upload a PDF).";
const MSG_JD_PDF_UNREADABLE: &str = "Failed to extract text from the uploaded PDF.";
const MSG_RESUME_PDF_UNREADABLE: &str = "Failed to extract text from your Resume PDF.";
const MSG_NO_JD_OR_RESUME: &str = "Missing information. Please provide both the JD and your Resume.";
const MSG_NO_RESUME: &str = "Please upload your resume as a PDF.";
const MSG_NO_MESSAGE: &str = "Please enter a message.";

async fn extract_or(
    state: &AppState,
    file: &UploadedFile,
    failure: &str,
) -> Result<String, AppError> {
    extract_document_text(state.extractor.clone(), file.bytes.clone())
        .await
        .ok_or_else(|| AppError::Extraction(failure.to_string()))
}

fn require_message(message: &str) -> Result<&str, AppError> {
    let message = message.trim();
    if message.is_empty() {
        return Err(AppError::MissingInput(MSG_NO_MESSAGE.to_string()));
    }
    Ok(message)
}

/// POST /analyze-jd
///
/// Step 1 of the analyze flow. An uploaded `.pdf` takes priority over pasted text.
pub async fn handle_analyze_jd(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<Value>, AppError> {
    let form = UploadForm::from_multipart(multipart?).await?;

    let jd_text = match form.file("jd_file").filter(|f| f.is_pdf()) {
        Some(file) => extract_or(&state, file, MSG_JD_PDF_UNREADABLE).await?,
        None => form.text("jd_text").to_string(),
    };

    if jd_text.is_empty() {
        return Err(AppError::MissingInput(MSG_NO_JD.to_string()));
    }

    info!(chars = jd_text.chars().count(), "Analyzing job description");
    let analysis = analyze_jd(&jd_text, &state.llm).await?;
    Ok(Json(analysis))
}

/// POST /analyze-resume
///
/// Step 2 of the analyze flow. `jd_analysis` is the step 1 result as a JSON string.
pub async fn handle_analyze_resume(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<Value>, AppError> {
    let form = UploadForm::from_multipart(multipart?).await?;

    let resume_file = match form.file("resume_file") {
        Some(file) if !form.text("jd_text").is_empty() => file,
        _ => return Err(AppError::MissingInput(MSG_NO_JD_OR_RESUME.to_string())),
    };

    let resume_text = extract_or(&state, resume_file, MSG_RESUME_PDF_UNREADABLE).await?;
    let jd = JdContext::from_analysis_json(form.raw("jd_analysis").unwrap_or("{}"));

    info!(role = %jd.job_role, "Matching resume against job description");
    let analysis = analyze_resume(&jd, &resume_text, &state.llm).await?;
    Ok(Json(analysis))
}

/// POST /chat
///
/// Follow-up questions about a résumé analysis.
pub async fn handle_chat(
    State(state): State<AppState>,
    request: Result<Json<CoachChatRequest>, JsonRejection>,
) -> Result<Json<ChatReply>, AppError> {
    let Json(request) = request?;
    let message = require_message(&request.message)?;
    let context = request.resume_analysis.unwrap_or_default();

    let reply = coach_reply(message, &context, &state.llm).await?;
    Ok(Json(reply))
}

/// POST /ask-ai-chat
///
/// General career questions, no analysis context.
pub async fn handle_ask_ai_chat(
    State(state): State<AppState>,
    request: Result<Json<AskAiRequest>, JsonRejection>,
) -> Result<Json<ChatReply>, AppError> {
    let Json(request) = request?;
    let message = require_message(&request.message)?;

    let reply = ask_ai_reply(message, &state.llm).await?;
    Ok(Json(reply))
}

/// POST /api/find-jobs
///
/// Suggests roles for a résumé. Every `apply_link` is rewritten to a search URL.
pub async fn handle_find_jobs(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<Value>, AppError> {
    let form = UploadForm::from_multipart(multipart?).await?;

    let resume_file = form
        .file("resume_file")
        .ok_or_else(|| AppError::MissingInput(MSG_NO_RESUME.to_string()))?;
    let resume_text = extract_or(&state, resume_file, MSG_RESUME_PDF_UNREADABLE).await?;

    info!(chars = resume_text.chars().count(), "Suggesting jobs for resume");
    let suggestions = suggest_jobs(&resume_text, &state.llm).await?;
    Ok(Json(suggestions))
}
