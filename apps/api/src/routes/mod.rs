pub mod health;
pub mod pages;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Pages
        .route("/", get(pages::home))
        .route("/analyze", get(pages::analyze))
        .route("/about", get(pages::about))
        .route("/ask-ai", get(pages::ask_ai))
        .route("/find-jobs", get(pages::find_jobs))
        // Analyze flow
        .route("/analyze-jd", post(handlers::handle_analyze_jd))
        .route("/analyze-resume", post(handlers::handle_analyze_resume))
        .route("/chat", post(handlers::handle_chat))
        // Ask AI
        .route("/ask-ai-chat", post(handlers::handle_ask_ai_chat))
        // Find jobs
        .route("/api/find-jobs", post(handlers::handle_find_jobs))
        .with_state(state)
}
