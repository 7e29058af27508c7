//! Static pages. The browser talks to the JSON endpoints from these.

use askama::Template;
use axum::response::Html;

use crate::errors::AppError;

#[derive(Template)]
#[template(path = "index.html")]
struct HomePage {
    active: &'static str,
}

#[derive(Template)]
#[template(path = "analyze.html")]
struct AnalyzePage {
    active: &'static str,
}

#[derive(Template)]
#[template(path = "about.html")]
struct AboutPage {
    active: &'static str,
}

#[derive(Template)]
#[template(path = "ask_ai.html")]
struct AskAiPage {
    active: &'static str,
}

#[derive(Template)]
#[template(path = "find_jobs.html")]
struct FindJobsPage {
    active: &'static str,
}

fn render(page: impl Template) -> Result<Html<String>, AppError> {
    Ok(Html(page.render()?))
}

/// GET /
pub async fn home() -> Result<Html<String>, AppError> {
    render(HomePage { active: "home" })
}

/// GET /analyze
pub async fn analyze() -> Result<Html<String>, AppError> {
    render(AnalyzePage { active: "analyze" })
}

/// GET /about
pub async fn about() -> Result<Html<String>, AppError> {
    render(AboutPage { active: "about" })
}

/// GET /ask-ai
pub async fn ask_ai() -> Result<Html<String>, AppError> {
    render(AskAiPage { active: "ask-ai" })
}

/// GET /find-jobs
pub async fn find_jobs() -> Result<Html<String>, AppError> {
    render(FindJobsPage { active: "find-jobs" })
}

#[cfg(test)]
mod tests {
    use crate::test_support::{body_text, test_app, FakeExtractor, ScriptedGenerator};
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use std::sync::Arc;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_every_page_renders_html() {
        let app = test_app(
            Arc::new(ScriptedGenerator::replying("")),
            FakeExtractor::failing(),
        );

        for (uri, marker) in [
            ("/", "Career Compass"),
            ("/analyze", "id=\"jd-form\""),
            ("/about", "About"),
            ("/ask-ai", "id=\"ask-form\""),
            ("/find-jobs", "id=\"jobs-form\""),
        ] {
            let response = app
                .clone()
                .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::OK, "{uri}");
            let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
            assert!(content_type.starts_with("text/html"), "{uri}");
            assert!(body_text(response).await.contains(marker), "{uri}");
        }
    }

    #[tokio::test]
    async fn test_nav_marks_current_page() {
        let page = super::analyze().await.unwrap().0;
        assert!(page.contains(r#"<a href="/analyze" class="active">"#));
        assert!(!page.contains(r#"<a href="/about" class="active">"#));
    }
}
