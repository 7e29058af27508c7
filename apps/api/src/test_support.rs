//! Fakes and request helpers shared by unit tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request, Response},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;

use crate::extract::{ExtractError, TextExtractor};
use crate::llm_client::{LlmClient, LlmError, TextGenerator};
use crate::routes::build_router;
use crate::state::AppState;

enum Scripted {
    Reply(String),
    Fail { status: u16, message: String },
}

/// Generator that replays canned replies in order and records every prompt.
/// The last scripted reply repeats once the script runs out.
pub struct ScriptedGenerator {
    script: Mutex<VecDeque<Scripted>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedGenerator {
    fn new(step: Scripted) -> Self {
        Self {
            script: Mutex::new(VecDeque::from([step])),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn replying(text: &str) -> Self {
        Self::new(Scripted::Reply(text.to_string()))
    }

    pub fn failing(status: u16, message: &str) -> Self {
        Self::new(Scripted::Fail {
            status,
            message: message.to_string(),
        })
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn last_prompt(&self) -> String {
        self.prompts().pop().unwrap_or_default()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        self.prompts.lock().unwrap().push(prompt.to_string());

        let mut script = self.script.lock().unwrap();
        let step = if script.len() > 1 {
            script.pop_front()
        } else {
            script.front().map(|s| match s {
                Scripted::Reply(text) => Scripted::Reply(text.clone()),
                Scripted::Fail { status, message } => Scripted::Fail {
                    status: *status,
                    message: message.clone(),
                },
            })
        };

        match step {
            Some(Scripted::Reply(text)) => Ok(text),
            Some(Scripted::Fail { status, message }) => Err(LlmError::Api { status, message }),
            None => Err(LlmError::EmptyContent),
        }
    }

    fn model(&self) -> &str {
        "scripted"
    }
}

/// Extractor returning fixed text, or failing like a corrupt PDF.
pub struct FakeExtractor {
    text: Option<String>,
}

impl FakeExtractor {
    pub fn yielding(text: &str) -> Self {
        Self {
            text: Some(text.to_string()),
        }
    }

    pub fn failing() -> Self {
        Self { text: None }
    }
}

impl TextExtractor for FakeExtractor {
    fn extract_text(&self, _bytes: &[u8]) -> Result<String, ExtractError> {
        self.text
            .clone()
            .ok_or_else(|| ExtractError::Pdf("Invalid file header".to_string()))
    }
}

pub fn test_app(generator: Arc<ScriptedGenerator>, extractor: FakeExtractor) -> Router {
    build_router(AppState {
        llm: LlmClient::new(generator),
        extractor: Arc::new(extractor),
    })
}

pub enum Part<'a> {
    Text(&'a str, &'a str),
    File {
        name: &'a str,
        file_name: &'a str,
        bytes: &'a [u8],
    },
}

const BOUNDARY: &str = "compass-test-boundary";

pub fn multipart_request(uri: &str, parts: &[Part<'_>]) -> Request<Body> {
    let mut body: Vec<u8> = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match part {
            Part::Text(name, value) => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
                );
                body.extend_from_slice(value.as_bytes());
            }
            Part::File {
                name,
                file_name,
                bytes,
            } => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\n\
                         Content-Type: application/pdf\r\n\r\n"
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(bytes);
            }
        }
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

pub fn json_request(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// POST with an arbitrary content type and body, for malformed-request cases.
pub fn raw_request(uri: &str, content_type: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, content_type)
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}
