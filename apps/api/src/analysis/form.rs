//! Multipart form collection for the upload endpoints.

use std::collections::HashMap;

use axum::extract::Multipart;
use bytes::Bytes;

use crate::errors::AppError;

#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: String,
    pub bytes: Bytes,
}

impl UploadedFile {
    pub fn is_pdf(&self) -> bool {
        self.file_name.ends_with(".pdf")
    }
}

/// Text fields and files of one multipart request, keyed by field name.
#[derive(Debug, Default)]
pub struct UploadForm {
    fields: HashMap<String, String>,
    files: HashMap<String, UploadedFile>,
}

impl UploadForm {
    /// Drains the multipart stream.
    ///
    /// A file part with an empty file name is what a browser sends for an
    /// untouched file input; it is treated as absent.
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut form = UploadForm::default();

        while let Some(field) = multipart.next_field().await.map_err(malformed)? {
            let Some(name) = field.name().map(str::to_owned) else {
                continue;
            };

            match field.file_name().map(str::to_owned) {
                Some(file_name) => {
                    let bytes = field.bytes().await.map_err(malformed)?;
                    if !file_name.is_empty() {
                        form.files.insert(name, UploadedFile { file_name, bytes });
                    }
                }
                None => {
                    let text = field.text().await.map_err(malformed)?;
                    form.fields.insert(name, text);
                }
            }
        }

        Ok(form)
    }

    /// Trimmed text field, empty when absent.
    pub fn text(&self, name: &str) -> &str {
        self.fields.get(name).map(|s| s.trim()).unwrap_or("")
    }

    /// Untrimmed text field.
    pub fn raw(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn file(&self, name: &str) -> Option<&UploadedFile> {
        self.files.get(name)
    }
}

fn malformed(err: axum::extract::multipart::MultipartError) -> AppError {
    AppError::BadRequest(format!("Malformed form data: {}", err.body_text()))
}
