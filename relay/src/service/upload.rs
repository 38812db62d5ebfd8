use std::sync::Arc;

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Multipart, State};
use axum::response::IntoResponse;
use serde::Serialize;

use crate::error::AppError;
use crate::utils::state::AppState;
use crate::utils::validation::{is_valid_filename, sanitize_subpath};

#[derive(Serialize)]
pub struct UploadResponse {
    pub url: String,
}

/// POST /upload
pub async fn upload_handler(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let mut file: Option<(String, Bytes)> = None;
    let mut raw_path: Option<String> = None;

    while let Some(field) = multipart.next_field().await? {
        let field_name = field.name().unwrap_or_default().to_string();
        match field_name.as_str() {
            "file" => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let content = field.bytes().await?;
                file = Some((file_name, content));
            }
            "path" => raw_path = Some(field.text().await?),
            _ => {}
        }
    }

    let (file_name, content) = file.ok_or(AppError::MissingFile)?;
    if !is_valid_filename(&file_name) {
        return Err(AppError::InvalidFilename(file_name));
    }

    // Both validations run before any upstream call is made.
    let subdir = match raw_path {
        Some(raw) => sanitize_subpath(&raw)?,
        None => String::new(),
    };

    let repo_path = if subdir.is_empty() {
        file_name
    } else {
        format!("{subdir}/{file_name}")
    };

    let url = state.store.put_artifact(&repo_path, content).await?;
    Ok(Json(UploadResponse { url }))
}
