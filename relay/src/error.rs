use axum::Json;
use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("invalid destination path `{0}`")]
    InvalidPath(String),

    #[error("invalid file name `{0}`")]
    InvalidFilename(String),

    #[error("multipart field `file` is missing")]
    MissingFile,

    #[error("malformed multipart body: {0}")]
    Multipart(#[from] MultipartError),

    #[error("upstream request failed: {0}")]
    UpstreamUnreachable(#[from] reqwest::Error),

    #[error("upstream rejected the write with status {status}")]
    UpstreamRejected { status: u16, body: String },
}

impl AppError {
    fn code(&self) -> &'static str {
        match self {
            Self::InvalidPath(_) => "INVALID_PATH",
            Self::InvalidFilename(_) => "INVALID_FILENAME",
            Self::MissingFile => "MISSING_FILE",
            Self::Multipart(_) => "MALFORMED_MULTIPART",
            Self::UpstreamUnreachable(_) => "UPSTREAM_UNREACHABLE",
            Self::UpstreamRejected { .. } => "UPSTREAM_REJECTED",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!("Generating response for AppError: {:?}", self);

        let status_code = match &self {
            Self::InvalidPath(_)
            | Self::InvalidFilename(_)
            | Self::MissingFile
            | Self::Multipart(_) => StatusCode::BAD_REQUEST,
            Self::UpstreamUnreachable(_) | Self::UpstreamRejected { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        // The upstream response body rides along as the diagnostic detail.
        let detail = match &self {
            Self::UpstreamRejected { body, .. } => body.clone(),
            _ => String::new(),
        };

        let error_body = json!({
            "error": {
                "code": self.code(),
                "message": self.to_string(),
                "detail": detail,
            }
        });
        (status_code, Json(error_body)).into_response()
    }
}
