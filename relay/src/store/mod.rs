use axum::body::Bytes;

use crate::error::AppError;

pub mod http;

#[async_trait::async_trait]
pub trait ArtifactStore: Send + Sync {
    /// URL the artifact is served from once the write succeeds.
    fn artifact_url(&self, repo_path: &str) -> String;

    /// Write the full content to the store in a single attempt and return
    /// the retrieval URL.
    async fn put_artifact(&self, repo_path: &str, content: Bytes) -> Result<String, AppError>;
}
