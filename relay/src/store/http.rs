use std::time::Duration;

use axum::body::Bytes;

use crate::config::Config;
use crate::error::AppError;
use crate::store::ArtifactStore;

pub struct HttpArtifactStore {
    client: reqwest::Client,
    base_url: String,
    repository: String,
    username: String,
    password: String,
}

impl HttpArtifactStore {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            repository: config.repository.clone(),
            username: config.username.clone(),
            password: config.password.clone(),
        })
    }
}

#[async_trait::async_trait]
impl ArtifactStore for HttpArtifactStore {
    fn artifact_url(&self, repo_path: &str) -> String {
        format!("{}/repository/{}/{}", self.base_url, self.repository, repo_path)
    }

    async fn put_artifact(&self, repo_path: &str, content: Bytes) -> Result<String, AppError> {
        let url = self.artifact_url(repo_path);
        tracing::debug!("PUT {url} ({} bytes)", content.len());

        let response = self
            .client
            .put(&url)
            .basic_auth(&self.username, Some(&self.password))
            .body(content)
            .send()
            .await?;

        match response.status().as_u16() {
            200 | 201 | 204 => Ok(url),
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(AppError::UpstreamRejected { status, body })
            }
        }
    }
}
