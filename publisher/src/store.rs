use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use reqwest::multipart;
use serde::Serialize;

#[derive(Serialize)]
struct TagPayload {
    name: String,
}

pub struct StoreClient {
    client: reqwest::Client,
    base_url: String,
    username: String,
    password: String,
}

impl StoreClient {
    pub fn new(base_url: &str, username: &str, password: &str, timeout_secs: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            username: username.to_string(),
            password: password.to_string(),
        })
    }

    /// Create the tag; an already-existing tag is not an error.
    pub async fn create_tag(&self, tag: &str) -> Result<()> {
        let url = format!("{}/service/rest/v1/tags", self.base_url);
        tracing::debug!("POST {url}");
        let res = self
            .client
            .post(&url)
            .basic_auth(&self.username, Some(&self.password))
            .json(&TagPayload {
                name: tag.to_string(),
            })
            .send()
            .await
            .context("Failed to send tag creation request")?;

        match res.status().as_u16() {
            200 | 201 | 204 => println!("Tag '{tag}' created."),
            409 => println!("Tag '{tag}' already exists."),
            status => bail!(
                "Error creating tag: HTTP {status} - {}",
                res.text().await.unwrap_or_default(),
            ),
        }
        Ok(())
    }

    /// Upload the bundle as a named raw asset of the repository. Returns the
    /// component name the store will know it by.
    pub async fn upload_bundle(
        &self,
        repository: &str,
        bundle: &Path,
        directory: Option<&str>,
    ) -> Result<String> {
        let name = bundle
            .file_name()
            .and_then(|name| name.to_str())
            .with_context(|| format!("Bundle {} has no usable file name", bundle.display()))?
            .to_string();
        let content = tokio::fs::read(bundle)
            .await
            .with_context(|| format!("Failed to read bundle {}", bundle.display()))?;

        let mut form = multipart::Form::new()
            .part(
                "raw.asset1",
                multipart::Part::bytes(content).file_name(name.clone()),
            )
            .text("raw.asset1.filename", name.clone());
        if let Some(directory) = directory {
            form = form.text("raw.directory", directory.to_string());
        }

        let url = format!("{}/service/rest/v1/components", self.base_url);
        tracing::debug!("POST {url}?repository={repository}");
        let res = self
            .client
            .post(&url)
            .query(&[("repository", repository)])
            .basic_auth(&self.username, Some(&self.password))
            .multipart(form)
            .send()
            .await
            .context("Failed to send component upload request")?;

        match res.status().as_u16() {
            200 | 204 => {
                println!("Uploaded '{name}' to repository '{repository}'.");
                Ok(name)
            }
            status => bail!(
                "Upload failed: HTTP {status} - {}",
                res.text().await.unwrap_or_default(),
            ),
        }
    }

    /// Associate the tag with the uploaded component, identified by
    /// repository, group path and name.
    pub async fn associate_tag(
        &self,
        tag: &str,
        repository: &str,
        group: &str,
        name: &str,
    ) -> Result<()> {
        let url = format!("{}/service/rest/v1/tags/associate/{tag}", self.base_url);
        tracing::debug!("POST {url}");
        let res = self
            .client
            .post(&url)
            .query(&[("repository", repository), ("group", group), ("name", name)])
            .basic_auth(&self.username, Some(&self.password))
            .send()
            .await
            .context("Failed to send tag association request")?;

        match res.status().as_u16() {
            200 => println!("Associated tag '{tag}' with '{name}'."),
            status => bail!(
                "Tag association failed: HTTP {status} - {}",
                res.text().await.unwrap_or_default(),
            ),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::sync::Arc;

    use axum::Router;
    use axum::extract::{Request, State};
    use axum::http::StatusCode;
    use axum::response::{IntoResponse, Response};
    use tempfile::tempdir;
    use tokio::sync::Mutex;

    use super::*;

    type RequestLog = Arc<Mutex<Vec<String>>>;

    #[derive(Clone)]
    struct MockStore {
        log: RequestLog,
        tag_status: StatusCode,
    }

    async fn handle(State(mock): State<MockStore>, req: Request) -> Response {
        let uri = req.uri().clone();
        let mut entry = uri.path().to_string();
        if let Some(query) = uri.query() {
            entry.push('?');
            entry.push_str(query);
        }
        mock.log.lock().await.push(entry);

        match uri.path() {
            "/service/rest/v1/tags" => (mock.tag_status, "tag backend says no").into_response(),
            "/service/rest/v1/components" => StatusCode::NO_CONTENT.into_response(),
            path if path.starts_with("/service/rest/v1/tags/associate/") => {
                StatusCode::OK.into_response()
            }
            _ => StatusCode::NOT_FOUND.into_response(),
        }
    }

    async fn spawn_store(tag_status: StatusCode) -> (String, RequestLog) {
        let log: RequestLog = Arc::new(Mutex::new(Vec::new()));
        let mock = MockStore {
            log: log.clone(),
            tag_status,
        };
        let app = Router::new().fallback(handle).with_state(mock);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });
        (format!("http://{addr}"), log)
    }

    fn client(base_url: &str) -> StoreClient {
        StoreClient::new(base_url, "svc", "secret", 5).unwrap()
    }

    #[tokio::test]
    async fn create_tag_accepts_created_statuses() {
        let (base_url, _log) = spawn_store(StatusCode::NO_CONTENT).await;
        client(&base_url).create_tag("doc-upload").await.unwrap();
    }

    #[tokio::test]
    async fn create_tag_treats_conflict_as_already_existing() {
        let (base_url, _log) = spawn_store(StatusCode::CONFLICT).await;
        client(&base_url).create_tag("doc-upload").await.unwrap();
    }

    #[tokio::test]
    async fn create_tag_fails_on_unexpected_status_with_body() {
        let (base_url, _log) = spawn_store(StatusCode::INTERNAL_SERVER_ERROR).await;
        let err = client(&base_url).create_tag("doc-upload").await.unwrap_err();
        let message = err.to_string();
        assert!(message.contains("HTTP 500"));
        assert!(message.contains("tag backend says no"));
    }

    #[tokio::test]
    async fn upload_bundle_posts_to_the_components_endpoint() {
        let (base_url, log) = spawn_store(StatusCode::NO_CONTENT).await;
        let tmp_dir = tempdir().unwrap();
        let bundle = tmp_dir.path().join("docs.zip");
        fs::write(&bundle, "archive bytes").unwrap();

        let name = client(&base_url)
            .upload_bundle("documents", &bundle, None)
            .await
            .unwrap();

        assert_eq!(name, "docs.zip");
        assert_eq!(
            *log.lock().await,
            ["/service/rest/v1/components?repository=documents"],
        );
    }

    #[tokio::test]
    async fn associate_tag_identifies_the_component() {
        let (base_url, log) = spawn_store(StatusCode::NO_CONTENT).await;

        client(&base_url)
            .associate_tag("doc-upload", "documents", "", "docs.zip")
            .await
            .unwrap();

        assert_eq!(
            *log.lock().await,
            ["/service/rest/v1/tags/associate/doc-upload?repository=documents&group=&name=docs.zip"],
        );
    }
}
