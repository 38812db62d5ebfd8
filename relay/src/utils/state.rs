use std::sync::Arc;

use crate::config::Config;
use crate::store::{ArtifactStore, http::HttpArtifactStore};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ArtifactStore>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let store = Arc::new(HttpArtifactStore::new(&config)?);

        Ok(AppState {
            store,
            config: Arc::new(config),
        })
    }
}
