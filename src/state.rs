//! Application state management

use std::sync::Arc;

use crate::config::Config;
use crate::relay::Answerer;
use crate::storage::UploadStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: Config,
    store: UploadStore,
    answerer: Arc<dyn Answerer>,
}

impl AppState {
    pub fn new(config: Config, store: UploadStore, answerer: Arc<dyn Answerer>) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                store,
                answerer,
            }),
        }
    }

    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    pub fn store(&self) -> &UploadStore {
        &self.inner.store
    }

    pub fn answerer(&self) -> &Arc<dyn Answerer> {
        &self.inner.answerer
    }
}
