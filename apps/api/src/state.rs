use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::storage::BlobStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub llm: LlmClient,
    /// JSON blob store for boards. S3 when configured, otherwise in-memory.
    pub blobs: Arc<dyn BlobStore>,
}
