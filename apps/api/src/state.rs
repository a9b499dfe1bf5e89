use std::sync::Arc;

use sqlx::PgPool;

use crate::ai::AiClient;
use crate::config::Config;
use crate::editor::handlers::SessionMap;
use crate::storage::images::ImageStore;
use crate::storage::resumes::ResumeStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Resume persistence. Behind a trait so the editor layer tests against
    /// an in-memory store.
    pub store: Arc<dyn ResumeStore>,
    /// Profile photo uploads, validated before the store is touched.
    pub images: Arc<dyn ImageStore>,
    pub ai: AiClient,
    /// Live editing sessions, keyed by session id.
    pub sessions: SessionMap,
    pub config: Config,
}
