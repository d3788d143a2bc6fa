// src/presentation/http/state.rs
use crate::application::services::ApplicationServices;
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    /// Absent when the router runs over in-memory repositories.
    pub db_pool: Option<PgPool>,
}
