pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod utils;

use std::sync::Arc;

use sqlx::PgPool;

use crate::repositories::memory::{
    InMemoryApplicationRepository, InMemoryContactRepository, InMemoryJobRepository,
    InMemoryUserRepository,
};
use crate::repositories::postgres::{
    PgApplicationRepository, PgContactRepository, PgJobRepository, PgUserRepository,
};
use crate::repositories::{
    ApplicationRepository, ContactRepository, JobRepository, UserRepository,
};

/// Explicitly constructed application state, passed down through axum's
/// `State`. Repositories are held behind trait objects so the API can run
/// against Postgres in production and against in-memory fakes in tests.
#[derive(Clone)]
pub struct AppState {
    pub jobs: Arc<dyn JobRepository>,
    pub applications: Arc<dyn ApplicationRepository>,
    pub contacts: Arc<dyn ContactRepository>,
    pub users: Arc<dyn UserRepository>,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        Self {
            jobs: Arc::new(PgJobRepository::new(pool.clone())),
            applications: Arc::new(PgApplicationRepository::new(pool.clone())),
            contacts: Arc::new(PgContactRepository::new(pool.clone())),
            users: Arc::new(PgUserRepository::new(pool)),
        }
    }

    /// State backed entirely by in-memory fakes; used by the API tests.
    pub fn in_memory() -> Self {
        Self {
            jobs: Arc::new(InMemoryJobRepository::new()),
            applications: Arc::new(InMemoryApplicationRepository::new()),
            contacts: Arc::new(InMemoryContactRepository::new()),
            users: Arc::new(InMemoryUserRepository::new()),
        }
    }
}
