//! Typed client for the university course management API.
//!
//! The backend owns all business logic (grade computation, enrollment
//! capacity, authentication); this crate only builds requests, decodes
//! responses and tracks the authenticated session.

pub mod error;
pub mod models;
pub mod session;
pub mod storage;

mod courses;
mod http;
mod portal;
mod registrations;
mod results;
mod students;

use std::sync::Arc;

pub use courses::Courses;
pub use error::ApiError;
pub use models::{
    AuthResponse, AuthUser, Course, ExamResult, ListParams, RegisterRequest, Registration,
    RegistrationStatus, Role, SortDir, Student,
};
pub use portal::Portal;
pub use registrations::Registrations;
pub use results::Results;
pub use session::{ApiClient, SessionState};
pub use storage::{MemoryTokenStore, TokenStore, XdgTokenStore};
pub use students::Students;

/// Establishes connection to the API using environment-dependent methods.
///
/// The base URL comes from `UCM_API` (default `http://localhost:8080/api`);
/// the session token, if any, is the one persisted by a previous login.
pub async fn connect() -> anyhow::Result<ApiClient> {
    let base_url =
        std::env::var("UCM_API").unwrap_or_else(|_| "http://localhost:8080/api".to_string());
    let store = XdgTokenStore::open().await?;
    ApiClient::new(base_url, Arc::new(store))
}
