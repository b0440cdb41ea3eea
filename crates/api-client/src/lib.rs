//! `sc-api` — HTTP client crate for the showcase platform.
//!
//! Provides the [`ShowcaseApi`] trait that abstracts over the remote
//! REST API, the production [`RestShowcaseClient`], and the typed DTOs
//! of the endpoint surface.
//!
//! Every request carries the current session's bearer token; a 401
//! response clears the shared session store so subsequent route-guard
//! checks redirect to a login entry point. Calls are one-shot — no
//! retries, no backoff, no caching.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use sc_api::{LoginRequest, RestShowcaseClient, ShowcaseApi};
//! use sc_domain::config::ApiConfig;
//! use sc_session::{MemoryStorage, SessionStore};
//!
//! # async fn example() -> sc_domain::error::Result<()> {
//! let sessions = Arc::new(SessionStore::new(Arc::new(MemoryStorage::new())));
//! let client = RestShowcaseClient::new(&ApiConfig::default(), sessions.clone())?;
//!
//! let resp = client
//!     .login(LoginRequest {
//!         email: "me@example.edu".into(),
//!         password: "secret".into(),
//!     })
//!     .await?;
//! let (identity, token) = resp.into_session()?;
//! sessions.login(identity, token);
//! # Ok(())
//! # }
//! ```

pub mod provider;
pub mod rest;
pub mod types;

// ── Re-exports for ergonomic imports ─────────────────────────────────

pub use provider::ShowcaseApi;
pub use rest::{from_reqwest, RestShowcaseClient};
pub use types::{
    Alert, Comment, LoginRequest, LoginResponse, NewAlert, NewComment, NewProject, PlatformStats,
    ProfileUpdate, Project, ProjectUpdate, RatingRequest, RegisterRequest, TeamMember, UserSummary,
};
