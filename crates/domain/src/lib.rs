//! `sc-domain` — shared types for the Showcase client platform.
//!
//! Holds the pieces every other crate depends on: the [`Error`] taxonomy,
//! the [`Config`] layer with validation, the authenticated [`Identity`]
//! and its [`Role`], and the structured [`TraceEvent`] stream.

pub mod config;
pub mod error;
pub mod identity;
pub mod trace;

pub use config::{ApiConfig, Config, ConfigIssue, ConfigSeverity, SessionConfig};
pub use error::{Error, Result};
pub use identity::{Identity, Role};
pub use trace::TraceEvent;
