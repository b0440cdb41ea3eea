//! Session management for the Showcase client.
//!
//! Implements the client-side session/authorization core: a durable
//! [`SessionStore`] holding the authenticated identity and bearer token,
//! an injectable [`SessionStorage`] backend, and the parameterized
//! [`RouteGuard`] consulted before entering any protected area.

pub mod guard;
pub mod storage;
pub mod store;

pub use guard::{GuardDecision, LoginEntry, RoleRequirement, RouteGuard};
pub use storage::{FileStorage, MemoryStorage, SessionStorage};
pub use store::{Session, SessionStore, IDENTITY_KEY, TOKEN_KEY};
