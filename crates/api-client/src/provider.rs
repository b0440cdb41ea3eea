//! The `ShowcaseApi` trait defines the interface to the remote platform
//! (REST in production, test doubles elsewhere).

use std::path::Path;

use async_trait::async_trait;

use sc_domain::error::Result;
use sc_domain::Identity;

use crate::types::{
    Alert, Comment, LoginRequest, LoginResponse, NewAlert, NewComment, NewProject, PlatformStats,
    ProfileUpdate, Project, ProjectUpdate, RatingRequest, RegisterRequest, UserSummary,
};

/// Abstraction over the showcase platform API surface.
///
/// Implementations may talk to the real REST API or act as a test
/// double. All methods return `sc_domain::error::Result`.
#[async_trait]
pub trait ShowcaseApi: Send + Sync {
    // ── auth ─────────────────────────────────────────────────────────

    /// Create a new account (POST /api/users/register).
    async fn register(&self, req: RegisterRequest) -> Result<()>;

    /// Authenticate at the user entry point (POST /api/users/login).
    async fn login(&self, req: LoginRequest) -> Result<LoginResponse>;

    /// Authenticate at the admin entry point (POST /api/admin/login).
    async fn admin_login(&self, req: LoginRequest) -> Result<LoginResponse>;

    // ── profile ──────────────────────────────────────────────────────

    /// Fetch the caller's own profile (GET /api/users/me).
    async fn me(&self) -> Result<Identity>;

    /// Update profile attributes (PUT /api/users/me).
    async fn update_profile(&self, req: ProfileUpdate) -> Result<Identity>;

    /// Upload a profile picture (POST /api/users/me/picture, multipart).
    async fn upload_picture(&self, file: &Path) -> Result<Identity>;

    // ── projects ─────────────────────────────────────────────────────

    /// List all projects (GET /api/projects).
    async fn list_projects(&self) -> Result<Vec<Project>>;

    /// Fetch one project (GET /api/projects/{id}).
    async fn get_project(&self, id: &str) -> Result<Project>;

    /// Submit a new project (POST /api/projects, multipart: fields + images).
    async fn create_project(&self, new: NewProject, images: &[&Path]) -> Result<Project>;

    /// Update a project (PUT /api/projects/{id}).
    async fn update_project(&self, id: &str, update: ProjectUpdate) -> Result<Project>;

    /// Delete a project (DELETE /api/projects/{id}).
    async fn delete_project(&self, id: &str) -> Result<()>;

    /// Rate a project (POST /api/projects/{id}/ratings).
    async fn rate_project(&self, id: &str, req: RatingRequest) -> Result<Project>;

    // ── comments ─────────────────────────────────────────────────────

    /// List a project's comments (GET /api/projects/{id}/comments).
    async fn list_comments(&self, project_id: &str) -> Result<Vec<Comment>>;

    /// Post a comment (POST /api/projects/{id}/comments).
    async fn post_comment(&self, project_id: &str, req: NewComment) -> Result<Comment>;

    /// Delete a comment (DELETE /api/comments/{id}).
    async fn delete_comment(&self, id: &str) -> Result<()>;

    // ── alerts ───────────────────────────────────────────────────────

    /// List active site-wide alerts (GET /api/alerts).
    async fn list_alerts(&self) -> Result<Vec<Alert>>;

    /// Create an alert (POST /api/alerts, multipart, optional image).
    async fn create_alert(&self, new: NewAlert, image: Option<&Path>) -> Result<Alert>;

    /// Delete an alert (DELETE /api/alerts/{id}).
    async fn delete_alert(&self, id: &str) -> Result<()>;

    // ── admin ────────────────────────────────────────────────────────

    /// List all registered users (GET /api/admin/users).
    async fn list_users(&self) -> Result<Vec<UserSummary>>;

    /// Delete a user account (DELETE /api/admin/users/{id}).
    async fn delete_user(&self, id: &str) -> Result<()>;

    /// Dashboard counters (GET /api/admin/stats).
    async fn stats(&self) -> Result<PlatformStats>;
}
