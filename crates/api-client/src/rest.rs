//! REST implementation of [`ShowcaseApi`].
//!
//! `RestShowcaseClient` wraps a `reqwest::Client` and translates every
//! trait method into the corresponding HTTP call against the remote
//! platform. Calls are strictly one-shot: no retries, no backoff, no
//! caching — each request fires once and reports its outcome.
//!
//! The client is also where the authorization-denied class is handled
//! centrally: any 401 response clears the shared [`SessionStore`], so
//! the next route-guard evaluation redirects to a login entry point.

use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use uuid::Uuid;

use sc_domain::config::ApiConfig;
use sc_domain::error::{Error, Result};
use sc_domain::trace::TraceEvent;
use sc_domain::Identity;
use sc_session::SessionStore;

use crate::provider::ShowcaseApi;
use crate::types::{
    Alert, Comment, LoginRequest, LoginResponse, NewAlert, NewComment, NewProject, PlatformStats,
    ProfileUpdate, Project, ProjectUpdate, RatingRequest, RegisterRequest, UserSummary,
};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Client
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// A REST-based client for the showcase platform.
///
/// Created once and reused for the lifetime of the process. The
/// underlying `reqwest::Client` maintains a connection pool; the shared
/// [`SessionStore`] supplies the bearer token for every call.
#[derive(Clone)]
pub struct RestShowcaseClient {
    http: Client,
    base_url: String,
    sessions: Arc<SessionStore>,
    timeout: Duration,
}

impl RestShowcaseClient {
    /// Build a new client from the shared [`ApiConfig`].
    pub fn new(cfg: &ApiConfig, sessions: Arc<SessionStore>) -> Result<Self> {
        let timeout = Duration::from_millis(cfg.timeout_ms);
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Http(e.to_string()))?;

        let base_url = cfg.base_url.trim_end_matches('/').to_owned();

        Ok(Self {
            http,
            base_url,
            sessions,
            timeout,
        })
    }

    /// The configured request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    // ── request helpers ──────────────────────────────────────────────

    /// Build the full URL for a path like `/api/projects`.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Decorate a `RequestBuilder` with the standard headers: a trace id
    /// and, when a session is present, the bearer credential.
    fn decorate(&self, rb: RequestBuilder) -> RequestBuilder {
        let trace_id = Uuid::new_v4().to_string();
        let mut rb = rb.header("X-Trace-Id", &trace_id);

        if let Some(token) = self.sessions.token() {
            rb = rb.bearer_auth(token);
        }
        rb
    }

    /// Fire a request once and classify the response.
    ///
    /// * 2xx passes through for body handling.
    /// * 401 clears the session (forced logout) and maps to [`Error::Auth`].
    /// * Every other error status maps to [`Error::Api`] with the
    ///   server-supplied message preserved for the caller to display.
    /// * Emits a `TraceEvent::ApiCall` for every completed exchange.
    async fn execute(&self, endpoint: &str, rb: RequestBuilder) -> Result<Response> {
        let start = Instant::now();
        let result = self.decorate(rb).send().await;
        let duration_ms = start.elapsed().as_millis() as u64;

        let resp = match result {
            Ok(resp) => resp,
            Err(e) => {
                TraceEvent::ApiCall {
                    endpoint: endpoint.to_owned(),
                    status: e.status().map(|s| s.as_u16()).unwrap_or(0),
                    duration_ms,
                }
                .emit();
                return Err(from_reqwest(e));
            }
        };

        let status = resp.status();
        TraceEvent::ApiCall {
            endpoint: endpoint.to_owned(),
            status: status.as_u16(),
            duration_ms,
        }
        .emit();

        if status == StatusCode::UNAUTHORIZED {
            let body = resp.text().await.unwrap_or_default();
            self.sessions.clear_on_denied();
            return Err(Error::Auth(format!(
                "{endpoint} denied: {}",
                extract_message(&body, status)
            )));
        }

        if status.is_client_error() || status.is_server_error() {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Api {
                status: status.as_u16(),
                message: extract_message(&body, status),
            });
        }

        Ok(resp)
    }

    /// Execute and deserialize a JSON body.
    async fn fetch_json<T: DeserializeOwned>(&self, endpoint: &str, rb: RequestBuilder) -> Result<T> {
        let resp = self.execute(endpoint, rb).await?;
        let body = resp.text().await.map_err(from_reqwest)?;
        serde_json::from_str(&body)
            .map_err(|e| Error::Other(format!("failed to parse {endpoint} response: {e}: {body}")))
    }

    /// Execute and discard the body.
    async fn fetch_unit(&self, endpoint: &str, rb: RequestBuilder) -> Result<()> {
        self.execute(endpoint, rb).await?;
        Ok(())
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Multipart builders
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Read a file into a multipart [`Part`] named after its filename.
async fn file_part(path: &Path) -> Result<Part> {
    let bytes = tokio::fs::read(path).await?;
    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "upload".into());
    Ok(Part::bytes(bytes).file_name(filename))
}

/// Assemble the project submission form: text fields plus one `images`
/// part per file. List-valued fields travel JSON-encoded, matching the
/// server's multipart parser.
async fn project_form(new: &NewProject, images: &[&Path]) -> Result<Form> {
    let mut form = Form::new().text("title", new.title.clone());

    if let Some(ref summary) = new.summary {
        form = form.text("summary", summary.clone());
    }
    if let Some(ref description) = new.description {
        form = form.text("description", description.clone());
    }
    if let Some(ref video_url) = new.video_url {
        form = form.text("videoUrl", video_url.clone());
    }
    form = form.text("techStack", serde_json::to_string(&new.tech_stack)?);
    form = form.text("team", serde_json::to_string(&new.team)?);

    for path in images {
        form = form.part("images", file_part(path).await?);
    }
    Ok(form)
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Trait implementation
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[async_trait]
impl ShowcaseApi for RestShowcaseClient {
    async fn register(&self, req: RegisterRequest) -> Result<()> {
        let url = self.url("/api/users/register");
        self.fetch_unit("POST /api/users/register", self.http.post(&url).json(&req))
            .await
    }

    async fn login(&self, req: LoginRequest) -> Result<LoginResponse> {
        let url = self.url("/api/users/login");
        self.fetch_json("POST /api/users/login", self.http.post(&url).json(&req))
            .await
    }

    async fn admin_login(&self, req: LoginRequest) -> Result<LoginResponse> {
        let url = self.url("/api/admin/login");
        self.fetch_json("POST /api/admin/login", self.http.post(&url).json(&req))
            .await
    }

    async fn me(&self) -> Result<Identity> {
        let url = self.url("/api/users/me");
        self.fetch_json("GET /api/users/me", self.http.get(&url)).await
    }

    async fn update_profile(&self, req: ProfileUpdate) -> Result<Identity> {
        let url = self.url("/api/users/me");
        self.fetch_json("PUT /api/users/me", self.http.put(&url).json(&req))
            .await
    }

    async fn upload_picture(&self, file: &Path) -> Result<Identity> {
        let url = self.url("/api/users/me/picture");
        let form = Form::new().part("picture", file_part(file).await?);
        self.fetch_json(
            "POST /api/users/me/picture",
            self.http.post(&url).multipart(form),
        )
        .await
    }

    async fn list_projects(&self) -> Result<Vec<Project>> {
        let url = self.url("/api/projects");
        self.fetch_json("GET /api/projects", self.http.get(&url)).await
    }

    async fn get_project(&self, id: &str) -> Result<Project> {
        let url = self.url(&format!("/api/projects/{id}"));
        self.fetch_json("GET /api/projects/{id}", self.http.get(&url))
            .await
    }

    async fn create_project(&self, new: NewProject, images: &[&Path]) -> Result<Project> {
        let url = self.url("/api/projects");
        let form = project_form(&new, images).await?;
        self.fetch_json("POST /api/projects", self.http.post(&url).multipart(form))
            .await
    }

    async fn update_project(&self, id: &str, update: ProjectUpdate) -> Result<Project> {
        let url = self.url(&format!("/api/projects/{id}"));
        self.fetch_json("PUT /api/projects/{id}", self.http.put(&url).json(&update))
            .await
    }

    async fn delete_project(&self, id: &str) -> Result<()> {
        let url = self.url(&format!("/api/projects/{id}"));
        self.fetch_unit("DELETE /api/projects/{id}", self.http.delete(&url))
            .await
    }

    async fn rate_project(&self, id: &str, req: RatingRequest) -> Result<Project> {
        let url = self.url(&format!("/api/projects/{id}/ratings"));
        self.fetch_json(
            "POST /api/projects/{id}/ratings",
            self.http.post(&url).json(&req),
        )
        .await
    }

    async fn list_comments(&self, project_id: &str) -> Result<Vec<Comment>> {
        let url = self.url(&format!("/api/projects/{project_id}/comments"));
        self.fetch_json("GET /api/projects/{id}/comments", self.http.get(&url))
            .await
    }

    async fn post_comment(&self, project_id: &str, req: NewComment) -> Result<Comment> {
        let url = self.url(&format!("/api/projects/{project_id}/comments"));
        self.fetch_json(
            "POST /api/projects/{id}/comments",
            self.http.post(&url).json(&req),
        )
        .await
    }

    async fn delete_comment(&self, id: &str) -> Result<()> {
        let url = self.url(&format!("/api/comments/{id}"));
        self.fetch_unit("DELETE /api/comments/{id}", self.http.delete(&url))
            .await
    }

    async fn list_alerts(&self) -> Result<Vec<Alert>> {
        let url = self.url("/api/alerts");
        self.fetch_json("GET /api/alerts", self.http.get(&url)).await
    }

    async fn create_alert(&self, new: NewAlert, image: Option<&Path>) -> Result<Alert> {
        let url = self.url("/api/alerts");
        let mut form = Form::new().text("title", new.title.clone());
        if let Some(ref message) = new.message {
            form = form.text("message", message.clone());
        }
        if let Some(path) = image {
            form = form.part("image", file_part(path).await?);
        }
        self.fetch_json("POST /api/alerts", self.http.post(&url).multipart(form))
            .await
    }

    async fn delete_alert(&self, id: &str) -> Result<()> {
        let url = self.url(&format!("/api/alerts/{id}"));
        self.fetch_unit("DELETE /api/alerts/{id}", self.http.delete(&url))
            .await
    }

    async fn list_users(&self) -> Result<Vec<UserSummary>> {
        let url = self.url("/api/admin/users");
        self.fetch_json("GET /api/admin/users", self.http.get(&url)).await
    }

    async fn delete_user(&self, id: &str) -> Result<()> {
        let url = self.url(&format!("/api/admin/users/{id}"));
        self.fetch_unit("DELETE /api/admin/users/{id}", self.http.delete(&url))
            .await
    }

    async fn stats(&self) -> Result<PlatformStats> {
        let url = self.url("/api/admin/stats");
        self.fetch_json("GET /api/admin/stats", self.http.get(&url)).await
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Error helpers
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Convert a `reqwest::Error` into a domain `Error`.
///
/// Timeout errors become `Error::Timeout`; everything else becomes
/// `Error::Http`.
pub fn from_reqwest(e: reqwest::Error) -> Error {
    if e.is_timeout() {
        Error::Timeout(e.to_string())
    } else {
        Error::Http(e.to_string())
    }
}

/// Pull a human-readable message out of an error body.
///
/// Servers in this platform answer errors with `{"message": "..."}` (or
/// `{"error": "..."}` from older builds); fall back to the raw body,
/// then the status reason.
fn extract_message(body: &str, status: StatusCode) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["message", "error"] {
            if let Some(msg) = value.get(key).and_then(|m| m.as_str()) {
                return msg.to_owned();
            }
        }
    }
    let trimmed = body.trim();
    if !trimmed.is_empty() {
        return trimmed.to_owned();
    }
    status
        .canonical_reason()
        .unwrap_or("unknown error")
        .to_owned()
}
