pub mod admin;
pub mod alerts;
pub mod auth;
pub mod config;
pub mod profile;
pub mod projects;

use std::io::Write;
use std::sync::Arc;

use anyhow::bail;

use sc_api::RestShowcaseClient;
use sc_domain::Config;
use sc_session::{FileStorage, GuardDecision, LoginEntry, RouteGuard, SessionStore};

/// Shared state every command runs against: the durable session store
/// and the API client bound to it.
pub struct AppState {
    pub sessions: Arc<SessionStore>,
    pub client: RestShowcaseClient,
}

/// Build the shared state from a loaded config.
pub fn build_state(config: Config) -> anyhow::Result<AppState> {
    tracing::debug!(
        base_url = %config.api.base_url,
        state_path = %config.session.state_path.display(),
        "building client state"
    );
    let storage = FileStorage::new(&config.session.state_path)?;
    let sessions = Arc::new(SessionStore::new(Arc::new(storage)));
    let client = RestShowcaseClient::new(&config.api, sessions.clone())?;
    Ok(AppState { sessions, client })
}

/// Evaluate a route guard before running a protected command.
///
/// The CLI rendition of the SPA's redirects: a denied guard prints
/// where to go instead and the command exits non-zero.
pub fn ensure_access(guard: RouteGuard, sessions: &SessionStore) -> anyhow::Result<()> {
    match guard.evaluate(sessions) {
        GuardDecision::Allow => Ok(()),
        GuardDecision::RedirectLogin(LoginEntry::User) => {
            bail!("not logged in — run `showcase login` first")
        }
        GuardDecision::RedirectLogin(LoginEntry::Admin) => {
            bail!("not logged in as an administrator — run `showcase login --admin` first")
        }
        GuardDecision::RedirectHome => {
            bail!("this command requires the moderator role")
        }
    }
}

/// Read one trimmed line from stdin after printing a prompt.
pub fn prompt_line(prompt: &str) -> anyhow::Result<String> {
    print!("{prompt}");
    std::io::stdout().flush()?;
    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_owned())
}
