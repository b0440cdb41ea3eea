/// Shared error type used across all Showcase crates.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("IO: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP: {0}")]
    Http(String),

    #[error("timeout: {0}")]
    Timeout(String),

    /// Authorization denied — bad credentials or an expired/invalid
    /// session token (HTTP 401). Receipt of this class clears the session.
    #[error("auth: {0}")]
    Auth(String),

    /// Any non-401 error status from the API, passed through unchanged
    /// for the caller to display (422 field errors, 404, 5xx, ...).
    #[error("API {status}: {message}")]
    Api { status: u16, message: String },

    #[error("config: {0}")]
    Config(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, Error>;
