use thiserror::Error;

/// Top-level error type for the `cadastro-api` crate.
///
/// The backend reports every domain-level refusal (unknown id, missing
/// field, duplicated login, malformed number) as HTTP 404 carrying a
/// `{ mensagem, status }` body. Those become [`Error::Rejected`]; everything
/// else is opaque to the end user and only useful for diagnostics.
#[derive(Debug, Error)]
pub enum Error {
    // ── Domain ──────────────────────────────────────────────────────
    /// The server refused the request and explained why.
    #[error("Rejected by server (HTTP {status}): {message}")]
    Rejected { status: u16, message: String },

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// TLS setup or certificate error.
    #[error("TLS error: {0}")]
    Tls(String),

    // ── HTTP ────────────────────────────────────────────────────────
    /// Non-success status without a usable rejection message.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// Returns `true` if the server explicitly rejected the request.
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }

    /// The server-supplied message of a rejection, verbatim.
    pub fn rejection_message(&self) -> Option<&str> {
        match self {
            Self::Rejected { message, .. } => Some(message),
            _ => None,
        }
    }

    /// Returns `true` if the request never reached the server.
    pub fn is_connection(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_connect() || e.is_request(),
            _ => false,
        }
    }
}
