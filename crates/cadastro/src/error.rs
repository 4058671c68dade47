//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` into user-facing errors with
//! actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use cadastro_config::ConfigError;
use cadastro_core::CoreError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const REJECTED: i32 = 4;
    pub const CONNECTION: i32 = 7;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Domain ───────────────────────────────────────────────────────
    #[error("{message}")]
    #[diagnostic(
        code(cadastro::rejected),
        help("The server refused the values. Adjust them and run the command again.")
    )]
    Rejected { message: String },

    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not reach the API at {url}")]
    #[diagnostic(
        code(cadastro::connection_failed),
        help(
            "Check that the API is running and accessible.\n\
             Point at another address with --api-url or: cadastro config set-url <URL>"
        )
    )]
    ConnectionFailed {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    // ── API ──────────────────────────────────────────────────────────
    #[error("API error: {message}")]
    #[diagnostic(code(cadastro::api_error), help("Run again with -vv to see the requests."))]
    Api { message: String },

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(cadastro::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(cadastro::config),
        help("Inspect the file with: cadastro config show\nExpected at: {path}")
    )]
    Config { message: String, path: String },

    #[error("Config file already exists at {path}")]
    #[diagnostic(
        code(cadastro::config_exists),
        help("Use --force to overwrite it, or: cadastro config set-url <URL>")
    )]
    ConfigExists { path: String },

    // ── IO ───────────────────────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Rejected { .. } => exit_code::REJECTED,
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::Validation { .. } | Self::ConfigExists { .. } => exit_code::USAGE,
            Self::Api { .. } | Self::Config { .. } | Self::Io(_) => exit_code::GENERAL,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Rejected { message } => CliError::Rejected { message },

            CoreError::ConnectionFailed { url, reason } => CliError::ConnectionFailed {
                url,
                source: reason.into(),
            },

            CoreError::Api { message, status: _ } | CoreError::Internal(message) => {
                CliError::Api { message }
            }

            CoreError::Config { message } => CliError::Config {
                message,
                path: cadastro_config::config_path().display().to_string(),
            },
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Validation { field, reason } => CliError::Validation { field, reason },
            ConfigError::Io(e) => CliError::Io(e),
            other => CliError::Config {
                message: other.to_string(),
                path: cadastro_config::config_path().display().to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_keeps_server_message() {
        let err = CliError::from(CoreError::Rejected {
            message: "Já existe uma UF com a sigla SP.".into(),
        });
        assert_eq!(err.to_string(), "Já existe uma UF com a sigla SP.");
        assert_eq!(err.exit_code(), exit_code::REJECTED);
    }

    #[test]
    fn exit_codes_by_category() {
        let conn = CliError::from(CoreError::ConnectionFailed {
            url: "http://localhost:8080/uf".into(),
            reason: "connection refused".into(),
        });
        assert_eq!(conn.exit_code(), exit_code::CONNECTION);

        let api = CliError::from(CoreError::Api {
            message: "HTTP 500: boom".into(),
            status: Some(500),
        });
        assert_eq!(api.exit_code(), exit_code::GENERAL);

        let bad = CliError::from(ConfigError::Validation {
            field: "api_url".into(),
            reason: "invalid URL: nope".into(),
        });
        assert_eq!(bad.exit_code(), exit_code::USAGE);
    }
}
