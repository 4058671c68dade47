//! CLI configuration: thin wrapper around `cadastro_config`.
//!
//! Adds resolution that respects `GlobalOpts` flag overrides
//! (--api-url, --output, --color).

use clap::ValueEnum;

use cadastro_core::ApiConfig;

use crate::cli::{ColorMode, GlobalOpts, OutputFormat};
use crate::error::CliError;

// ── Re-exports from shared crate ────────────────────────────────────

pub use cadastro_config::{Config, config_path, load_config, load_config_or_default, save_config};

// ── CLI-specific helpers ────────────────────────────────────────────

/// API location: flag / env > config file > built-in default.
pub fn resolve_api(global: &GlobalOpts, cfg: &Config) -> Result<ApiConfig, CliError> {
    let api = match global.api_url.as_deref() {
        Some(url) => cadastro_config::api_config_for(url, cfg.ca_cert.clone())?,
        None => cfg.to_api_config()?,
    };
    Ok(api)
}

/// Output format: flag / env > `defaults.output` > table.
pub fn resolve_output(global: &GlobalOpts, cfg: &Config) -> OutputFormat {
    global.output.unwrap_or_else(|| {
        OutputFormat::from_str(&cfg.defaults.output, true).unwrap_or(OutputFormat::Table)
    })
}

/// Color mode: flag > `defaults.color` > auto.
pub fn resolve_color(global: &GlobalOpts, cfg: &Config) -> ColorMode {
    global.color.unwrap_or_else(|| {
        ColorMode::from_str(&cfg.defaults.color, true).unwrap_or(ColorMode::Auto)
    })
}
