//! Config subcommand handlers.

use std::io::IsTerminal;

use dialoguer::{Confirm, Input};

use cadastro_core::config::DEFAULT_API_URL;

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::config::{self, Config};
use crate::error::CliError;
use crate::output;

// ── Helpers ─────────────────────────────────────────────────────────

/// Map a dialoguer / interactive I/O failure into CliError.
fn prompt_err(e: impl std::fmt::Display) -> CliError {
    CliError::Validation {
        field: "interactive".into(),
        reason: format!("prompt failed: {e}"),
    }
}

fn describe(cfg: &Config) -> String {
    let ca_cert = cfg
        .ca_cert
        .as_ref()
        .map_or_else(|| "(system roots)".into(), |p| p.display().to_string());
    format!(
        "api_url  {}\nca_cert  {ca_cert}\noutput   {}\ncolor    {}",
        cfg.api_url, cfg.defaults.output, cfg.defaults.color
    )
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let cfg = config::load_config_or_default();
    let format = config::resolve_output(global, &cfg);

    match args.command {
        ConfigCommand::Show => {
            let out = output::render_single(format, &cfg, describe);
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ConfigCommand::Path => {
            println!("{}", config::config_path().display());
            Ok(())
        }

        ConfigCommand::Init { force } => {
            let path = config::config_path();
            let interactive = std::io::stdin().is_terminal();

            if path.exists() && !force {
                if !interactive {
                    return Err(CliError::ConfigExists {
                        path: path.display().to_string(),
                    });
                }
                let overwrite = Confirm::new()
                    .with_prompt(format!("{} exists. Overwrite?", path.display()))
                    .default(false)
                    .interact()
                    .map_err(prompt_err)?;
                if !overwrite {
                    return Ok(());
                }
            }

            let api_url = match (&global.api_url, interactive) {
                (Some(url), _) => url.clone(),
                (None, true) => Input::new()
                    .with_prompt("API URL")
                    .default(DEFAULT_API_URL.to_owned())
                    .interact_text()
                    .map_err(prompt_err)?,
                (None, false) => DEFAULT_API_URL.to_owned(),
            };
            cadastro_config::api_config_for(&api_url, None)?;

            let fresh = Config {
                api_url,
                ..Config::default()
            };
            let written = config::save_config(&fresh)?;
            if !global.quiet {
                eprintln!("✓ Configuration written to {}", written.display());
            }
            Ok(())
        }

        ConfigCommand::SetUrl { url } => {
            cadastro_config::api_config_for(&url, None)?;

            // Rewriting an unreadable file from defaults would lose its keys.
            let mut cfg = config::load_config()?;
            cfg.api_url = url;
            let written = config::save_config(&cfg)?;
            if !global.quiet {
                eprintln!("✓ Set api_url in {}", written.display());
            }
            Ok(())
        }
    }
}
