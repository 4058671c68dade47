//! Command dispatch: bridges CLI args -> controllers -> output formatting.

pub mod bairro;
pub mod config_cmd;
pub mod municipio;
pub mod pessoa;
pub mod uf;
pub mod util;

use cadastro_core::ApiClient;

use crate::cli::{Command, OutputFormat};
use crate::error::CliError;

/// Everything a record command needs once flags and config are resolved.
#[derive(Debug, Clone)]
pub struct Context {
    pub client: ApiClient,
    pub output: OutputFormat,
    pub color: bool,
    pub quiet: bool,
}

/// Dispatch an API-bound command to the appropriate handler.
pub async fn dispatch(cmd: Command, ctx: &Context) -> Result<(), CliError> {
    match cmd {
        Command::Uf(args) => uf::handle(args, ctx).await,
        Command::Municipio(args) => municipio::handle(args, ctx).await,
        Command::Bairro(args) => bairro::handle(args, ctx).await,
        Command::Pessoa(args) => pessoa::handle(args, ctx).await,
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => unreachable!(),
    }
}
