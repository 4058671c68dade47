//! Clap derive structures for the `cadastro` CLI.
//!
//! Defines the command tree, global flags, and shared types.

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// cadastro -- list and save UFs, municípios, bairros and pessoas
#[derive(Debug, Parser)]
#[command(
    name = "cadastro",
    version,
    about = "List and save registry records from the command line",
    long_about = "Lists and saves states (UF), municipalities, neighborhoods and persons\n\
        (with their addresses) through the registry HTTP API.\n\n\
        `save` creates a record when --codigo is omitted and updates it otherwise.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// API root URL (overrides the config file)
    #[arg(long, env = "CADASTRO_API_URL", global = true)]
    pub api_url: Option<String>,

    /// Output format [default: from config, else table]
    #[arg(long, short = 'o', env = "CADASTRO_OUTPUT", global = true)]
    pub output: Option<OutputFormat>,

    /// When to use color output [default: from config, else auto]
    #[arg(long, global = true)]
    pub color: Option<ColorMode>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List and save states (UF)
    Uf(UfArgs),

    /// List and save municipalities
    #[command(alias = "mun")]
    Municipio(MunicipioArgs),

    /// List and save neighborhoods
    Bairro(BairroArgs),

    /// List and save persons and their addresses
    #[command(alias = "p")]
    Pessoa(PessoaArgs),

    /// Manage CLI configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  UF
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct UfArgs {
    #[command(subcommand)]
    pub command: UfCommand,
}

#[derive(Debug, Subcommand)]
pub enum UfCommand {
    /// List states, optionally filtered
    #[command(alias = "ls")]
    List {
        /// Match a single state by code
        #[arg(long)]
        codigo: Option<i64>,

        /// Match by abbreviation (e.g., SP)
        #[arg(long)]
        sigla: Option<String>,

        /// Match by name
        #[arg(long)]
        nome: Option<String>,

        /// Match by status (1 = active, 2 = inactive)
        #[arg(long)]
        status: Option<i32>,
    },

    /// Create a state, or update it when --codigo is given
    Save {
        /// Existing state code (omit to create)
        #[arg(long)]
        codigo: Option<String>,

        /// Abbreviation
        #[arg(long)]
        sigla: String,

        /// Name
        #[arg(long)]
        nome: String,

        /// Status (1 = active, 2 = inactive)
        #[arg(long)]
        status: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  MUNICIPIO
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct MunicipioArgs {
    #[command(subcommand)]
    pub command: MunicipioCommand,
}

#[derive(Debug, Subcommand)]
pub enum MunicipioCommand {
    /// List municipalities, optionally filtered
    #[command(alias = "ls")]
    List {
        /// Match a single municipality by code
        #[arg(long)]
        codigo: Option<i64>,

        /// Match by state code
        #[arg(long)]
        uf: Option<i64>,

        /// Match by name
        #[arg(long)]
        nome: Option<String>,

        /// Match by status (1 = active, 2 = inactive)
        #[arg(long)]
        status: Option<i32>,
    },

    /// Create a municipality, or update it when --codigo is given
    Save {
        /// Existing municipality code (omit to create)
        #[arg(long)]
        codigo: Option<String>,

        /// Code of the owning state
        #[arg(long)]
        uf: String,

        /// Name
        #[arg(long)]
        nome: String,

        /// Status (1 = active, 2 = inactive)
        #[arg(long)]
        status: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  BAIRRO
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct BairroArgs {
    #[command(subcommand)]
    pub command: BairroCommand,
}

#[derive(Debug, Subcommand)]
pub enum BairroCommand {
    /// List neighborhoods, optionally filtered
    #[command(alias = "ls")]
    List {
        /// Match a single neighborhood by code
        #[arg(long)]
        codigo: Option<i64>,

        /// Match by municipality code
        #[arg(long)]
        municipio: Option<i64>,

        /// Match by name
        #[arg(long)]
        nome: Option<String>,

        /// Match by status (1 = active, 2 = inactive)
        #[arg(long)]
        status: Option<i32>,
    },

    /// Create a neighborhood, or update it when --codigo is given
    Save {
        /// Existing neighborhood code (omit to create)
        #[arg(long)]
        codigo: Option<String>,

        /// Code of the owning municipality
        #[arg(long)]
        municipio: String,

        /// Name
        #[arg(long)]
        nome: String,

        /// Status (1 = active, 2 = inactive)
        #[arg(long)]
        status: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  PESSOA
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct PessoaArgs {
    #[command(subcommand)]
    pub command: PessoaCommand,
}

#[derive(Debug, Subcommand)]
pub enum PessoaCommand {
    /// List persons, optionally filtered
    #[command(alias = "ls")]
    List {
        /// Match a single person by code
        #[arg(long)]
        codigo: Option<i64>,

        /// Match by login
        #[arg(long)]
        login: Option<String>,

        /// Match by status (1 = active, 2 = inactive)
        #[arg(long)]
        status: Option<i32>,
    },

    /// Create a person, or update it when --codigo is given
    ///
    /// The address list is replaced wholesale: pass every address the
    /// person should keep.
    Save(PessoaSaveArgs),

    /// Show a person's stored addresses
    #[command(alias = "end")]
    Enderecos {
        /// Person code
        codigo_pessoa: i64,
    },
}

#[derive(Debug, Args)]
pub struct PessoaSaveArgs {
    /// Existing person code (omit to create)
    #[arg(long)]
    pub codigo: Option<String>,

    /// First name
    #[arg(long)]
    pub nome: String,

    /// Last name
    #[arg(long)]
    pub sobrenome: String,

    /// Age
    #[arg(long)]
    pub idade: String,

    /// Login
    #[arg(long)]
    pub login: String,

    /// Password (prompted when omitted)
    #[arg(long, env = "CADASTRO_SENHA", hide_env_values = true)]
    pub senha: Option<String>,

    /// Status (1 = active, 2 = inactive)
    #[arg(long)]
    pub status: String,

    /// Address as comma-separated KEY=VALUE pairs; repeat for each address.
    ///
    /// Keys: bairro, rua, numero, complemento, cep. A comma not followed by
    /// KEY= stays in the value.
    /// Example: --endereco "bairro=3,rua=Rua das Flores,numero=100,complemento=Bloco B, Apto 3,cep=01000-000"
    #[arg(long = "endereco", value_name = "KEY=VALUE,...")]
    pub enderecos: Vec<String>,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  CONFIG
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Display current resolved configuration
    Show,

    /// Print the config file location
    Path,

    /// Write an initial config file
    ///
    /// Takes the URL from the global --api-url flag, prompting when absent.
    Init {
        /// Overwrite an existing file without asking
        #[arg(long)]
        force: bool,
    },

    /// Change the API root URL in the config file
    SetUrl {
        /// New API root URL
        url: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  COMPLETIONS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
