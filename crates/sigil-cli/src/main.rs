//! # sigil CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use sigil_cli::config::CliConfig;
use sigil_cli::{audit, credential, role, store, transfer};

/// Sigil — soulbound certificate registry.
///
/// Issues one non-transferable credential per whitelisted account and
/// permanently blocks any later change of custodian.
#[derive(Parser, Debug)]
#[command(name = "sigil", version, about)]
struct Cli {
    /// Path to the registry state file.
    #[arg(long, global = true, value_name = "PATH")]
    state: Option<PathBuf>,

    /// Optional YAML configuration file.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Create a fresh state file with the deployer as administrator.
    Init(store::InitArgs),
    /// Whitelist and administrator management.
    Role(role::RoleArgs),
    /// Issue a credential to the acting account.
    Mint(credential::MintArgs),
    /// Destroy a credential.
    Burn(credential::BurnArgs),
    /// Attempt a custody transfer (rejected for held credentials).
    Transfer(transfer::TransferArgs),
    /// Show holder, metadata, and custody state of a credential.
    Inspect(credential::InspectArgs),
    /// List live credentials.
    List,
    /// Report supported capability sets.
    Capabilities,
    /// List audit records and verify the hash chain.
    Audit(audit::AuditArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => CliConfig::load(path)?,
        None => CliConfig::default(),
    };

    let filter = match config.log_filter.as_deref() {
        Some(directive) => EnvFilter::new(directive),
        None => EnvFilter::from_default_env(),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Flag > config file > default.
    let state = cli
        .state
        .or(config.state)
        .unwrap_or_else(|| PathBuf::from("sigil-registry.json"));

    match cli.command {
        Commands::Init(args) => store::init(&state, args),
        Commands::Role(args) => role::run(&state, args),
        Commands::Mint(args) => credential::mint(&state, args),
        Commands::Burn(args) => credential::burn(&state, args),
        Commands::Transfer(args) => transfer::run(&state, args),
        Commands::Inspect(args) => credential::inspect(&state, args),
        Commands::List => credential::list(&state),
        Commands::Capabilities => credential::capabilities(&state),
        Commands::Audit(args) => audit::run(&state, args),
    }
}
