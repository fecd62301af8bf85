//! clubadmin library root.
//! Exposes the CLI parser, the high-level run() function, and the generic
//! CRUD engine (validator, form binder, entity table, pages, role gate).

pub mod backend;
pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use backend::{Backend, HttpBackend};
use clap::Parser;
use cli::commands;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use tracing_subscriber::{EnvFilter, fmt};

/// Central command dispatcher. Commands that need the backend get an
/// HTTP client built from `cfg`.
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => commands::init::handle(cli, cfg),
        Commands::Config { .. } => commands::config::handle(&cli.command, cfg),
        Commands::Entities { .. } => commands::entities::handle(&cli.command),
        Commands::Validate { .. } => commands::validate::handle(&cli.command),
        Commands::Routes { roles } if !roles.is_empty() => {
            commands::routes::handle(&cli.command, None)
        }
        _ => {
            let backend = HttpBackend::new(cfg)?;
            dispatch_with(&cli.command, cfg, &backend)
        }
    }
}

/// Run a backend command against any [`Backend`].
pub fn dispatch_with(cmd: &Commands, cfg: &Config, backend: &dyn Backend) -> AppResult<()> {
    match cmd {
        Commands::Routes { .. } => commands::routes::handle(cmd, Some(backend)),
        Commands::Whoami => commands::whoami::handle(backend),
        Commands::List { .. } => commands::list::handle(cmd, cfg, backend),
        Commands::Show { .. } => commands::show::handle(cmd, backend),
        Commands::Create { .. } => commands::create::handle(cmd, backend),
        Commands::Edit { .. } => commands::edit::handle(cmd, backend),
        Commands::Delete { .. } => commands::delete::handle(cmd, backend),
        Commands::Init
        | Commands::Config { .. }
        | Commands::Entities { .. }
        | Commands::Validate { .. } => Ok(()),
    }
}

/// Diagnostics go to stderr; `RUST_LOG` wins over `log_level`.
fn init_tracing(cfg: &Config) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cfg.log_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // test mode never reads the user's configuration
    let mut cfg = if cli.test {
        Config::default()
    } else {
        Config::load()?
    };

    if let Some(server) = &cli.server {
        cfg.server_url = server.trim_end_matches('/').to_string();
    }

    init_tracing(&cfg);
    tracing::debug!(server = %cfg.server_url, "configuration loaded");

    dispatch(&cli, &cfg)
}
