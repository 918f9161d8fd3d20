use clap::Parser;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod domain;
mod error;
mod services;

pub use cli::*;
pub use domain::constants::*;
pub use domain::models::*;
pub use services::blacklist::Blacklist;
pub use services::bundle::{is_current, sha256_hex, Bundle};
pub use services::config::{config_path, load_config, Config};
pub use services::doctor::doctor;
pub use services::output::{print_report, print_rows};
pub use services::pipeline::{dedupe, Auditor};
pub use services::resolve::HttpFetcher;
pub use services::scanner::{collect, install_scanner};

/// Per-invocation settings shared by every command handler.
pub struct Context {
    pub root: PathBuf,
    pub config_file: PathBuf,
    pub config: Config,
    pub blacklist: Blacklist,
}

impl Context {
    /// Explicit path, else the configured bundle, relative to the working directory.
    pub fn bundle_path(&self, explicit: Option<&Path>) -> anyhow::Result<PathBuf> {
        let p = explicit.unwrap_or(self.config.bundle.as_path());
        if p.is_absolute() {
            return Ok(p.to_path_buf());
        }
        Ok(std::env::current_dir()?.join(p))
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config_file = config_path(&cli.root, cli.config.as_deref());
    let config = load_config(&cli.root, cli.config.as_deref())?;
    let blacklist = config.blacklist(cli.blacklist.as_deref())?;
    tracing::debug!(entries = blacklist.len(), "loaded blacklist");

    let ctx = Context {
        root: cli.root.clone(),
        config_file,
        config,
        blacklist,
    };

    if commands::handle_bundle_commands(&cli, &ctx)? {
        return Ok(());
    }
    commands::handle_inspect_commands(&cli, &ctx)?;
    Ok(())
}
