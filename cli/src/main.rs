//! proledger: command-line entry point over a file-backed registry.
//!
//! Each invocation loads the snapshot, applies one call as the given caller,
//! and saves the snapshot only if the call succeeded.

mod commands;
mod config;
mod file_store;

use anyhow::Context;
use clap::Parser;
use commands::Command;
use config::CliConfig;
use file_store::FileSnapshotStore;
use proledger_registry::Registry;
use proledger_store::SnapshotStore;
use proledger_types::Identity;
use proledger_utils::LogFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "proledger", about = "Professional-network registry")]
struct Cli {
    /// Authenticated caller identity (0x-prefixed hex).
    #[arg(long, global = true, env = "PROLEDGER_CALLER")]
    caller: Option<Identity>,

    /// Snapshot file holding the registry state.
    #[arg(long, global = true, env = "PROLEDGER_STATE")]
    state: Option<PathBuf>,

    /// Path to a TOML configuration file. CLI flags and env vars override it.
    #[arg(long, global = true, env = "PROLEDGER_CONFIG")]
    config: Option<PathBuf>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, global = true, env = "PROLEDGER_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log format: "human" or "json".
    #[arg(long, global = true, env = "PROLEDGER_LOG_FORMAT")]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Command,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let file_config = match &cli.config {
        Some(path) => CliConfig::from_toml_file(path)?,
        None => CliConfig::default(),
    };
    let config = CliConfig {
        state_path: cli.state.unwrap_or(file_config.state_path),
        log_level: cli.log_level.unwrap_or(file_config.log_level),
        log_format: cli.log_format.unwrap_or(file_config.log_format),
    };

    proledger_utils::init_logging(config.log_format, &config.log_level);

    let store = FileSnapshotStore::new(&config.state_path);
    let state = store
        .load_or_default()
        .with_context(|| format!("loading {}", store.path().display()))?;
    tracing::debug!(
        path = %store.path().display(),
        members = state.members.len(),
        organizations = state.organizations.len(),
        "registry loaded"
    );

    let mut registry = Registry::from_state(state);
    let outcome = commands::execute(&mut registry, cli.caller, cli.command)?;

    if outcome.mutated {
        store
            .save(registry.state())
            .with_context(|| format!("saving {}", store.path().display()))?;
        tracing::info!(path = %store.path().display(), "registry saved");
    }

    println!("{}", serde_json::to_string_pretty(&outcome.output)?);
    Ok(())
}
