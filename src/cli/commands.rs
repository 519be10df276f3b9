//! CLI commands and argument parsing
//!
//! This module defines the command-line interface structure using clap,
//! including all commands, subcommands, and their arguments.

use crate::config::{resolve_config_path, ConfigStore};
use crate::error::{EeError, Result};
use crate::utils::format::{OutputFormat, TableFormatter};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(name = "ee")]
#[command(about = "Manage global ee configuration")]
#[command(version, author)]
pub struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Path to the config file
    #[arg(long, global = true, value_name = "PATH", env = "EE_CONFIG_PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Configuration management commands
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Get a config value
    Get {
        /// Name of config value to get
        key: String,
    },
    /// Set a config value
    Set {
        /// Key of config to set
        key: String,
        /// Value of config to set
        value: String,
    },
    /// Unset a config value
    Unset {
        /// Key of config to unset
        key: String,
    },
    /// List the config values
    List {
        /// Render output in a particular format
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },
}

impl Cli {
    pub fn execute(self) -> Result<()> {
        let Cli {
            config,
            no_color,
            command,
            ..
        } = self;

        // The environment override is applied by clap at parse time; the
        // store only ever sees the resolved path.
        let store = ConfigStore::new(resolve_config_path(config));

        match command {
            Commands::Config { command } => execute_config_command(command, &store, no_color),
        }
    }
}

fn execute_config_command(
    command: ConfigCommands,
    store: &ConfigStore,
    no_color: bool,
) -> Result<()> {
    match command {
        ConfigCommands::Get { key } => execute_config_get(&key, store),
        ConfigCommands::Set { key, value } => execute_config_set(&key, &value, store),
        ConfigCommands::Unset { key } => execute_config_unset(&key, store),
        ConfigCommands::List { format } => execute_config_list(format, store, no_color),
    }
}

fn execute_config_get(key: &str, store: &ConfigStore) -> Result<()> {
    let value = store.get(key)?;
    println!("{value}");
    Ok(())
}

fn execute_config_set(key: &str, value: &str, store: &ConfigStore) -> Result<()> {
    store.set(key, value)?;
    debug!("set config key '{}' in {}", key, store.path().display());
    Ok(())
}

fn execute_config_unset(key: &str, store: &ConfigStore) -> Result<()> {
    store.unset(key)?;
    debug!("unset config key '{}' in {}", key, store.path().display());
    Ok(())
}

fn execute_config_list(format: OutputFormat, store: &ConfigStore, no_color: bool) -> Result<()> {
    let entries = store.entries()?;

    // An empty config is an error for every format, checked before any
    // rendering happens.
    if entries.is_empty() {
        return Err(EeError::EmptyConfig);
    }

    let formatter = TableFormatter::new(format, no_color);
    let output = formatter.format_items(&entries)?;
    println!("{output}");
    Ok(())
}
