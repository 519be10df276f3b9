//! Integration tests for the config command group
//!
//! These tests exercise the config store end to end through the same
//! types the CLI commands use, against temporary config files.

use clap::Parser;
use ee::{
    cli::commands::{Cli, Commands, ConfigCommands},
    config::{resolve_config_path, ConfigEntry, ConfigStore},
    error::EeError,
    utils::format::{OutputFormat, TableFormatter},
};
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper to build a store rooted in a temporary directory
fn create_test_store(dir: &TempDir) -> ConfigStore {
    ConfigStore::new(dir.path().join("config.yml"))
}

#[test]
fn test_full_config_lifecycle() {
    let dir = TempDir::new().unwrap();
    let store = create_test_store(&dir);

    // Empty file: set one entry
    store.set("le-mail", "a@b.com").unwrap();
    let entries = store.entries().unwrap();
    assert_eq!(
        entries,
        vec![ConfigEntry {
            key: "le-mail".to_string(),
            value: "a@b.com".to_string(),
        }]
    );

    // get returns the stored value
    assert_eq!(store.get("le-mail").unwrap(), "a@b.com");

    // JSON listing renders a compact array
    let formatter = TableFormatter::new(OutputFormat::Json, true);
    let output = formatter.format_items(&entries).unwrap();
    assert_eq!(output, r#"[{"key":"le-mail","value":"a@b.com"}]"#);

    // unset leaves an empty config behind
    store.unset("le-mail").unwrap();
    assert!(store.entries().unwrap().is_empty());
}

#[test]
fn test_set_routes_to_overridden_path() {
    let dir = TempDir::new().unwrap();
    let custom = dir.path().join("custom").join("override.yml");

    let resolved = resolve_config_path(Some(custom.clone()));
    assert_eq!(resolved, custom);

    let store = ConfigStore::new(resolved);
    store.set("cloudflare-api-key", "abc123").unwrap();

    let contents = std::fs::read_to_string(&custom).unwrap();
    assert!(contents.contains("cloudflare-api-key"));
    assert!(contents.contains("abc123"));
}

#[test]
fn test_default_path_used_without_override() {
    assert_eq!(
        resolve_config_path(None),
        PathBuf::from("/opt/ee/config/config.yml")
    );
    assert_eq!(
        resolve_config_path(Some(PathBuf::new())),
        PathBuf::from("/opt/ee/config/config.yml")
    );
}

#[test]
fn test_rewrite_keeps_file_parseable() {
    let dir = TempDir::new().unwrap();
    let store = create_test_store(&dir);

    store.set("le-mail", "a@b.com").unwrap();
    store.set("site-title", "Hello: World").unwrap();
    store.set("le-mail", "c@d.com").unwrap();

    // A fresh store against the same file sees the rewritten contents
    let reread = create_test_store(&dir);
    assert_eq!(reread.get("le-mail").unwrap(), "c@d.com");
    assert_eq!(reread.get("site-title").unwrap(), "Hello: World");
}

#[test]
fn test_missing_key_reports_exact_key() {
    let dir = TempDir::new().unwrap();
    let store = create_test_store(&dir);
    store.set("present", "yes").unwrap();

    for err in [
        store.get("never-set").unwrap_err(),
        store.unset("never-set").unwrap_err(),
    ] {
        assert_eq!(err.to_string(), "No config value with key 'never-set' set");
    }
}

#[test]
fn test_empty_config_fails_for_every_format() {
    let dir = TempDir::new().unwrap();
    let store = create_test_store(&dir);

    // The listing command errors before formatting whenever the store is
    // empty, so the check is on the entries themselves.
    assert!(store.entries().unwrap().is_empty());
    assert_eq!(EeError::EmptyConfig.to_string(), "No config values found!");
}

#[test]
fn test_cli_parses_config_subcommands() {
    let cli = Cli::try_parse_from(["ee", "config", "get", "le-mail"]).unwrap();
    match cli.command {
        Commands::Config {
            command: ConfigCommands::Get { key },
        } => assert_eq!(key, "le-mail"),
        _ => panic!("expected config get"),
    }

    let cli = Cli::try_parse_from(["ee", "config", "set", "le-mail", "a@b.com"]).unwrap();
    match cli.command {
        Commands::Config {
            command: ConfigCommands::Set { key, value },
        } => {
            assert_eq!(key, "le-mail");
            assert_eq!(value, "a@b.com");
        }
        _ => panic!("expected config set"),
    }

    let cli = Cli::try_parse_from(["ee", "config", "unset", "le-mail"]).unwrap();
    assert!(matches!(
        cli.command,
        Commands::Config {
            command: ConfigCommands::Unset { .. }
        }
    ));
}

#[test]
fn test_cli_list_format_defaults_to_table() {
    let cli = Cli::try_parse_from(["ee", "config", "list"]).unwrap();
    match cli.command {
        Commands::Config {
            command: ConfigCommands::List { format },
        } => assert_eq!(format, OutputFormat::Table),
        _ => panic!("expected config list"),
    }

    let cli = Cli::try_parse_from(["ee", "config", "list", "--format", "json"]).unwrap();
    match cli.command {
        Commands::Config {
            command: ConfigCommands::List { format },
        } => assert_eq!(format, OutputFormat::Json),
        _ => panic!("expected config list"),
    }

    assert!(Cli::try_parse_from(["ee", "config", "list", "--format", "xml"]).is_err());
}

#[test]
fn test_env_override_routes_config_path() {
    std::env::set_var("EE_CONFIG_PATH", "/tmp/ee-env.yml");
    let from_env = Cli::try_parse_from(["ee", "config", "list"]).unwrap();
    let from_flag =
        Cli::try_parse_from(["ee", "--config", "/tmp/ee-flag.yml", "config", "list"]).unwrap();
    std::env::remove_var("EE_CONFIG_PATH");

    assert_eq!(from_env.config, Some(PathBuf::from("/tmp/ee-env.yml")));
    // An explicit flag wins over the environment
    assert_eq!(from_flag.config, Some(PathBuf::from("/tmp/ee-flag.yml")));
}

#[test]
fn test_cli_accepts_config_path_flag() {
    let cli = Cli::try_parse_from(["ee", "--config", "/tmp/ee.yml", "config", "list"]).unwrap();
    assert_eq!(cli.config, Some(PathBuf::from("/tmp/ee.yml")));
}

#[test]
fn test_set_requires_both_arguments() {
    assert!(Cli::try_parse_from(["ee", "config", "set", "only-key"]).is_err());
    assert!(Cli::try_parse_from(["ee", "config", "get"]).is_err());
}
