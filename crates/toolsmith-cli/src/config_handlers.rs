//! Handler functions for `toolsmith config` subcommands.

use std::io::Write;
use std::path::PathBuf;

use crate::cli::ConfigAction;
use crate::config::{PROJECT_NAME, ToolsmithConfig};
use crate::error::{Error, Result};

// ============================================================================
// Command dispatch
// ============================================================================

/// Handles a config subcommand. A missing action shows the configuration.
pub fn handle_config_command(
    config_path: Option<&str>,
    config: &ToolsmithConfig,
    action: Option<ConfigAction>,
    out: &mut dyn Write,
) -> Result<()> {
    match action.unwrap_or(ConfigAction::Show) {
        ConfigAction::Path => cmd_config_path(config_path, out),
        ConfigAction::Show => cmd_config_show(config, out),
        ConfigAction::Get { key } => cmd_config_get(config, &key, out),
        ConfigAction::Init { file, force } => cmd_config_init(file.as_deref(), force, out),
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// Prints the resolved config file path.
pub fn cmd_config_path(config_path: Option<&str>, out: &mut dyn Write) -> Result<()> {
    let path = ToolsmithConfig::resolve_config_path(config_path)
        .ok_or_else(|| Error::config("Could not determine config directory for this platform"))?;
    writeln!(out, "{}", path.display())?;
    if !path.exists() {
        log::info!(
            "{} does not exist; run `{PROJECT_NAME} config init` to create it",
            path.display()
        );
    }
    Ok(())
}

/// Prints the effective configuration.
pub fn cmd_config_show(config: &ToolsmithConfig, out: &mut dyn Write) -> Result<()> {
    write!(out, "{}", config.to_toml_string()?)?;
    Ok(())
}

/// Prints one configuration value by dotted key.
pub fn cmd_config_get(config: &ToolsmithConfig, key: &str, out: &mut dyn Write) -> Result<()> {
    let value = toml::Value::try_from(config).map_err(|e| Error::config(e.to_string()))?;
    match get_nested_value(&value, key) {
        Some(found) => {
            writeln!(out, "{}", format_toml_value(found))?;
            Ok(())
        }
        None => Err(Error::config(format!(
            "Key '{key}' not found in configuration"
        ))),
    }
}

/// Writes the default configuration to `file` or the default location.
pub fn cmd_config_init(file: Option<&str>, force: bool, out: &mut dyn Write) -> Result<()> {
    let path = match file {
        Some(p) => PathBuf::from(p),
        None => ToolsmithConfig::default_config_path()
            .ok_or_else(|| Error::config("Could not determine config directory"))?,
    };

    if path.exists() && !force {
        return Err(Error::config(format!(
            "Config file already exists at {}. Use --force to overwrite.",
            path.display()
        )));
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| Error::io_with_path(e, parent))?;
    }

    let text = ToolsmithConfig::default().to_toml_string()?;
    std::fs::write(&path, text).map_err(|e| Error::io_with_path(e, &path))?;

    writeln!(out, "Config file created at {}", path.display())?;
    Ok(())
}

// ============================================================================
// TOML helpers
// ============================================================================

/// Navigates a dotted key path in a TOML value tree.
pub fn get_nested_value<'a>(value: &'a toml::Value, key: &str) -> Option<&'a toml::Value> {
    key.split('.')
        .try_fold(value, |current, part| current.as_table()?.get(part))
}

/// Renders a TOML value for display; strings print without quotes.
pub fn format_toml_value(value: &toml::Value) -> String {
    match value {
        toml::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
