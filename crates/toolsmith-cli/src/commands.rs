//! Handlers for the top-level commands.
//!
//! Handlers write their report to `out` and return whether the command
//! succeeded; `false` maps to a non-zero exit status.

use std::io::{Read, Write};
use std::path::Path;

use serde_json::Value;
use toolsmith_clone::{CloneOptions, GraphCloner};
use toolsmith_core::conversion::numeric::{Decimal, change_type};
use toolsmith_core::{create_directory, is_valid_file_name, is_valid_path, to_date_string};

use crate::cli::{Command, Target};
use crate::config::ToolsmithConfig;
use crate::config_handlers::handle_config_command;
use crate::error::{Error, Result};

/// Runs `command` against the effective configuration.
pub fn run(
    command: Command,
    config_path: Option<&str>,
    config: &ToolsmithConfig,
    out: &mut dyn Write,
) -> Result<bool> {
    match command {
        Command::Path { path } => cmd_path(&path, out),
        Command::FileName { name } => cmd_file_name(&name, out),
        Command::Mkdir { path } => cmd_mkdir(&path, out),
        Command::Convert { to, value } => cmd_convert(to, &value, out),
        Command::Date { value } => cmd_date(&value, out),
        Command::CloneJson {
            input,
            max_depth,
            pretty,
        } => {
            let mut options = config.clone;
            if max_depth.is_some() {
                options.max_depth = max_depth;
            }
            let text = read_input(&input)?;
            cmd_clone(&text, options, pretty, out)
        }
        Command::Config { action } => {
            handle_config_command(config_path, config, action, out)?;
            Ok(true)
        }
    }
}

// ============================================================================
// Paths
// ============================================================================

/// Reports whether `path` is valid.
pub fn cmd_path(path: &str, out: &mut dyn Write) -> Result<bool> {
    report(is_valid_path(path), out)
}

/// Reports whether `name` is a valid file name.
pub fn cmd_file_name(name: &str, out: &mut dyn Write) -> Result<bool> {
    report(is_valid_file_name(name), out)
}

/// Creates `path`, reporting invalid paths without touching the filesystem.
pub fn cmd_mkdir(path: &str, out: &mut dyn Write) -> Result<bool> {
    if create_directory(path)? {
        writeln!(out, "created {path}")?;
        Ok(true)
    } else {
        writeln!(out, "invalid path: {path:?}")?;
        Ok(false)
    }
}

fn report(valid: bool, out: &mut dyn Write) -> Result<bool> {
    writeln!(out, "{}", if valid { "valid" } else { "invalid" })?;
    Ok(valid)
}

// ============================================================================
// Conversions
// ============================================================================

/// Interprets a command-line argument as JSON, falling back to text.
pub fn parse_input_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

/// Coerces `value` to `target` and renders the result.
pub fn convert(target: Target, value: &Value) -> Result<String> {
    let rendered = match target {
        Target::I32 => change_type::<i32>(value)?.to_string(),
        Target::I64 => change_type::<i64>(value)?.to_string(),
        Target::F32 => change_type::<f32>(value)?.to_string(),
        Target::F64 => change_type::<f64>(value)?.to_string(),
        Target::Decimal => change_type::<Decimal>(value)?.to_string(),
        Target::Bool => change_type::<bool>(value)?.to_string(),
        Target::Char => change_type::<char>(value)?.to_string(),
        Target::String => change_type::<String>(value)?,
    };
    Ok(rendered)
}

/// Converts a raw argument and prints the result.
pub fn cmd_convert(target: Target, raw: &str, out: &mut dyn Write) -> Result<bool> {
    let value = parse_input_value(raw);
    log::debug!("Converting {value} to {target:?}");
    writeln!(out, "{}", convert(target, &value)?)?;
    Ok(true)
}

/// Formats date-time text.
pub fn cmd_date(raw: &str, out: &mut dyn Write) -> Result<bool> {
    let rendered = to_date_string(&Value::String(raw.to_string()))?;
    writeln!(out, "{rendered}")?;
    Ok(!rendered.is_empty())
}

// ============================================================================
// Cloning
// ============================================================================

/// Parses a JSON document and deep-copies it with `options`.
pub fn clone_document(text: &str, options: CloneOptions) -> Result<Value> {
    let document: Value = serde_json::from_str(text)?;
    let copy = GraphCloner::with_options(options).deep_clone(&document)?;
    Ok(copy)
}

/// Deep-copies a JSON document and prints the copy.
pub fn cmd_clone(
    text: &str,
    options: CloneOptions,
    pretty: bool,
    out: &mut dyn Write,
) -> Result<bool> {
    let copy = clone_document(text, options)?;
    let rendered = if pretty {
        serde_json::to_string_pretty(&copy)?
    } else {
        serde_json::to_string(&copy)?
    };
    writeln!(out, "{rendered}")?;
    Ok(true)
}

fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .map_err(|e| Error::io_with_path(e, Path::new("<stdin>")))?;
        return Ok(text);
    }
    std::fs::read_to_string(input).map_err(|e| Error::io_with_path(e, Path::new(input)))
}
