//! Command dispatch from parsed arguments to handlers.

use clap::Parser;
use tempfile::TempDir;
use toolsmith_cli::cli::Cli;
use toolsmith_cli::commands::run;
use toolsmith_cli::config::ToolsmithConfig;
use toolsmith_cli::Error;

fn invoke(args: &[&str], config: &ToolsmithConfig) -> Result<(bool, String), Error> {
    let cli = Cli::try_parse_from(args).unwrap();
    let mut buf = Vec::new();
    let ok = run(cli.command, cli.config.as_deref(), config, &mut buf)?;
    Ok((ok, String::from_utf8(buf).unwrap()))
}

#[test]
fn test_mkdir_creates_nested_directories() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("x").join("y");
    let target_str = target.to_str().unwrap();

    let (ok, text) = invoke(&["toolsmith", "mkdir", target_str], &ToolsmithConfig::default())
        .unwrap();

    assert!(ok);
    assert_eq!(text, format!("created {target_str}\n"));
    assert!(target.is_dir());
}

#[test]
fn test_file_name_failure_exit() {
    let (ok, text) = invoke(&["toolsmith", "file-name", "a/b"], &ToolsmithConfig::default())
        .unwrap();
    assert!(!ok);
    assert_eq!(text, "invalid\n");
}

#[test]
fn test_convert_dispatch() {
    let (ok, text) = invoke(
        &["toolsmith", "convert", "--to", "decimal", "0.50"],
        &ToolsmithConfig::default(),
    )
    .unwrap();
    assert!(ok);
    assert_eq!(text, "0.5\n");
}

#[test]
fn test_convert_error_surfaces() {
    let err = invoke(
        &["toolsmith", "convert", "--to", "i32", "9999999999"],
        &ToolsmithConfig::default(),
    )
    .unwrap_err();
    assert!(err.to_string().contains("out of range for i32"));
}

#[test]
fn test_clone_file_with_configured_depth() {
    let temp = TempDir::new().unwrap();
    let doc = temp.path().join("doc.json");
    std::fs::write(&doc, r#"{"outer": {"inner": [1, 2, 3]}}"#).unwrap();
    let doc_str = doc.to_str().unwrap();

    let (ok, text) = invoke(&["toolsmith", "clone", doc_str], &ToolsmithConfig::default())
        .unwrap();
    assert!(ok);
    assert_eq!(text, "{\"outer\":{\"inner\":[1,2,3]}}\n");

    let mut shallow = ToolsmithConfig::default();
    shallow.clone.max_depth = Some(2);
    let err = invoke(&["toolsmith", "clone", doc_str], &shallow).unwrap_err();
    assert!(matches!(err, Error::Clone(_)));

    let (ok, _) = invoke(&["toolsmith", "clone", doc_str, "--max-depth", "10"], &shallow)
        .unwrap();
    assert!(ok);
}

#[test]
fn test_clone_missing_file() {
    let err = invoke(
        &["toolsmith", "clone", "/definitely/not/here.json"],
        &ToolsmithConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}

#[test]
fn test_config_get_from_loaded_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    std::fs::write(&path, "[log]\nfilter = \"warn\"\n").unwrap();
    let path_str = path.to_str().unwrap();

    let config = ToolsmithConfig::load(Some(path_str)).unwrap();
    let (ok, text) = invoke(
        &["toolsmith", "--config", path_str, "config", "get", "log.filter"],
        &config,
    )
    .unwrap();
    assert!(ok);
    assert_eq!(text, "warn\n");
}
