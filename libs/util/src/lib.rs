use std::path::{Path, PathBuf};

use anyhow::Context;
use toml::{map::Map, Value};

pub fn workspace_dir() -> PathBuf {
    let output = std::process::Command::new(env!("CARGO"))
        .arg("locate-project")
        .arg("--workspace")
        .arg("--message-format=plain")
        .output()
        .expect("cargo locate-project")
        .stdout;
    let cargo_path =
        Path::new(std::str::from_utf8(&output).expect("utf-8 path").trim());
    cargo_path.parent().expect("workspace root").to_path_buf()
}

pub fn load_config(config_name: &str) -> anyhow::Result<Map<String, Value>> {
    let workspace_dir = workspace_dir();
    let config = std::fs::read_to_string(workspace_dir.join(config_name))
        .with_context(|| format!("failed to read {}", config_name))?;

    toml::from_str::<Map<String, Value>>(&config)
        .with_context(|| format!("failed to parse {}", config_name))
}

pub fn load_env() -> anyhow::Result<Map<String, Value>> {
    let workspace_dir = workspace_dir();
    let secrets = std::fs::read_to_string(workspace_dir.join("Secrets.toml"))
        .context("failed to read Secrets.toml")?;

    toml::from_str::<Map<String, Value>>(&secrets)
        .context("failed to parse Secrets.toml")
}

/// Looks up a required string key from the loaded secrets. Absence is a
/// startup error, not a runtime condition.
pub fn require<'a>(
    secrets: &'a Map<String, Value>,
    key: &str,
) -> anyhow::Result<&'a str> {
    secrets.get(key).and_then(Value::as_str).with_context(|| {
        format!("invalid/missing environment variable: \"{}\"", key)
    })
}
