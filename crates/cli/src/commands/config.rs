//! `config show|get|set|reset`

use anyhow::Result;
use std::path::Path;

use crate::config::Config;
use crate::output::{colors, render_record, OutputFormat};

/// Effective configuration, after environment and flag overrides
pub fn show(config: &Config, format: OutputFormat) -> Result<String> {
    let fields = [
        ("API URL", config.api_url.clone()),
        (
            "Token",
            if config.is_authenticated() { "***" } else { "(not set)" }.to_string(),
        ),
        ("Output format", config.output_format.to_string()),
        ("Colored", config.colored.to_string()),
        ("Timeout (s)", config.timeout_seconds.to_string()),
        ("Page size", config.page_size.to_string()),
        ("Debug", config.debug.to_string()),
    ];

    let mut redacted = config.clone();
    redacted.auth_token = redacted.auth_token.map(|_| "***".to_string());

    render_record(&fields, &redacted, format)
}

pub fn get(config: &Config, key: &str) -> Result<String> {
    config
        .get(key)
        .ok_or_else(|| anyhow::anyhow!("No value for '{}'", key))
}

/// Update one key in the config file at `path`. Environment overrides are
/// not written back.
pub fn set(path: &Path, key: &str, value: &str) -> Result<String> {
    let mut stored = Config::load_from(path)?;
    stored.set(key, value)?;
    stored.save_to(path)?;
    Ok(colors::success(&format!("Set {}", key)).to_string())
}

pub fn reset(path: &Path) -> Result<String> {
    let mut stored = Config::load_from(path)?;
    stored.reset();
    stored.save_to(path)?;
    Ok(colors::success("Configuration reset to defaults").to_string())
}
