mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::path::Path;

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    validate_config(&config)?;

    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    // Try default locations
    let default_paths = [
        "./config.toml",
        "./reelscan.toml",
        "~/.config/reelscan/config.toml",
        "/etc/reelscan/config.toml",
    ];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            return load_config(path);
        }
    }

    // Return default config if no file found
    Ok(Config::default())
}

/// Validate configuration
fn validate_config(config: &Config) -> Result<()> {
    if config.scanner.video_extensions.is_empty() {
        anyhow::bail!("Scanner has no video extensions configured");
    }

    if config.scan.max_depth == Some(0) {
        anyhow::bail!("scan.max_depth of 0 would skip every entry");
    }

    // Missing scan paths are a warning, not an error: the library may simply
    // not be mounted yet.
    for path in &config.scan.paths {
        if !path.exists() {
            tracing::warn!("Scan path does not exist: {:?}", path);
        }
    }

    Ok(())
}
