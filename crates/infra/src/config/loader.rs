//! Configuration loader
//!
//! ## Loading Strategy
//! 1. Use the file named by `LYRICER_CONFIG`, if set
//! 2. Otherwise probe the working directory for a config file
//! 3. Parse it as JSON or TOML depending on the extension
//! 4. Apply environment overrides, then validate
//!
//! ## Environment Variables
//! - `LYRICER_CONFIG`: explicit config file path
//! - `LYRICER_CLIENT_ID`: overrides `spotify.client_id`
//! - `LYRICER_CLIENT_SECRET`: overrides `spotify.client_secret`
//!
//! ## File Locations
//! Probed in order inside the current working directory:
//! `hidden_conf.json`, `lyricer.json`, `lyricer.toml`, `config.json`,
//! `config.toml`.

use std::path::{Path, PathBuf};

use lyricer_domain::{LyricerConfig, LyricerError, Result};

pub const CONFIG_PATH_ENV: &str = "LYRICER_CONFIG";
pub const CLIENT_ID_ENV: &str = "LYRICER_CLIENT_ID";
pub const CLIENT_SECRET_ENV: &str = "LYRICER_CLIENT_SECRET";

const CANDIDATE_FILES: [&str; 5] =
    ["hidden_conf.json", "lyricer.json", "lyricer.toml", "config.json", "config.toml"];

/// Load configuration using the standard lookup.
///
/// # Errors
/// Returns `LyricerError::InvalidConfig` if no file is found, the file
/// cannot be parsed, or validation fails.
pub fn load() -> Result<LyricerConfig> {
    let explicit = std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from);
    if let Some(path) = &explicit {
        tracing::debug!(path = %path.display(), "Using config path from {CONFIG_PATH_ENV}");
    }
    load_from_file(explicit)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes the standard locations.
///
/// # Errors
/// Returns `LyricerError::InvalidConfig` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - Any configured URL is malformed
pub fn load_from_file(path: Option<PathBuf>) -> Result<LyricerConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(LyricerError::InvalidConfig(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            LyricerError::InvalidConfig(format!(
                "No config file found; looked for {}",
                CANDIDATE_FILES.join(", ")
            ))
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| LyricerError::InvalidConfig(format!("Failed to read config file: {e}")))?;

    let mut config = parse_config(&contents, &config_path)?;
    apply_env_overrides(&mut config);
    config.validate()?;
    Ok(config)
}

/// Replace credentials with `LYRICER_CLIENT_ID` / `LYRICER_CLIENT_SECRET`
/// when those are set and non-empty.
pub fn apply_env_overrides(config: &mut LyricerConfig) {
    if let Some(client_id) = non_empty_env(CLIENT_ID_ENV) {
        tracing::debug!("Overriding client id from {CLIENT_ID_ENV}");
        config.spotify.client_id = client_id;
    }
    if let Some(secret) = non_empty_env(CLIENT_SECRET_ENV) {
        tracing::debug!("Overriding client secret from {CLIENT_SECRET_ENV}");
        config.spotify.client_secret = secret;
    }
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`); a missing
/// extension is treated as JSON.
fn parse_config(contents: &str, path: &Path) -> Result<LyricerConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| LyricerError::InvalidConfig(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| LyricerError::InvalidConfig(format!("Invalid JSON format: {e}"))),
        _ => Err(LyricerError::InvalidConfig(format!("Unsupported config format: {extension}"))),
    }
}

/// First existing candidate file in the current working directory.
pub fn probe_config_paths() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    probe_in(&cwd)
}

fn probe_in(dir: &Path) -> Option<PathBuf> {
    CANDIDATE_FILES.iter().map(|name| dir.join(name)).find(|path| path.exists())
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}
