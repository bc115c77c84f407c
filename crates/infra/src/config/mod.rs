//! Configuration loading
//!
//! Reads the provider credentials and application settings from a JSON or
//! TOML file, then applies environment overrides.

pub mod loader;

// Re-export commonly used items
pub use loader::{apply_env_overrides, load, load_from_file, probe_config_paths};
