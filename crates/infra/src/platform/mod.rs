//! Platform-specific implementations
//!
//! # Platform Support
//!
//! - **Windows**: `cmd /c start`
//! - **macOS**: `open`
//! - **Other platforms**: `xdg-open`

pub mod browser;

pub use browser::{browser_command, BrowserCommand, BrowserLauncher, Platform, SystemBrowser};
