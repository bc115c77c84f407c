//! Opening URLs in the user's default browser

use std::process::{Command, Stdio};

use lyricer_domain::{LyricerError, Result};
use url::Url;

/// Operating system family, as far as URL opening is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    MacOs,
    Other,
}

impl Platform {
    /// Platform this binary was compiled for.
    #[must_use]
    pub const fn current() -> Self {
        if cfg!(target_os = "windows") {
            Self::Windows
        } else if cfg!(target_os = "macos") {
            Self::MacOs
        } else {
            Self::Other
        }
    }
}

/// A program and its arguments, ready to spawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserCommand {
    pub program: &'static str,
    pub args: Vec<String>,
}

/// Command that opens `url` with the platform's default handler.
///
/// On Windows `start` treats its first quoted argument as a window title and
/// `cmd` splits on `&`, so an empty title is passed and `&` is escaped.
#[must_use]
pub fn browser_command(platform: Platform, url: &str) -> BrowserCommand {
    match platform {
        Platform::Windows => BrowserCommand {
            program: "cmd",
            args: vec![
                "/c".to_string(),
                "start".to_string(),
                String::new(),
                url.replace('&', "^&"),
            ],
        },
        Platform::MacOs => BrowserCommand { program: "open", args: vec![url.to_string()] },
        Platform::Other => BrowserCommand { program: "xdg-open", args: vec![url.to_string()] },
    }
}

/// Trait for launching the authorization URL
pub trait BrowserLauncher: Send + Sync {
    /// Start opening `url` without waiting for the browser to exit.
    fn open(&self, url: &Url) -> Result<()>;
}

/// Launches the default browser through the OS command.
#[derive(Debug, Clone, Copy)]
pub struct SystemBrowser {
    platform: Platform,
}

impl SystemBrowser {
    #[must_use]
    pub const fn new() -> Self {
        Self { platform: Platform::current() }
    }
}

impl Default for SystemBrowser {
    fn default() -> Self {
        Self::new()
    }
}

impl BrowserLauncher for SystemBrowser {
    fn open(&self, url: &Url) -> Result<()> {
        let command = browser_command(self.platform, url.as_str());
        tracing::debug!(program = command.program, "Launching browser");

        Command::new(command.program)
            .args(&command.args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map(drop)
            .map_err(|err| {
                LyricerError::Internal(format!("failed to launch {}: {err}", command.program))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://accounts.spotify.com/authorize?response_type=code&client_id=x";

    #[test]
    fn macos_uses_open() {
        let command = browser_command(Platform::MacOs, URL);
        assert_eq!(command.program, "open");
        assert_eq!(command.args, vec![URL.to_string()]);
    }

    #[test]
    fn other_platforms_use_xdg_open() {
        let command = browser_command(Platform::Other, URL);
        assert_eq!(command.program, "xdg-open");
        assert_eq!(command.args, vec![URL.to_string()]);
    }

    #[test]
    fn windows_uses_cmd_start_with_escaped_ampersands() {
        let command = browser_command(Platform::Windows, URL);
        assert_eq!(command.program, "cmd");
        assert_eq!(command.args[..3], ["/c", "start", ""]);
        assert_eq!(
            command.args[3],
            "https://accounts.spotify.com/authorize?response_type=code^&client_id=x"
        );
    }

    #[test]
    fn current_matches_compile_target() {
        let platform = Platform::current();
        if cfg!(target_os = "macos") {
            assert_eq!(platform, Platform::MacOs);
        } else if cfg!(target_os = "windows") {
            assert_eq!(platform, Platform::Windows);
        } else {
            assert_eq!(platform, Platform::Other);
        }
    }
}
