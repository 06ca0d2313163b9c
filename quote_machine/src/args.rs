//! Command-line arguments for the Quote Machine.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use quote_common::{QuoteError, Result};

use crate::toast::TOAST_LIFETIME;

/// Directory name under the platform data directory.
const APP_DIR: &str = "quote_machine";

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// API key for the quote provider. Without it every fetch uses the built-in quotes.
    #[clap(long, env = "RAPIDAPI_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Directory holding the favorites file.
    /// Defaults to the platform data directory.
    #[clap(long)]
    pub data_dir: Option<PathBuf>,

    /// Keep favorites for this session only.
    #[clap(long)]
    pub no_persist: bool,

    /// Do not recolor the whole terminal with the accent color.
    #[clap(long)]
    pub no_theme: bool,

    /// Give up on the quote provider after this many seconds. Waits forever if unset.
    #[clap(long)]
    pub timeout_secs: Option<u64>,

    /// Seconds a notification stays on screen.
    #[clap(long, default_value_t = TOAST_LIFETIME.as_secs())]
    pub toast_secs: u64,
}

impl Args {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    pub fn toast_lifetime(&self) -> Duration {
        Duration::from_secs(self.toast_secs)
    }

    /// Resolves the favorites directory, falling back to the platform data directory.
    pub fn data_dir(&self) -> Result<PathBuf> {
        self.data_dir
            .clone()
            .or_else(|| dirs::data_dir().map(|dir| dir.join(APP_DIR)))
            .ok_or_else(|| {
                QuoteError::Storage("no data directory found; pass --data-dir".to_string())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["quote_machine"]).unwrap();
        assert!(!args.no_persist);
        assert!(!args.no_theme);
        assert_eq!(args.timeout(), None);
        assert_eq!(args.toast_lifetime(), Duration::from_secs(3));
    }

    #[test]
    fn explicit_values() {
        let args = Args::try_parse_from([
            "quote_machine",
            "--api-key",
            "k",
            "--data-dir",
            "/tmp/qm",
            "--no-persist",
            "--no-theme",
            "--timeout-secs",
            "10",
            "--toast-secs",
            "1",
        ])
        .unwrap();
        assert_eq!(args.api_key.as_deref(), Some("k"));
        assert_eq!(args.data_dir().unwrap(), PathBuf::from("/tmp/qm"));
        assert!(args.no_persist);
        assert!(args.no_theme);
        assert_eq!(args.timeout(), Some(Duration::from_secs(10)));
        assert_eq!(args.toast_lifetime(), Duration::from_secs(1));
    }
}
