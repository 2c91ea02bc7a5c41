use anyhow::{bail, Context, Result};
use std::env;
use std::str::FromStr;

/// Execution mode of the surrounding service.
///
/// In `Release` mode, underlying error details are suppressed from
/// client-visible responses and only reach the structured logs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RunMode {
    /// Development mode, full diagnostics in responses
    #[default]
    Debug,
    /// Hardened production mode
    Release,
}

impl RunMode {
    pub fn is_release(self) -> bool {
        matches!(self, RunMode::Release)
    }
}

impl FromStr for RunMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "debug" => Ok(RunMode::Debug),
            "release" => Ok(RunMode::Release),
            other => bail!("unknown run mode: {other}"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub mode: RunMode,
}

impl Config {
    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        let mode = match env::var("APP_MODE") {
            Ok(value) => value
                .parse()
                .context("APP_MODE must be \"debug\" or \"release\"")?,
            Err(_) => RunMode::default(),
        };

        Ok(Config { mode })
    }
}
