//! # CLI Configuration
//!
//! Optional YAML file passed with `--config`. Every field has a default, so
//! an absent file and an empty file behave the same.
//!
//! ```yaml
//! state_file: ledger-state.json
//! log_filter: warn
//! ```
//!
//! Precedence, highest first: command-line flag, config file, default.
//! `RUST_LOG` overrides any log filter chosen here.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// State file used when neither `--state-file` nor the config names one.
pub const DEFAULT_STATE_FILE: &str = "ledger-state.json";

/// Log filter used when neither `-v` nor the config names one.
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Location of the JSON state file backing the ledger.
    pub state_file: Option<PathBuf>,
    /// `tracing_subscriber::EnvFilter` directive.
    pub log_filter: Option<String>,
}

impl CliConfig {
    /// Load from `path`, or return defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Parse YAML text. Empty text yields defaults.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Resolve the state file, letting a command-line value win.
    pub fn state_file(&self, flag: Option<&Path>) -> PathBuf {
        flag.map(Path::to_path_buf)
            .or_else(|| self.state_file.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATE_FILE))
    }

    /// Resolve the log filter directive from the `-v` count.
    pub fn log_filter(&self, verbose: u8) -> String {
        match verbose {
            0 => self
                .log_filter
                .clone()
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_owned()),
            1 => "info".to_owned(),
            2 => "debug".to_owned(),
            _ => "trace".to_owned(),
        }
    }
}
