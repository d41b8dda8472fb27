use anyhow::{Context, Result, anyhow};
use log::{LevelFilter, debug};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Validator configuration
/// Loaded from a JSON file when one exists; every field has a default so a
/// partial file is enough. Command line flags override these values.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,

    /// File extensions treated as SRT when walking directories
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Follow symbolic links when walking directories
    #[serde(default = "default_follow_links")]
    pub follow_links: bool,

    /// Stop at the first invalid file
    #[serde(default)]
    pub fail_fast: bool,
}

/// Log level
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

fn default_extensions() -> Vec<String> {
    vec!["srt".to_string()]
}

fn default_follow_links() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: LogLevel::default(),
            extensions: default_extensions(),
            follow_links: default_follow_links(),
            fail_fast: false,
        }
    }
}

impl Config {
    /// Load the configuration at `path`, or the defaults if there is no such file
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!("No config file at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        let file = File::open(path)
            .with_context(|| format!("Failed to open config file: {}", path.display()))?;
        let config: Config = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.extensions.is_empty() {
            return Err(anyhow!("At least one subtitle file extension must be configured"));
        }

        if let Some(bad) = self.extensions.iter().find(|ext| ext.trim_start_matches('.').is_empty()) {
            return Err(anyhow!("Invalid subtitle file extension: '{}'", bad));
        }

        Ok(())
    }
}
