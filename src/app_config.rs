use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use log::debug;

use crate::errors::AppError;

/// Application configuration module
/// This module handles loading and validating the settings of the command line tool.
/// The cleaning pipeline itself takes no configuration.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Directory cleaned files are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// File extensions treated as subtitle files when scanning directories
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Descend into sub-directories when an input is a directory
    #[serde(default = "default_true")]
    pub recursive: bool,

    /// Print the removed caption lines of every cleaned file
    #[serde(default)]
    pub show_captions: bool,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Log verbosity level
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

impl LogLevel {
    // @returns: Matching filter for the log facade
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            Self::Error => log::LevelFilter::Error,
            Self::Warn => log::LevelFilter::Warn,
            Self::Info => log::LevelFilter::Info,
            Self::Debug => log::LevelFilter::Debug,
            Self::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("output")
}

fn default_extensions() -> Vec<String> {
    vec!["srt".to_string()]
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from a JSON file, falling back to defaults when the file does not exist
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!("Config file not found at '{}', using defaults", path.display());
            return Ok(Self::default());
        }

        let file = File::open(path)
            .with_context(|| format!("Failed to open config file: {}", path.display()))?;
        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<(), AppError> {
        if self.output_dir.as_os_str().is_empty() {
            return Err(AppError::Config("Output directory must not be empty".to_string()));
        }

        if self.extensions.is_empty() {
            return Err(AppError::Config("At least one subtitle file extension is required".to_string()));
        }

        if let Some(ext) = self.extensions.iter().find(|ext| ext.trim_start_matches('.').trim().is_empty()) {
            return Err(AppError::Config(format!("Invalid subtitle file extension: '{}'", ext)));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            output_dir: default_output_dir(),
            extensions: default_extensions(),
            recursive: default_true(),
            show_captions: false,
            log_level: LogLevel::default(),
        }
    }
}
