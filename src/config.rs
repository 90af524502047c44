// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration file support for linippet
//!
//! Loads configuration from `$LINIPPET_CONFIG` or ~/.config/linippet/config.toml

use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const CONFIG_ENV: &str = "LINIPPET_CONFIG";
pub const DATA_ENV: &str = "LINIPPET_DATA";
pub const DEFAULT_DIR: &str = ".linippet";
pub const DEFAULT_DATA_FILE_NAME: &str = "linippet.json";

const DEFAULT_MAX_RESULTS: usize = 20;
const DEFAULT_PROMPT: &str = "> ";

/// Output format for results (mirrored from cli for library use)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfigOutputFormat {
    #[default]
    Text,
    Json,
}

/// Configuration loaded from the user config file
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Snippet file location (overridden by `LINIPPET_DATA` / `--data`)
    pub data_path: Option<PathBuf>,
    /// Maximum number of results printed by `search`
    pub max_results: Option<usize>,
    /// Default output format (text or json)
    pub default_format: Option<String>,
    /// Prompt shown in the interactive picker
    pub prompt: Option<String>,
}

impl Config {
    /// Load configuration from files
    ///
    /// Precedence (highest to lowest):
    /// 1. file named by `$LINIPPET_CONFIG`
    /// 2. ~/.config/linippet/config.toml
    pub fn load() -> Self {
        if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|v| !v.is_empty()) {
            if let Some(config) = Self::load_from_path(Path::new(&path)) {
                return config;
            }
        }

        if let Some(home) = dirs::home_dir() {
            let config_path = home.join(".config").join("linippet").join("config.toml");
            if let Some(config) = Self::load_from_path(&config_path) {
                return config;
            }
        }

        Self::default()
    }

    pub fn load_from_path(path: &Path) -> Option<Self> {
        let content = std::fs::read_to_string(path).ok()?;
        match toml::from_str(&content) {
            Ok(config) => {
                tracing::debug!(path = %path.display(), "loaded config");
                Some(config)
            }
            Err(e) => {
                tracing::warn!("Failed to parse {}: {}", path.display(), e);
                None
            }
        }
    }

    /// Get output format from config, parsing the string to ConfigOutputFormat
    pub fn output_format(&self) -> Option<ConfigOutputFormat> {
        self.default_format
            .as_ref()
            .and_then(|s| match s.to_lowercase().as_str() {
                "json" => Some(ConfigOutputFormat::Json),
                "text" => Some(ConfigOutputFormat::Text),
                _ => None,
            })
    }

    /// Merge CLI options with config (CLI wins)
    pub fn merge_max_results(&self, cli_value: Option<usize>) -> usize {
        cli_value
            .or(self.max_results)
            .unwrap_or(DEFAULT_MAX_RESULTS)
    }

    pub fn prompt(&self) -> &str {
        self.prompt.as_deref().unwrap_or(DEFAULT_PROMPT)
    }

    /// Resolve the snippet file: CLI/env value, then config, then ~/.linippet/linippet.json
    pub fn data_path(&self, cli_value: Option<&Path>) -> PathBuf {
        if let Some(path) = cli_value.filter(|p| !p.as_os_str().is_empty()) {
            return path.to_path_buf();
        }
        if let Some(path) = &self.data_path {
            return expand_home(path);
        }
        dirs::home_dir()
            .unwrap_or_default()
            .join(DEFAULT_DIR)
            .join(DEFAULT_DATA_FILE_NAME)
    }
}

fn expand_home(path: &Path) -> PathBuf {
    match (path.strip_prefix("~"), dirs::home_dir()) {
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path.to_path_buf(),
    }
}
