//! Application settings management

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::summarizer::DEFAULT_LANGUAGE;
use crate::APP_NAME;

/// Main application settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// General settings
    #[serde(default)]
    pub general: GeneralSettings,

    /// Summary defaults
    #[serde(default)]
    pub summary: SummarySettings,

    /// Folder batch mode
    #[serde(default)]
    pub batch: BatchSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralSettings {
    /// Data directory, holds the log files
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarySettings {
    /// Number of sentences in a summary
    #[serde(default = "default_sentences")]
    pub sentences: usize,

    /// Language for sentence splitting and stopwords
    #[serde(default = "default_language")]
    pub language: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchSettings {
    /// Folder scanned for .docx transcripts
    #[serde(default = "default_input_dir")]
    pub input_dir: PathBuf,

    /// Folder receiving `<name>_summary.docx` files
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

// Default value functions

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", APP_NAME, APP_NAME)
}

fn default_data_dir() -> PathBuf {
    project_dirs()
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("~/.local/share/recap"))
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_sentences() -> usize {
    3
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

fn default_input_dir() -> PathBuf {
    PathBuf::from("data").join("input")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("data").join("output")
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

impl Default for SummarySettings {
    fn default() -> Self {
        Self {
            sentences: default_sentences(),
            language: default_language(),
        }
    }
}

impl Default for BatchSettings {
    fn default() -> Self {
        Self {
            input_dir: default_input_dir(),
            output_dir: default_output_dir(),
        }
    }
}

impl Settings {
    /// Load settings from the configuration file, or defaults when it is missing.
    ///
    /// Runs before logging is set up, so nothing is logged here; call
    /// [`Settings::apply_env_overrides`] once the subscriber is installed.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Parse a specific configuration file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(settings)
    }

    /// Apply `RECAP_SENTENCES` and `RECAP_LANGUAGE`, warning about invalid values.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(value) = std::env::var("RECAP_SENTENCES") {
            match value.trim().parse::<usize>() {
                Ok(sentences) => self.summary.sentences = sentences,
                Err(_) => tracing::warn!("Ignoring invalid RECAP_SENTENCES value '{}'", value),
            }
        }

        if let Ok(language) = std::env::var("RECAP_LANGUAGE") {
            if !language.trim().is_empty() {
                self.summary.language = language.trim().to_string();
            }
        }
    }

    /// Get the path to the configuration file
    pub fn config_path() -> Result<PathBuf> {
        let dirs = project_dirs().context("Could not determine config directory")?;

        let config_dir = dirs.config_dir();
        Ok(config_dir.join("config.toml"))
    }

    /// Write default configuration to a file
    pub fn write_default(path: &Path) -> Result<()> {
        let settings = Self::default();
        let content = toml::to_string_pretty(&settings)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Directory holding the rotating log files
    pub fn log_dir(&self) -> PathBuf {
        self.general.data_dir.join("logs")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn defaults_match_cli_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.summary.sentences, 3);
        assert_eq!(settings.summary.language, "english");
        assert_eq!(settings.batch.input_dir, PathBuf::from("data").join("input"));
        assert_eq!(settings.batch.output_dir, PathBuf::from("data").join("output"));
    }

    #[test]
    fn partial_file_keeps_other_defaults() -> Result<()> {
        let tmp = tempdir()?;
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "[summary]\nsentences = 5\n")?;

        let settings = Settings::load_from(&path)?;
        assert_eq!(settings.summary.sentences, 5);
        assert_eq!(settings.summary.language, "english");
        assert_eq!(settings.general.log_level, "info");
        Ok(())
    }

    #[test]
    fn written_default_parses_back() -> Result<()> {
        let tmp = tempdir()?;
        let path = tmp.path().join("nested").join("config.toml");
        Settings::write_default(&path)?;

        let settings = Settings::load_from(&path)?;
        assert_eq!(settings.summary.sentences, 3);
        assert!(std::fs::read_to_string(&path)?.contains("[batch]"));
        Ok(())
    }

    #[test]
    fn invalid_file_reports_path() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "summary = [").unwrap();

        let err = Settings::load_from(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse config file"));
    }
}
