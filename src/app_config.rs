use anyhow::{anyhow, Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::converter::ConversionOptions;
use crate::file_utils::FileManager;
use crate::styles::{DEFAULT_STYLE_SHEET, FALLBACK_STYLE_SHEET};

/// Application configuration module
/// This module handles loading, validating and saving the converter settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Merge two-line cues into a primary and a secondary event
    #[serde(default = "default_true")]
    pub bilingual: bool,

    /// The first line of a two-line cue is Chinese
    #[serde(default = "default_true")]
    pub cn_first: bool,

    /// File holding the ASS style sheet
    #[serde(default)]
    pub style_file: Option<PathBuf>,

    /// Inline ASS style sheet, takes precedence over `style_file`
    #[serde(default)]
    pub style_sheet: Option<String>,

    /// Directory for generated files; next to each source when unset
    #[serde(default)]
    pub output_dir: Option<PathBuf>,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
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
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load the configuration, writing a default one first if the file is missing
    pub fn load_or_create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if path.exists() {
            let content = FileManager::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            return Ok(config);
        }

        warn!("Config file not found at {:?}, creating default config.", path);
        let config = Config::default();
        config.save(path)?;
        Ok(config)
    }

    /// Write the configuration as pretty-printed JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)
            .context("Failed to serialize config to JSON")?;

        std::fs::write(path, json)
            .with_context(|| format!("Failed to write config to file: {:?}", path))
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.style_file.is_some() && self.style_sheet.is_some() {
            return Err(anyhow!("Only one of style_file and style_sheet may be set"));
        }

        if let Some(style_file) = &self.style_file {
            if !FileManager::file_exists(style_file) {
                return Err(anyhow!("Style file does not exist: {:?}", style_file));
            }
        }

        Ok(())
    }

    /// Conversion switches carried by this configuration
    pub fn conversion_options(&self) -> ConversionOptions {
        ConversionOptions {
            bilingual: self.bilingual,
            cn_first: self.cn_first,
        }
    }

    /// Effective style sheet text.
    ///
    /// Inline text wins over the style file; with neither configured the
    /// built-in default is used. Empty text is replaced by the fallback sheet.
    pub fn style_sheet_text(&self) -> Result<String> {
        let text = match (&self.style_sheet, &self.style_file) {
            (Some(inline), _) => inline.clone(),
            (None, Some(style_file)) => FileManager::read_to_string(style_file)?,
            (None, None) => DEFAULT_STYLE_SHEET.to_string(),
        };

        if text.trim().is_empty() {
            warn!("Style sheet is empty, using the built-in fallback styles");
            return Ok(FALLBACK_STYLE_SHEET.to_string());
        }

        Ok(text)
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            bilingual: true,
            cn_first: true,
            style_file: None,
            style_sheet: None,
            output_dir: None,
            log_level: LogLevel::default(),
        }
    }
}
