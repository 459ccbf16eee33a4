//! Configuration handling for the lexcloud CLI.
//!
//! TOML file in the platform config directory, every field defaulted, CLI
//! flags override file values. Render values outside the sidebar ranges are
//! rejected before a run starts.

use anyhow::{bail, Context};
use directories::ProjectDirs;
use lexcloud_core::{ExportFormat, RenderParameters, Rgb};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Stopword configuration
    #[serde(default)]
    pub stopwords: StopwordsConfig,

    /// Cloud rendering configuration
    #[serde(default)]
    pub render: RenderConfig,

    /// Export configuration
    #[serde(default)]
    pub export: ExportConfig,

    /// Display configuration
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Stopword-related configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StopwordsConfig {
    /// Use the built-in baseline list
    #[serde(default = "default_use_standard")]
    pub use_standard: bool,

    /// Additional stopwords
    #[serde(default)]
    pub additional: Vec<String>,
}

fn default_use_standard() -> bool {
    true
}

impl Default for StopwordsConfig {
    fn default() -> Self {
        Self {
            use_standard: default_use_standard(),
            additional: Vec::new(),
        }
    }
}

/// Render-related configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Canvas width in pixels (400-2000)
    #[serde(default = "default_width")]
    pub width: u32,

    /// Canvas height in pixels (200-2000)
    #[serde(default = "default_height")]
    pub height: u32,

    /// Background color, #RRGGBB
    #[serde(default = "default_background")]
    pub background: String,

    /// Contour color, #RRGGBB
    #[serde(default = "default_contour")]
    pub contour: String,

    /// Maximum words placed on the cloud (50-500)
    #[serde(default = "default_max_words")]
    pub max_words: usize,
}

fn default_width() -> u32 {
    800
}

fn default_height() -> u32 {
    600
}

fn default_background() -> String {
    "#FFFFFF".to_string()
}

fn default_contour() -> String {
    "#007bff".to_string()
}

fn default_max_words() -> usize {
    200
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            background: default_background(),
            contour: default_contour(),
            max_words: default_max_words(),
        }
    }
}

impl RenderConfig {
    /// Parse and range-check into the core parameter struct.
    pub fn to_parameters(&self) -> anyhow::Result<RenderParameters> {
        let background: Rgb = self
            .background
            .parse()
            .with_context(|| format!("bad background color {:?}", self.background))?;
        let contour: Rgb = self
            .contour
            .parse()
            .with_context(|| format!("bad contour color {:?}", self.contour))?;

        let params = RenderParameters {
            width: self.width,
            height: self.height,
            background,
            contour,
            max_words: self.max_words,
        };
        params.validate()?;
        Ok(params)
    }
}

/// Export-related configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Image format: png, jpeg, svg, or pdf
    #[serde(default = "default_format")]
    pub format: String,

    /// TTF/OTF used for raster exports (system fonts are probed if unset)
    pub font: Option<PathBuf>,
}

fn default_format() -> String {
    "png".to_string()
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            font: None,
        }
    }
}

impl ExportConfig {
    /// Parse the configured format token.
    pub fn to_format(&self) -> anyhow::Result<ExportFormat> {
        self.format
            .parse()
            .with_context(|| format!("bad export format {:?}", self.format))
    }
}

/// Display-related configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Rows of the frequency table shown by default
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

fn default_top_n() -> usize {
    20
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            top_n: default_top_n(),
        }
    }
}

impl Config {
    /// Load configuration from the default location, or defaults when no
    /// file exists.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration from a specific path, or the default location.
    pub fn load_from(path: Option<PathBuf>) -> anyhow::Result<Self> {
        let path = match path {
            Some(path) => {
                if !path.exists() {
                    bail!("config file not found: {}", path.display());
                }
                Some(path)
            }
            None => Self::config_path().filter(|p| p.exists()),
        };

        match path {
            Some(path) => {
                let raw = std::fs::read_to_string(&path)
                    .with_context(|| format!("failed to read {}", path.display()))?;
                toml::from_str(&raw)
                    .with_context(|| format!("failed to parse {}", path.display()))
            }
            None => Ok(Self::default()),
        }
    }

    /// The default config file path.
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        config_dir().map(|dir| dir.join("config.toml"))
    }

    /// A commented sample configuration file.
    #[must_use]
    pub fn sample_toml() -> String {
        let sample = Self::default();
        toml::to_string_pretty(&sample).unwrap_or_default()
    }
}

/// Get the config directory, honoring `LEXCLOUD_CONFIG_DIR`.
pub fn config_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var("LEXCLOUD_CONFIG_DIR") {
        return Some(PathBuf::from(dir));
    }

    ProjectDirs::from("", "", "lexcloud").map(|dirs| dirs.config_dir().to_path_buf())
}
