//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → CLI flags.
//!
//! There is no implicit config location. A file is only read when the user
//! passes `--config PATH`, so a bare invocation touches nothing but stdin and
//! stdout.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use simplelog::LevelFilter;
use thiserror::Error;

use crate::Layout;
use crate::core::parser::ParseOptions;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TimelineConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub horizontal: HorizontalConfig,
    #[serde(default)]
    pub vertical: VerticalConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub log_level: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct HorizontalConfig {
    pub strip_tag_delimiters: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct VerticalConfig {
    pub strip_tag_delimiters: Option<bool>,
    pub total_width: Option<usize>,
    pub line_prefix: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Warn;
/// Accepted by the vertical renderer but never used for layout.
pub const DEFAULT_TOTAL_WIDTH: usize = 76;
pub const DEFAULT_HORIZONTAL_STRIP_TAGS: bool = false;
pub const DEFAULT_VERTICAL_STRIP_TAGS: bool = true;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub layout: Layout,
    pub log_level: LevelFilter,
    pub parse: ParseOptions,
    pub total_width: usize,
    pub line_prefix: String,
}

/// Values given on the command line; `None` means "not specified".
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub log_level: Option<String>,
    pub line_prefix: Option<String>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O error for {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("unknown log level {0:?} (expected off, error, warn, info, debug or trace)")]
    LogLevel(String),
}

// ============================================================================
// Loading
// ============================================================================

/// Load config from `path`. A malformed file is an error, not a fallback.
///
/// Runs before the logger exists, so it logs nothing itself.
pub fn load_config(path: &Path) -> Result<TimelineConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(toml::from_str(&contents)?)
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config for one layout by collapsing: defaults → config file → CLI.
pub fn resolve(
    config: &TimelineConfig,
    layout: Layout,
    cli: &CliOverrides,
) -> Result<ResolvedConfig, ConfigError> {
    // Log level: CLI → config → default
    let log_level = match cli
        .log_level
        .as_deref()
        .or(config.general.log_level.as_deref())
    {
        Some(name) => {
            LevelFilter::from_str(name).map_err(|_| ConfigError::LogLevel(name.to_string()))?
        }
        None => DEFAULT_LOG_LEVEL,
    };

    // Tag delimiters are a per-layout setting
    let strip_tag_delimiters = match layout {
        Layout::Horizontal => config
            .horizontal
            .strip_tag_delimiters
            .unwrap_or(DEFAULT_HORIZONTAL_STRIP_TAGS),
        Layout::Vertical => config
            .vertical
            .strip_tag_delimiters
            .unwrap_or(DEFAULT_VERTICAL_STRIP_TAGS),
    };

    // Prefix: CLI → config → empty
    let line_prefix = cli
        .line_prefix
        .clone()
        .or_else(|| config.vertical.line_prefix.clone())
        .unwrap_or_default();

    Ok(ResolvedConfig {
        layout,
        log_level,
        parse: ParseOptions {
            strip_tag_delimiters,
        },
        total_width: config.vertical.total_width.unwrap_or(DEFAULT_TOTAL_WIDTH),
        line_prefix,
    })
}
