//! Application configuration for ghdiscuss.
//!
//! The config file `ghdiscuss.toml` is looked up in the working directory,
//! then under `~/.ghdiscuss/`. CLI flags override config file values, which
//! override defaults.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use crate::error::{GhDiscussError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "ghdiscuss.toml";

/// Default config directory name under the user's home.
const CONFIG_DIR_NAME: &str = ".ghdiscuss";

/// Default Markdown report file name.
pub const DEFAULT_MARKDOWN_FILE: &str = "github_discussion_analysis.md";

/// Default JSON data file name.
pub const DEFAULT_JSON_FILE: &str = "analysis_data.json";

// ---------------------------------------------------------------------------
// Config structs (matching ghdiscuss.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Where and under which names the report files are written.
    #[serde(default)]
    pub output: OutputConfig,

    /// Report presentation settings.
    #[serde(default)]
    pub report: ReportConfig,
}

/// `[output]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output directory, relative to the working directory.
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,

    #[serde(default = "default_markdown_file")]
    pub markdown_file: String,

    #[serde(default = "default_json_file")]
    pub json_file: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            markdown_file: default_markdown_file(),
            json_file: default_json_file(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}
fn default_markdown_file() -> String {
    DEFAULT_MARKDOWN_FILE.into()
}
fn default_json_file() -> String {
    DEFAULT_JSON_FILE.into()
}

/// `[report]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Document title (the single `#` heading).
    #[serde(default = "default_title")]
    pub title: String,

    /// `strftime` pattern for the report date.
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Echo the rendered Markdown to stdout before writing.
    #[serde(default = "default_true")]
    pub echo_markdown: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            date_format: default_date_format(),
            echo_markdown: true,
        }
    }
}

fn default_title() -> String {
    "GitHub 토론 분석 리포트".into()
}
fn default_date_format() -> String {
    "%Y년 %m월 %d일".into()
}
fn default_true() -> bool {
    true
}

impl AppConfig {
    /// Reject configs that would produce unusable or colliding output.
    pub fn validate(&self) -> Result<()> {
        for (field, name) in [
            ("markdown_file", &self.output.markdown_file),
            ("json_file", &self.output.json_file),
        ] {
            if name.trim().is_empty() {
                return Err(GhDiscussError::config(format!("output.{field} is empty")));
            }
            if name.contains(['/', '\\']) {
                return Err(GhDiscussError::config(format!(
                    "output.{field} must be a bare file name, got '{name}'"
                )));
            }
        }

        if self.output.markdown_file == self.output.json_file {
            return Err(GhDiscussError::config(
                "output.markdown_file and output.json_file must differ",
            ));
        }

        validate_date_format(&self.report.date_format)
    }
}

/// Check that `chrono` can render a calendar date with a `strftime` pattern.
///
/// Patterns that need time-of-day or offset fields (`%H`, `%z`, ...) parse
/// fine but cannot be rendered from a bare date, so they are rejected too.
pub fn validate_date_format(format: &str) -> Result<()> {
    if format.trim().is_empty() {
        return Err(GhDiscussError::config("report.date_format is empty"));
    }
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(GhDiscussError::config(format!(
            "report.date_format '{format}' is not a valid strftime pattern"
        )));
    }
    let sample = NaiveDate::from_ymd_opt(2000, 1, 1)
        .ok_or_else(|| GhDiscussError::config("invalid sample date"))?;
    format_date(sample, format).map(|_| ())
}

/// Render a date with a `strftime` pattern without panicking on fields a
/// `NaiveDate` does not carry.
pub fn format_date(date: NaiveDate, format: &str) -> Result<String> {
    let mut out = String::new();
    write!(out, "{}", date.format(format)).map_err(|_| {
        GhDiscussError::config(format!(
            "report.date_format '{format}' needs fields a calendar date does not have"
        ))
    })?;
    Ok(out)
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Get the path to the user config directory (`~/.ghdiscuss/`).
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| GhDiscussError::config("could not determine home directory"))?;
    Ok(home.join(CONFIG_DIR_NAME))
}

/// Resolve which config file applies, if any.
///
/// An explicit path must exist. Otherwise `./ghdiscuss.toml` wins over
/// `~/.ghdiscuss/ghdiscuss.toml`.
pub fn resolve_config_path(explicit: Option<&Path>) -> Result<Option<PathBuf>> {
    if let Some(path) = explicit {
        if !path.is_file() {
            return Err(GhDiscussError::config(format!(
                "config file not found: {}",
                path.display()
            )));
        }
        return Ok(Some(path.to_path_buf()));
    }

    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.is_file() {
        return Ok(Some(local));
    }

    // A missing home directory only means there is no user config.
    if let Ok(dir) = config_dir() {
        let user = dir.join(CONFIG_FILE_NAME);
        if user.is_file() {
            return Ok(Some(user));
        }
    }

    Ok(None)
}

/// Load and validate the application config. Returns defaults if no file exists.
pub fn load_config(explicit: Option<&Path>) -> Result<AppConfig> {
    let config = match resolve_config_path(explicit)? {
        Some(path) => load_config_from(&path)?,
        None => {
            tracing::debug!("no config file found, using defaults");
            AppConfig::default()
        }
    };

    config.validate()?;
    Ok(config)
}

/// Load the application config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| GhDiscussError::io(path, e))?;

    let config = toml::from_str(&content).map_err(|e| {
        GhDiscussError::config(format!("failed to parse {}: {e}", path.display()))
    })?;
    tracing::debug!(path = %path.display(), "loaded config file");

    Ok(config)
}
