//! Shared types, error model, and configuration for ghdiscuss.
//!
//! This crate is the foundation depended on by all other ghdiscuss crates.
//! It provides:
//! - [`GhDiscussError`] — the unified error type
//! - Domain types ([`Report`], [`Topic`], [`Categories`], [`Section`])
//! - Configuration ([`AppConfig`], config loading)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    AppConfig, CONFIG_FILE_NAME, DEFAULT_JSON_FILE, DEFAULT_MARKDOWN_FILE, OutputConfig,
    ReportConfig, config_dir, format_date, load_config, load_config_from, resolve_config_path,
    validate_date_format,
};
pub use error::{GhDiscussError, Result};
pub use types::{
    CATEGORY_COUNT, Categories, CategoryKind, Pair, Report, Section, SectionBody, Topic,
};
