//! Report pipeline for ghdiscuss.
//!
//! This crate ties together the built-in catalog, report building, and
//! Markdown/JSON output into the single `generate` workflow.

pub mod assembler;
pub mod builder;
pub mod catalog;
pub mod pipeline;
