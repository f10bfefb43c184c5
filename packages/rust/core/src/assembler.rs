//! Report output assembler.
//!
//! Renders a [`Report`] to its Markdown and JSON forms and writes both files
//! into the output directory.

use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};
use tracing::{debug, info, instrument};

use ghdiscuss_shared::{GhDiscussError, OutputConfig, Report, Result};

/// Both serialized forms of a report, ready to be written.
#[derive(Debug, Clone)]
pub struct RenderedReport {
    pub markdown: String,
    pub json: String,
}

/// Metadata for a single written file.
#[derive(Debug, Clone)]
pub struct ArtifactMeta {
    pub filename: String,
    pub path: PathBuf,
    pub sha256: String,
    pub size_bytes: usize,
}

/// Output from a successful write.
#[derive(Debug, Clone)]
pub struct WriteResult {
    pub markdown: ArtifactMeta,
    pub json: ArtifactMeta,
}

/// Render a report to Markdown and JSON.
pub fn render(report: &Report) -> Result<RenderedReport> {
    Ok(RenderedReport {
        markdown: ghdiscuss_markdown::render(report),
        json: render_json(report)?,
    })
}

/// Serialize a report to pretty-printed JSON with a trailing newline.
///
/// Non-ASCII text is kept as-is rather than `\u` escaped.
pub fn render_json(report: &Report) -> Result<String> {
    let mut json = serde_json::to_string_pretty(report)?;
    json.push('\n');
    Ok(json)
}

/// Write already-rendered report files into `output.dir`.
///
/// The directory is created if missing. Each file is written atomically
/// (temp file, then rename).
#[instrument(skip_all, fields(dir = %output.dir.display()))]
pub fn write_rendered(rendered: &RenderedReport, output: &OutputConfig) -> Result<WriteResult> {
    std::fs::create_dir_all(&output.dir).map_err(|e| GhDiscussError::io(&output.dir, e))?;

    let markdown = write_artifact(&output.dir, &output.markdown_file, &rendered.markdown)?;
    let json = write_artifact(&output.dir, &output.json_file, &rendered.json)?;

    info!(
        markdown = %markdown.path.display(),
        json = %json.path.display(),
        "report files written"
    );

    Ok(WriteResult { markdown, json })
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn write_artifact(dir: &Path, filename: &str, content: &str) -> Result<ArtifactMeta> {
    let target = dir.join(filename);
    let temp = dir.join(format!(".{filename}.tmp"));

    if let Err(e) = std::fs::write(&temp, content) {
        let _ = std::fs::remove_file(&temp);
        return Err(GhDiscussError::io(&temp, e));
    }

    if let Err(e) = std::fs::rename(&temp, &target) {
        let _ = std::fs::remove_file(&temp);
        return Err(GhDiscussError::io(&target, e));
    }

    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    let hash = format!("{:x}", hasher.finalize());

    debug!(file = %filename, size = content.len(), sha256 = %hash, "wrote artifact");

    Ok(ArtifactMeta {
        filename: filename.to_string(),
        path: target,
        sha256: hash,
        size_bytes: content.len(),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
