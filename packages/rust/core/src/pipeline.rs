//! End-to-end `generate` pipeline: catalog → report → Markdown + JSON → disk.

use std::time::{Duration, Instant};

use tracing::{info, instrument};

use ghdiscuss_shared::{OutputConfig, Report, Result};

use crate::assembler::{self, RenderedReport, WriteResult};
use crate::builder::{self, ReportOptions};

/// Configuration for the `generate` pipeline.
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    pub report: ReportOptions,
    pub output: OutputConfig,
}

/// Result of the `generate` pipeline.
#[derive(Debug)]
pub struct GenerateResult {
    pub report: Report,
    pub written: WriteResult,
    pub elapsed: Duration,
}

/// Progress callback for reporting pipeline status.
pub trait ProgressReporter {
    /// Called when entering a new phase.
    fn phase(&self, name: &str);
    /// Called once the report is rendered, before anything is written.
    fn rendered(&self, rendered: &RenderedReport);
    /// Called when the pipeline completes.
    fn done(&self, result: &GenerateResult);
}

/// No-op progress reporter for headless/test usage.
pub struct SilentProgress;

impl ProgressReporter for SilentProgress {
    fn phase(&self, _name: &str) {}
    fn rendered(&self, _rendered: &RenderedReport) {}
    fn done(&self, _result: &GenerateResult) {}
}

/// Run the full `generate` pipeline.
///
/// 1. Build and validate the report from the built-in catalog
/// 2. Render Markdown and JSON
/// 3. Write both files into the output directory
#[instrument(skip_all, fields(dir = %config.output.dir.display()))]
pub fn generate(config: &GenerateConfig, progress: &dyn ProgressReporter) -> Result<GenerateResult> {
    let start = Instant::now();

    progress.phase("Building report");
    let report = builder::build_report(&config.report)?;

    progress.phase("Rendering");
    let rendered = assembler::render(&report)?;
    progress.rendered(&rendered);

    progress.phase("Writing files");
    let written = assembler::write_rendered(&rendered, &config.output)?;

    let result = GenerateResult {
        report,
        written,
        elapsed: start.elapsed(),
    };

    info!(
        topics = result.report.topics.len(),
        elapsed_ms = result.elapsed.as_millis() as u64,
        "generate pipeline complete"
    );

    progress.done(&result);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use chrono::NaiveDate;

    use super::*;

    #[derive(Default)]
    struct RecordingProgress {
        events: RefCell<Vec<String>>,
    }

    impl ProgressReporter for RecordingProgress {
        fn phase(&self, name: &str) {
            self.events.borrow_mut().push(format!("phase:{name}"));
        }
        fn rendered(&self, rendered: &RenderedReport) {
            self.events
                .borrow_mut()
                .push(format!("rendered:{}", rendered.markdown.lines().count() > 0));
        }
        fn done(&self, result: &GenerateResult) {
            self.events
                .borrow_mut()
                .push(format!("done:{}", result.report.topics.len()));
        }
    }

    fn config(dir: &std::path::Path) -> GenerateConfig {
        GenerateConfig {
            report: ReportOptions {
                title: "Report".into(),
                date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
                date_format: "%Y-%m-%d".into(),
            },
            output: OutputConfig {
                dir: dir.to_path_buf(),
                ..OutputConfig::default()
            },
        }
    }

    #[test]
    fn generate_writes_and_reports_progress() {
        let tmp = tempfile::tempdir().unwrap();
        let progress = RecordingProgress::default();

        let result = generate(&config(tmp.path()), &progress).unwrap();

        assert!(result.written.markdown.path.exists());
        assert!(result.written.json.path.exists());
        assert_eq!(
            *progress.events.borrow(),
            vec![
                "phase:Building report",
                "phase:Rendering",
                "rendered:true",
                "phase:Writing files",
                "done:3",
            ]
        );
    }

    #[test]
    fn generate_fails_before_writing_on_bad_date_format() {
        let tmp = tempfile::tempdir().unwrap();
        let mut cfg = config(tmp.path());
        cfg.report.date_format = "%Q".into();

        assert!(generate(&cfg, &SilentProgress).is_err());
        assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 0);
    }
}
