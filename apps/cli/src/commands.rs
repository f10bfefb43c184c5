//! CLI definition, tracing setup, and the report command.

use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::Parser;
use color_eyre::eyre::Result;
use ghdiscuss_core::assembler::{ArtifactMeta, RenderedReport};
use ghdiscuss_core::builder::ReportOptions;
use ghdiscuss_core::pipeline::{GenerateConfig, GenerateResult, ProgressReporter};
use ghdiscuss_shared::load_config;
use tracing::{debug, info};

/// Width of the `=` rulers framing the echoed report.
const RULER_WIDTH: usize = 80;

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// ghdiscuss — analyze trending GitHub discussions from four angles.
#[derive(Parser)]
#[command(
    name = "ghdiscuss",
    version,
    about = "Write the GitHub discussion analysis report as Markdown and JSON.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Directory to write the report files into (defaults to the config value, then `.`).
    #[arg(short, long)]
    pub out_dir: Option<PathBuf>,

    /// Report date as YYYY-MM-DD (defaults to today, local time).
    #[arg(long, env = "GHDISCUSS_REPORT_DATE")]
    pub date: Option<NaiveDate>,

    /// Config file (defaults to ./ghdiscuss.toml, then ~/.ghdiscuss/ghdiscuss.toml).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Do not echo the Markdown report to stdout.
    #[arg(short, long)]
    pub quiet: bool,

    /// Log format: text (default) or json.
    #[arg(long, default_value = "text")]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags. Logs go to stderr.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "ghdiscuss=info",
        1 => "ghdiscuss=debug",
        _ => "ghdiscuss=trace",
    };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .with_target(false)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command
// ---------------------------------------------------------------------------

/// Resolve configuration, run the pipeline, print the summary.
pub(crate) fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;

    let mut output = config.output.clone();
    if let Some(dir) = cli.out_dir {
        output.dir = dir;
    }

    let date = cli.date.unwrap_or_else(|| Local::now().date_naive());
    debug!(%date, dir = %output.dir.display(), "resolved run settings");

    let generate_config = GenerateConfig {
        report: ReportOptions {
            title: config.report.title.clone(),
            date,
            date_format: config.report.date_format.clone(),
        },
        output,
    };

    info!("generating discussion analysis report");

    let reporter = CliProgress {
        echo: config.report.echo_markdown && !cli.quiet,
    };
    ghdiscuss_core::pipeline::generate(&generate_config, &reporter)?;

    Ok(())
}

// ---------------------------------------------------------------------------
// CLI progress reporter
// ---------------------------------------------------------------------------

/// Echoes the rendered report and prints the final summary to stdout.
struct CliProgress {
    echo: bool,
}

impl ProgressReporter for CliProgress {
    fn phase(&self, name: &str) {
        debug!(phase = name, "pipeline phase");
    }

    fn rendered(&self, rendered: &RenderedReport) {
        if !self.echo {
            return;
        }
        let ruler = "=".repeat(RULER_WIDTH);
        println!("{ruler}");
        print!("{}", rendered.markdown);
        println!("{ruler}");
    }

    fn done(&self, result: &GenerateResult) {
        println!();
        println!("  Report generated!");
        println!("  Topics:   {}", result.report.topic_names().join(", "));
        println!("  Markdown: {}", describe(&result.written.markdown));
        println!("  JSON:     {}", describe(&result.written.json));
        println!("  Time:     {:.1}s", result.elapsed.as_secs_f64());
        println!();
    }
}

fn describe(meta: &ArtifactMeta) -> String {
    format!(
        "{} ({} bytes, sha256 {})",
        meta.path.display(),
        meta.size_bytes,
        &meta.sha256[..12]
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_arguments_is_valid() {
        let cli = Cli::try_parse_from(["ghdiscuss"]).unwrap();
        assert!(cli.out_dir.is_none());
        assert!(!cli.quiet);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn date_flag_parses_iso_date() {
        let cli = Cli::try_parse_from(["ghdiscuss", "--date", "2026-10-19"]).unwrap();
        assert_eq!(cli.date, NaiveDate::from_ymd_opt(2026, 10, 19));
    }

    #[test]
    fn bad_date_rejected() {
        assert!(Cli::try_parse_from(["ghdiscuss", "--date", "19/10/2026"]).is_err());
    }
}
