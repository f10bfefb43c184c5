//! Report builder.
//!
//! Turns the built-in catalog and a run date into a validated [`Report`].

use chrono::NaiveDate;
use tracing::{debug, instrument};

use ghdiscuss_shared::{Report, Result, Topic, format_date, validate_date_format};

use crate::catalog;

/// Inputs for [`build_report`].
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Document title.
    pub title: String,
    /// Calendar date the report is generated for.
    pub date: NaiveDate,
    /// `strftime` pattern used to display `date`.
    pub date_format: String,
}

/// Incrementally assemble a [`Report`], validating on [`build`](Self::build).
#[derive(Debug, Clone)]
pub struct ReportBuilder {
    title: String,
    report_date: String,
    topics: Vec<Topic>,
}

impl ReportBuilder {
    pub fn new(report_date: impl Into<String>) -> Self {
        Self {
            title: String::new(),
            report_date: report_date.into(),
            topics: Vec::new(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn topic(mut self, topic: Topic) -> Self {
        self.topics.push(topic);
        self
    }

    pub fn topics(mut self, topics: impl IntoIterator<Item = Topic>) -> Self {
        self.topics.extend(topics);
        self
    }

    /// Finish the report. Fails if any topic is missing a category.
    pub fn build(self) -> Result<Report> {
        let report = Report {
            title: self.title,
            report_date: self.report_date,
            topics: self.topics,
        };
        report.validate()?;
        Ok(report)
    }
}

/// Build the report from the embedded catalog.
#[instrument(skip_all, fields(date = %opts.date))]
pub fn build_report(opts: &ReportOptions) -> Result<Report> {
    let report_date = format_report_date(opts.date, &opts.date_format)?;

    let report = ReportBuilder::new(report_date)
        .title(opts.title.clone())
        .topics(catalog::builtin_topics())
        .build()?;

    debug!(
        topics = report.topics.len(),
        report_date = %report.report_date,
        "report built"
    );

    Ok(report)
}

/// Format a date with a `strftime` pattern, rejecting patterns chrono cannot render.
pub fn format_report_date(date: NaiveDate, format: &str) -> Result<String> {
    validate_date_format(format)?;
    format_date(date, format)
}
