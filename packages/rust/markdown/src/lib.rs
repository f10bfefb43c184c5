//! Markdown rendering for analysis reports.
//!
//! Produces the human-readable report: a single `#` title, a metadata
//! block quote, then one `##` heading per topic with one `###` heading per
//! category. Rendering is pure; writing to disk happens in `ghdiscuss-core`.

mod blocks;

use tracing::{debug, instrument};

use ghdiscuss_shared::{Report, Topic};

pub use blocks::format_thousands;

/// Horizontal rule separating the header and each topic.
const RULE: &str = "---\n\n";

/// Render a full report to Markdown.
#[instrument(skip_all, fields(topics = report.topics.len()))]
pub fn render(report: &Report) -> String {
    let mut out = String::new();

    push_header(&mut out, report);

    for (index, topic) in report.topics.iter().enumerate() {
        push_topic(&mut out, index + 1, topic);
    }

    debug!(len = out.len(), "markdown rendered");
    out
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn push_header(out: &mut String, report: &Report) {
    out.push_str(&format!("# {}\n\n", report.title));
    out.push_str(&format!("> 생성일: {}\n", report.report_date));
    out.push_str(&format!("> 분석 대상: {}\n\n", report.topic_names().join(", ")));
    out.push_str(RULE);
}

fn push_topic(out: &mut String, number: usize, topic: &Topic) {
    out.push_str(&format!("## {number}. {}\n\n", topic.name));
    out.push_str(&format!("**카테고리**: {}\n", topic.category));
    out.push_str(&format!("**Stars**: {}\n\n", format_thousands(topic.stars)));

    for (kind, sections) in topic.categories.iter() {
        out.push_str(&format!("### {}\n\n", kind.heading()));
        for section in sections {
            blocks::push_section(out, section);
        }
    }

    out.push_str(RULE);
}
