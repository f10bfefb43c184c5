//! Core domain types for discussion analysis reports.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{GhDiscussError, Result};

/// Number of analytical categories every topic carries.
pub const CATEGORY_COUNT: usize = 4;

// ---------------------------------------------------------------------------
// CategoryKind
// ---------------------------------------------------------------------------

/// One of the four fixed analytical lenses applied to each topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryKind {
    /// Core problem, solution approach, use cases.
    ProblemDefinition,
    /// System architecture, tech stack, core components.
    Architecture,
    /// End-to-end flow, async processing, data structures.
    DataFlow,
    /// Documentation structure, philosophy, community support.
    Documentation,
}

impl CategoryKind {
    /// All categories in report order.
    pub const ALL: [CategoryKind; CATEGORY_COUNT] = [
        CategoryKind::ProblemDefinition,
        CategoryKind::Architecture,
        CategoryKind::DataFlow,
        CategoryKind::Documentation,
    ];

    /// JSON key under `categories`.
    pub fn key(self) -> &'static str {
        match self {
            Self::ProblemDefinition => "problem_definition",
            Self::Architecture => "architecture",
            Self::DataFlow => "data_flow",
            Self::Documentation => "documentation",
        }
    }

    /// Markdown heading text (hashtag style).
    pub fn heading(self) -> &'static str {
        match self {
            Self::ProblemDefinition => "#문제정의",
            Self::Architecture => "#아키텍처_툴",
            Self::DataFlow => "#데이터플로우",
            Self::Documentation => "#문서화",
        }
    }
}

impl std::fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

// ---------------------------------------------------------------------------
// Section
// ---------------------------------------------------------------------------

/// A `key: value` line, used for tech stacks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pair {
    pub key: String,
    pub value: String,
}

/// Body of a section. Serialized as `{"kind": ..., "content": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "content", rename_all = "snake_case")]
pub enum SectionBody {
    /// A single paragraph.
    Text(String),
    /// Ordered bullet list.
    Bullets(Vec<String>),
    /// Ordered `key: value` list.
    Pairs(Vec<Pair>),
    /// Preformatted block (diagrams, flows).
    Code(String),
}

impl SectionBody {
    /// True when the body carries no visible content.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(s) | Self::Code(s) => s.trim().is_empty(),
            Self::Bullets(items) => items.iter().all(|i| i.trim().is_empty()),
            Self::Pairs(pairs) => {
                pairs.is_empty()
                    || pairs
                        .iter()
                        .any(|p| p.key.trim().is_empty() || p.value.trim().is_empty())
            }
        }
    }
}

/// A titled block of text inside a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    pub body: SectionBody,
}

impl Section {
    pub fn text(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: SectionBody::Text(content.into()),
        }
    }

    pub fn bullets<I, S>(title: impl Into<String>, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.into(),
            body: SectionBody::Bullets(items.into_iter().map(Into::into).collect()),
        }
    }

    pub fn pairs<I, K, V>(title: impl Into<String>, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            title: title.into(),
            body: SectionBody::Pairs(
                pairs
                    .into_iter()
                    .map(|(k, v)| Pair {
                        key: k.into(),
                        value: v.into(),
                    })
                    .collect(),
            ),
        }
    }

    pub fn code(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: SectionBody::Code(content.into()),
        }
    }
}

// ---------------------------------------------------------------------------
// Topic
// ---------------------------------------------------------------------------

/// The four category blocks of a topic, each an ordered list of sections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Categories {
    pub problem_definition: Vec<Section>,
    pub architecture: Vec<Section>,
    pub data_flow: Vec<Section>,
    pub documentation: Vec<Section>,
}

impl Categories {
    /// Sections of a single category.
    pub fn get(&self, kind: CategoryKind) -> &[Section] {
        match kind {
            CategoryKind::ProblemDefinition => &self.problem_definition,
            CategoryKind::Architecture => &self.architecture,
            CategoryKind::DataFlow => &self.data_flow,
            CategoryKind::Documentation => &self.documentation,
        }
    }

    /// Iterate categories in report order.
    pub fn iter(&self) -> impl Iterator<Item = (CategoryKind, &[Section])> {
        CategoryKind::ALL.into_iter().map(move |k| (k, self.get(k)))
    }
}

/// One analyzed GitHub discussion subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    /// Project name (e.g. `React 19`).
    pub name: String,
    /// GitHub star count at analysis time.
    pub stars: u64,
    /// One-line project category label.
    pub category: String,
    pub categories: Categories,
}

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

/// A complete analysis report: ordered topics plus the generation date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub title: String,
    /// Generation date, already formatted for display.
    pub report_date: String,
    pub topics: Vec<Topic>,
}

impl Report {
    /// Topic names in report order.
    pub fn topic_names(&self) -> Vec<&str> {
        self.topics.iter().map(|t| t.name.as_str()).collect()
    }

    /// Check the structural invariants of the report.
    ///
    /// - at least one topic
    /// - topic names are non-empty and unique
    /// - every topic has all four categories populated
    /// - every section has a title and a non-empty body
    pub fn validate(&self) -> Result<()> {
        if self.topics.is_empty() {
            return Err(GhDiscussError::validation("report has no topics"));
        }

        let mut seen = HashSet::new();
        for topic in &self.topics {
            if topic.name.trim().is_empty() {
                return Err(GhDiscussError::validation("topic with empty name"));
            }
            if !seen.insert(topic.name.as_str()) {
                return Err(GhDiscussError::validation(format!(
                    "duplicate topic '{}'",
                    topic.name
                )));
            }

            for (kind, sections) in topic.categories.iter() {
                if sections.is_empty() {
                    return Err(GhDiscussError::validation(format!(
                        "topic '{}' has no {kind} sections",
                        topic.name
                    )));
                }
                for section in sections {
                    if section.title.trim().is_empty() || section.body.is_empty() {
                        return Err(GhDiscussError::validation(format!(
                            "topic '{}' has an empty section in {kind}",
                            topic.name
                        )));
                    }
                }
            }
        }

        Ok(())
    }
}
