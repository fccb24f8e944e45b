use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

use crate::block;
use crate::document::MarkupDocument;
use crate::inline;

/// A single rewrite step.
#[derive(Clone, Copy)]
pub enum Rule {
    /// Rewrites each line on its own; the line count is unchanged.
    Line(fn(&str) -> String),
    /// Rewrites the `\n`-joined document, which is then split again.
    Document(fn(&str) -> String),
}

#[derive(Clone, Copy)]
pub struct Stage {
    pub name: &'static str,
    pub rule: Rule,
}

impl Stage {
    const fn line(name: &'static str, rule: fn(&str) -> String) -> Self {
        Self {
            name,
            rule: Rule::Line(rule),
        }
    }

    const fn document(name: &'static str, rule: fn(&str) -> String) -> Self {
        Self {
            name,
            rule: Rule::Document(rule),
        }
    }

    fn apply(&self, doc: &mut MarkupDocument) {
        match self.rule {
            Rule::Line(rule) => doc.map_lines(rule),
            Rule::Document(rule) => doc.map_text(rule),
        }
    }
}

impl fmt::Debug for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.rule {
            Rule::Line(_) => "line",
            Rule::Document(_) => "document",
        };
        f.debug_struct("Stage")
            .field("name", &self.name)
            .field("kind", &kind)
            .finish()
    }
}

/// Which rule chain to run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// The rule chain existing migrations were produced with, quirks included.
    #[default]
    Legacy,
    /// Converts header rows anywhere in the document, turns panels into
    /// tables and strips indentation in front of table rows.
    Corrected,
}

#[derive(Debug, Error)]
#[error("unknown dialect {0:?}, expected \"legacy\" or \"corrected\"")]
pub struct ParseDialectError(String);

impl FromStr for Dialect {
    type Err = ParseDialectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "legacy" => Ok(Self::Legacy),
            "corrected" => Ok(Self::Corrected),
            _ => Err(ParseDialectError(s.to_string())),
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Legacy => f.write_str("legacy"),
            Self::Corrected => f.write_str("corrected"),
        }
    }
}

const LEGACY: &[Stage] = &[
    Stage::line("bullet_list", block::bullet_list),
    Stage::line("numbered_list", block::numbered_list),
    Stage::line("header", block::header),
    Stage::document("table_header", block::table_header),
    Stage::document("code_block", block::code_block),
    Stage::line("inline_styles", inline::inline_styles),
];

const CORRECTED: &[Stage] = &[
    Stage::line("bullet_list", block::bullet_list),
    Stage::line("numbered_list", block::numbered_list),
    Stage::line("header", block::header),
    Stage::document("code_block", block::code_block),
    Stage::document("panel_to_table", block::panel_to_table),
    Stage::line("inline_styles", inline::inline_styles),
    // After inline styles, so separator rows are not read as strikethrough
    Stage::document("table_header_lines", block::table_header_lines),
    Stage::line("table_indent", block::table_indent),
];

/// An ordered chain of stages turning Jira markup into Markdown.
#[derive(Debug, Clone)]
pub struct Pipeline {
    stages: &'static [Stage],
}

impl Pipeline {
    pub fn new(dialect: Dialect) -> Self {
        let stages = match dialect {
            Dialect::Legacy => LEGACY,
            Dialect::Corrected => CORRECTED,
        };
        Self { stages }
    }

    pub fn stages(&self) -> &[Stage] {
        self.stages
    }

    pub fn run(&self, mut doc: MarkupDocument) -> MarkupDocument {
        for stage in self.stages {
            let before = doc.len();
            stage.apply(&mut doc);
            tracing::debug!(
                stage = stage.name,
                lines_in = before,
                lines_out = doc.len(),
                "stage applied"
            );
        }
        doc
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(Dialect::default())
    }
}
