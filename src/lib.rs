mod block;
mod config;
mod document;
mod html;
mod inline;
mod issue;
mod pipeline;

pub use config::{Config, ConfigError, ConverterConfig, IssueConfig, PreviewConfig};
pub use document::MarkupDocument;
pub use html::markdown_to_html;
pub use issue::{IssueDraft, issue_body};
pub use pipeline::{Dialect, ParseDialectError, Pipeline, Rule, Stage};

/// Convert Jira description lines to Markdown lines using the legacy rule chain.
pub fn jira_lines_to_markdown(lines: Vec<String>) -> Vec<String> {
    Pipeline::default()
        .run(MarkupDocument::from(lines))
        .into_lines()
}

/// Convert a Jira description to Markdown using the legacy rule chain.
pub fn jira_to_markdown(jira: &str) -> String {
    convert_with_pipeline(jira, &Pipeline::default())
}

/// Convert a Jira description to Markdown with custom config.
pub fn jira_to_markdown_with_config(jira: &str, config: &Config) -> String {
    convert_with_pipeline(jira, &Pipeline::new(config.converter.dialect))
}

pub(crate) fn convert_with_pipeline(jira: &str, pipeline: &Pipeline) -> String {
    pipeline.run(MarkupDocument::from_text(jira)).to_text()
}
