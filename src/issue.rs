use crate::config::IssueConfig;
use crate::pipeline::Pipeline;

const TICKET_PLACEHOLDER: &str = "{{TICKET}}";

/// A GitHub issue built from one Jira issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueDraft {
    pub key: String,
    pub title: String,
    pub body: String,
}

impl IssueDraft {
    /// Convert the Jira description and append the footer for `key`.
    pub fn from_jira(
        key: &str,
        summary: &str,
        description: &str,
        pipeline: &Pipeline,
        config: &IssueConfig,
    ) -> Self {
        let markdown = crate::convert_with_pipeline(description, pipeline);
        Self {
            key: key.to_string(),
            title: summary.to_string(),
            body: issue_body(&markdown, key, config),
        }
    }

    /// The block printed instead of filing the issue on a dry run.
    pub fn dry_run_preview(&self) -> String {
        // One `=` per char, so the underline lines up under non-ASCII titles
        let underline = "=".repeat(self.title.chars().count());
        format!("------\n{}\n{}\n\n{}\n", self.title, underline, self.body)
    }
}

/// Markdown followed by a blank line and the footer for `key`.
pub fn issue_body(markdown: &str, key: &str, config: &IssueConfig) -> String {
    let footer = config.footer.replacen(TICKET_PLACEHOLDER, key, 1);
    format!("{markdown}\n\n{footer}")
}
