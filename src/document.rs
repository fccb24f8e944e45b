/// A Jira description as an ordered sequence of lines.
///
/// Line order is significant: list nesting, code fences and table rows all
/// depend on it. Rules either rewrite lines in place or replace the whole
/// sequence after working on the joined text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkupDocument {
    lines: Vec<String>,
}

impl MarkupDocument {
    /// Split a description on `\n`. An empty description yields one empty line.
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text.split('\n').map(str::to_string).collect(),
        }
    }

    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Join lines back into a description with `\n`.
    pub fn to_text(&self) -> String {
        self.lines.join("\n")
    }

    /// Rewrite every line in place.
    pub(crate) fn map_lines(&mut self, rule: impl Fn(&str) -> String) {
        for line in &mut self.lines {
            *line = rule(line);
        }
    }

    /// Rewrite the joined text and re-split it into lines.
    pub(crate) fn map_text(&mut self, rule: impl Fn(&str) -> String) {
        let rewritten = rule(&self.to_text());
        *self = Self::from_text(&rewritten);
    }
}

impl From<Vec<String>> for MarkupDocument {
    fn from(lines: Vec<String>) -> Self {
        Self { lines }
    }
}

impl From<&str> for MarkupDocument {
    fn from(text: &str) -> Self {
        Self::from_text(text)
    }
}
