//! Block-level rules: lists, headers, tables, code blocks and panels.
//!
//! Lists and headers rewrite one line at a time. Tables, code blocks and
//! panels work on the joined document text, since their spans cross lines.

use std::sync::LazyLock;

use regex::{Captures, Regex};

struct Patterns {
    bullet_list: Regex,
    numbered_list: Regex,
    header: Regex,
    table_header: Regex,
    table_header_lines: Regex,
    double_pipe: Regex,
    header_cell: Regex,
    code_block: Regex,
    panel: Regex,
    table_indent: Regex,
}

// Whitespace is spelled out as `[\t\n\f\r ]`: `\s` would also match
// non-breaking and other Unicode spaces.
static RE: LazyLock<Patterns> = LazyLock::new(|| Patterns {
    bullet_list: Regex::new(r"^[ \t]*(\*+)[\t\n\f\r ]+").unwrap(),
    numbered_list: Regex::new(r"^[ \t]*(#+)[\t\n\f\r ]+").unwrap(),
    header: Regex::new(r"^h([0-6])\.(.*)$").unwrap(),
    // Anchored to the whole text: only a single-line document can match.
    table_header: Regex::new(r"^[ \t]*((?:\|\|.*?)+\|\|)[ \t]*$").unwrap(),
    table_header_lines: Regex::new(r"(?m)^[ \t]*((?:\|\|.*?)+\|\|)[ \t]*$").unwrap(),
    double_pipe: Regex::new(r"\|\|").unwrap(),
    header_cell: Regex::new(r"\|[^|]+").unwrap(),
    code_block: Regex::new(
        r"\{code(:([a-z]+))?([:|]?(title|borderStyle|borderColor|borderWidth|bgColor|titleBGColor)=.+?)*\}((?s:.*?))\{code\}",
    )
    .unwrap(),
    panel: Regex::new(r"\{panel:title=([^}]*)\}\n?(.*?)\n?\{panel\}").unwrap(),
    table_indent: Regex::new(r"^[ \t]*\|").unwrap(),
});

/// Replace a leading marker run with two spaces per marker plus `bullet`.
fn list_marker(line: &str, pattern: &Regex, bullet: &str) -> String {
    let Some(caps) = pattern.captures(line) else {
        return line.to_string();
    };
    let depth = caps[1].len();
    let rest = &line[caps[0].len()..];
    format!("{}{}{}", "  ".repeat(depth), bullet, rest)
}

/// `*`, `**`, ... bullet markers to indented `* `.
pub fn bullet_list(line: &str) -> String {
    list_marker(line, &RE.bullet_list, "* ")
}

/// `#`, `##`, ... numbered markers to indented `1. `.
pub fn numbered_list(line: &str) -> String {
    list_marker(line, &RE.numbered_list, "1. ")
}

/// `hN.text` to `N + 1` hashes followed by the text.
///
/// `h6.` yields seven hashes, which Markdown does not render as a heading.
/// Existing migrations depend on this, so it stays.
pub fn header(line: &str) -> String {
    let Some(caps) = RE.header.captures(line) else {
        return line.to_string();
    };
    // The pattern only admits 0-6
    let level = usize::from(caps[1].as_bytes()[0] - b'0') + 1;
    format!("{}{}", "#".repeat(level), &caps[2])
}

fn table_rows(caps: &Captures) -> String {
    let single_barred = RE.double_pipe.replace_all(&caps[1], "|");
    let separator = RE.header_cell.replace_all(&single_barred, "| --- ");
    format!("\n{single_barred}\n{separator}")
}

/// `||a||b||` header row to a Markdown header plus separator row.
///
/// Only fires when the whole document is a single header row; header rows
/// inside a longer description are left as they are.
pub fn table_header(text: &str) -> String {
    match RE.table_header.captures(text) {
        Some(caps) => table_rows(&caps),
        None => text.to_string(),
    }
}

/// Like [`table_header`], but converts every header row line of the document.
pub fn table_header_lines(text: &str) -> String {
    RE.table_header_lines
        .replace_all(text, |caps: &Captures| table_rows(caps))
        .into_owned()
}

/// `{code:lang}...{code}` spans to fenced code blocks.
///
/// The newline right after the opening tag and right before the closing tag
/// belong to the tags, so a three-line block stays three lines.
pub fn code_block(text: &str) -> String {
    RE.code_block
        .replace_all(text, |caps: &Captures| {
            let language = caps.get(2).map_or("", |m| m.as_str());
            let body = &caps[5];
            let body = body.strip_prefix('\n').unwrap_or(body);
            let body = body.strip_suffix('\n').unwrap_or(body);
            format!("```{language}\n{body}\n```")
        })
        .into_owned()
}

/// `{panel:title=X}Y{panel}` to a one-column table titled `X`.
pub fn panel_to_table(text: &str) -> String {
    RE.panel
        .replace_all(text, "\n| ${1} |\n| --- |\n| ${2} |")
        .into_owned()
}

/// Drop indentation in front of table rows.
pub fn table_indent(line: &str) -> String {
    RE.table_indent.replace(line, "|").into_owned()
}
