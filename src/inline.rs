//! Inline styles, links and line prefixes.
//!
//! Substitutions run in a fixed order on each line. Every one is global
//! within the line, and a later pattern may see the output of an earlier one,
//! so the order below is part of the behavior.

use std::sync::LazyLock;

use regex::Regex;

struct Substitution {
    name: &'static str,
    pattern: Regex,
    replacement: &'static str,
}

impl Substitution {
    fn new(name: &'static str, pattern: &str, replacement: &'static str) -> Self {
        Self {
            name,
            pattern: Regex::new(pattern).unwrap(),
            replacement,
        }
    }
}

// `[\t\n\f\r ]` rather than `\s`, which would also match Unicode spaces
// such as U+00A0 that pasted Jira text is full of.
static SUBSTITUTIONS: LazyLock<Vec<Substitution>> = LazyLock::new(|| {
    vec![
        Substitution::new("bold", r"\*([^\t\n\f\r ].*)\*", "**${1}**"),
        Substitution::new("italic", r"_([^\t\n\f\r ].*)_", "*${1}*"),
        Substitution::new("monospace", r"\{\{([^}]+)\}\}", "`${1}`"),
        // Keeps the `+` markers inside the tag
        Substitution::new("insert", r"\+([^+]*)\+", "<ins>${0}</ins>"),
        Substitution::new("superscript", r"\^([^\^]*)\^", "<sup>${1}</sup>"),
        Substitution::new("subscript", r"~([^~]*)~", "<sub>${1}</sub>"),
        Substitution::new(
            "strikethrough",
            r"([\t\n\f\r ]+)-([^\t\n\f\r ]+.*?[^\t\n\f\r ])-([\t\n\f\r ]+)",
            "${1}~~${2}~~${3}",
        ),
        Substitution::new("preformatted", r"\{noformat\}", "```"),
        Substitution::new("unnamed_link", r"\[([^|]+)\]", "<${1}>"),
        Substitution::new("image", r"!(.+)!", "![](${1})"),
        Substitution::new("named_link", r"\[(.+?)\|(.+)\]", "[${1}](${2})"),
        Substitution::new("blockquote", r"^bq\.[\t\n\f\r ]+", "> "),
        Substitution::new("color", r"\{color:[^}]+\}(.*)\{color\}", "${1}"),
        // A panel spans lines, so per line this only fires on `{panel:title=X}Y{panel}`
        // and keeps just the title.
        Substitution::new(
            "panel",
            r"\{panel:title=([^}]*)\}\n?(.*?)\n?\{panel\}",
            "${1}",
        ),
    ]
});

/// Apply every inline substitution to one line.
pub fn inline_styles(line: &str) -> String {
    let mut out = line.to_string();
    for substitution in SUBSTITUTIONS.iter() {
        if !substitution.pattern.is_match(&out) {
            continue;
        }
        tracing::trace!(rule = substitution.name, "inline substitution applied");
        out = substitution
            .pattern
            .replace_all(&out, substitution.replacement)
            .into_owned();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case::bold("a *bold* word", "a **bold** word")]
    #[case::bold_needs_text("a * b", "a * b")]
    #[case::italic("an _italic_ word", "an *italic* word")]
    #[case::monospace("run {{make}} now", "run `make` now")]
    #[case::insert("supports +inserts+", "supports <ins>+inserts+</ins>")]
    #[case::superscript("supports ^superscript^", "supports <sup>superscript</sup>")]
    #[case::subscript("supports ~subscript~", "supports <sub>subscript</sub>")]
    #[case::strikethrough("supports -strikethrough- text", "supports ~~strikethrough~~ text")]
    #[case::strikethrough_needs_spaces("well-known-name", "well-known-name")]
    #[case::noformat("{noformat} supports noformat text", "``` supports noformat text")]
    #[case::unnamed_link("supports [unnamed links]", "supports <unnamed links>")]
    #[case::image("supports !images.jpeg!", "supports ![](images.jpeg)")]
    #[case::named_link(
        "supports [named links|https://example.com]",
        "supports [named links](https://example.com)"
    )]
    #[case::blockquote("bq. fourscore and seven", "> fourscore and seven")]
    #[case::blockquote_needs_space("bq.not a quote", "bq.not a quote")]
    #[case::blockquote_no_indent(" bq.not a quote", " bq.not a quote")]
    #[case::color(
        "{color:royalblue}The color of this text is royalblue.{color}",
        "The color of this text is royalblue."
    )]
    #[case::bold_starting_with_nbsp("x *\u{a0}y*", "x **\u{a0}y**")]
    #[case::strikethrough_needs_ascii_spaces("a\u{a0}-gone-\u{a0}b", "a\u{a0}-gone-\u{a0}b")]
    #[case::strikethrough_keeps_nbsp_inside("a -x\u{a0}y- b", "a ~~x\u{a0}y~~ b")]
    #[case::blockquote_needs_ascii_space("bq.\u{a0}text", "bq.\u{a0}text")]
    #[case::panel_single_line("{panel:title=Heads up}Body{panel}", "Heads up")]
    fn test_inline_styles(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(inline_styles(input), expected);
    }

    #[test]
    fn test_composition_on_one_line() {
        assert_eq!(
            inline_styles("supports *bold*, _italic_, and {{monospace}}"),
            "supports **bold**, *italic*, and `monospace`"
        );
    }

    #[test]
    fn test_every_occurrence_is_rewritten() {
        assert_eq!(inline_styles("x^2^ + y^2^"), "x<sup>2</sup> + y<sup>2</sup>");
    }

    #[test]
    fn test_panel_open_tag_alone_is_untouched() {
        assert_eq!(inline_styles("{panel:title=Note}"), "{panel:title=Note}");
    }

    #[rstest]
    #[case("")]
    #[case("plain text, nothing to see")]
    #[case("1. already markdown")]
    fn test_identity_on_plain_lines(#[case] line: &str) {
        assert_eq!(inline_styles(line), line);
    }
}
