use pulldown_cmark::{Options, Parser, html};

use crate::config::PreviewConfig;

/// Render converted Markdown to HTML for a quick visual check.
pub fn markdown_to_html(markdown: &str, config: &PreviewConfig) -> String {
    let mut options = Options::empty();
    if config.tables {
        options.insert(Options::ENABLE_TABLES);
    }
    if config.strikethrough {
        options.insert(Options::ENABLE_STRIKETHROUGH);
    }
    let parser = Parser::new_ext(markdown, options);

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}
