//! Markdown source handling: frontmatter stripping and HTML conversion.

use pulldown_cmark::{Options, Parser, html};
use regex::Regex;
use std::sync::LazyLock;

/// Leading frontmatter block: `---` on the first line, arbitrary lines,
/// then the first closing `---` line. Anchored and non-greedy, so an
/// unterminated opener removes nothing and marker lines later in the
/// document are never touched.
static FRONTMATTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\A---\n.*?\n---\n").unwrap());

/// Strip a leading frontmatter block, if present.
pub fn strip_frontmatter(text: &str) -> &str {
    match FRONTMATTER.find(text) {
        Some(block) => &text[block.end()..],
        None => text,
    }
}

/// Convert a markdown document body to an HTML fragment.
///
/// Tables are enabled; fenced code blocks are core CommonMark. A fresh
/// parser is built per call, so no conversion state leaks between
/// documents.
pub fn to_html(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, Options::ENABLE_TABLES);
    let mut fragment = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut fragment, parser);
    fragment
}

/// Full source-to-fragment conversion: strip frontmatter, then convert.
pub fn convert(raw: &str) -> String {
    to_html(strip_frontmatter(raw))
}

// ============================================================================
// Tests
// ============================================================================
