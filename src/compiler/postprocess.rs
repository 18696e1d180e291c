//! Fragment post-processing: Sources wrapping and table-to-grid surgery.
//!
//! Both transforms operate on converter output, so they key on the exact
//! markup pulldown-cmark emits: a bare `<h2>Sources</h2>` heading and
//! attribute-free `<table>` tags.

use crate::config::PageEntry;
use regex::{NoExpand, Regex};
use std::borrow::Cow;
use std::sync::LazyLock;

/// Heading the converter emits for a `## Sources` section.
const SOURCES_HEADING: &str = "<h2>Sources</h2>";

/// First complete table element, spanning newlines.
static TABLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<table>.*?</table>").unwrap());

/// Wrap the first "Sources" section in its styled container.
///
/// Documents carry at most one Sources section, so only the first heading
/// occurrence is wrapped. The closing tag is appended even when the
/// heading is absent; the page stays well-formed either way.
pub fn wrap_sources(fragment: &str) -> String {
    let mut wrapped = fragment.replacen(
        SOURCES_HEADING,
        "<div class=\"sources\"><h2>Sources</h2>",
        1,
    );
    wrapped.push_str("</div>");
    wrapped
}

/// Replace the first table in the fragment with `replacement`.
///
/// Later tables survive untouched. Returns `Cow::Borrowed` when the
/// fragment has no table, so callers can tell the no-op apart.
pub fn replace_first_table<'a>(fragment: &'a str, replacement: &str) -> Cow<'a, str> {
    TABLE.replacen(fragment, 1, NoExpand(replacement))
}

/// Render the card grid that stands in for the index table: one card per
/// registry entry, each linking to that entry's page.
pub fn state_card_grid(registry: &[PageEntry]) -> String {
    let mut grid = String::from("\n<div class=\"state-grid\">\n");
    for entry in registry {
        grid.push_str(&format!(
            "<div class=\"state-card\">\n  <h3>{name}</h3>\n  <p>{description}</p>\n  <a href=\"states/{slug}.html\">View {name} guide →</a>\n</div>\n",
            name = entry.name,
            description = entry.description,
            slug = entry.slug,
        ));
    }
    grid.push_str("</div>\n");
    grid
}

// ============================================================================
// Tests
// ============================================================================
