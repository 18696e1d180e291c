//! Per-document compilation pipelines.
//!
//! Every page follows the same path: strip frontmatter, convert markdown,
//! post-process the fragment, substitute into the template, write. The
//! index page additionally swaps its overview table for the generated
//! card grid.

pub mod markdown;
pub mod page;
pub mod postprocess;

use crate::config::PageEntry;
use postprocess::{state_card_grid, wrap_sources};
use std::borrow::Cow;

/// Body fragment for a state page: convert, then wrap the Sources section.
pub fn state_body(raw: &str) -> String {
    wrap_sources(&markdown::convert(raw))
}

/// Body fragment for the index page: the state pipeline plus the
/// table-to-card-grid replacement.
///
/// Returns the fragment and whether a table was actually replaced.
pub fn index_body(raw: &str, registry: &[PageEntry]) -> (String, bool) {
    let body = wrap_sources(&markdown::convert(raw));
    let grid = state_card_grid(registry);
    match postprocess::replace_first_table(&body, &grid) {
        Cow::Owned(replaced) => (replaced, true),
        Cow::Borrowed(_) => (body, false),
    }
}
