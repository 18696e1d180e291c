//! Page assembly: template substitution and the final write.

use crate::config::SiteConfig;
use crate::log;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Fill the four template slots.
///
/// The body is substituted last: converted markdown is the only value not
/// authored in this repo, and nothing may re-scan it for slot tokens.
pub fn assemble(
    template: &str,
    css: &str,
    title: &str,
    description: &str,
    body: &str,
) -> String {
    template
        .replace("{title}", title)
        .replace("{description}", description)
        .replace("{css}", css)
        .replace("{body}", body)
}

/// Assemble a full page and write it to `out_path`, overwriting any
/// previous build's output.
pub fn render_page(
    config: &SiteConfig,
    title: &str,
    description: &str,
    body: &str,
    out_path: &Path,
) -> Result<()> {
    let page = assemble(&config.template, config.css, title, description, body);
    fs::write(out_path, page)
        .with_context(|| format!("failed to write {}", out_path.display()))?;
    log!("write"; "{}", out_path.display());
    Ok(())
}
