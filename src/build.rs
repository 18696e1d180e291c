//! Build orchestration.
//!
//! # Architecture
//!
//! ```text
//! build_site()
//!     │
//!     ├── create {output_root}/states
//!     │
//!     ├── build_state_pages() ── per entry: read → strip → convert
//!     │       │                  → wrap Sources → assemble → write
//!     │       └── missing source: log, record slug, continue
//!     │
//!     ├── build_index() ──────── read (required) → same pipeline
//!     │                          → table → card grid → write
//!     │
//!     ├── write_pages_config() ─ `_config.yml` beside the output root
//!     │
//!     └── summary log
//! ```

use crate::compiler::{self, page};
use crate::config::SiteConfig;
use crate::log;
use anyhow::{Context, Result};
use std::fs;
use std::io::ErrorKind;

/// Outcome of one run: pages written and slugs whose sources were absent.
#[derive(Debug, Default)]
pub struct BuildReport {
    pub built: usize,
    pub missing: Vec<&'static str>,
}

/// Build the whole site: every state page, the index, the Pages config.
///
/// A missing state source skips that entry; everything else is fatal.
/// Partial output (some pages written before a fatal error) is the
/// documented terminal state — there is no rollback.
pub fn build_site(config: &SiteConfig) -> Result<BuildReport> {
    let states_dir = config.output_root.join("states");
    fs::create_dir_all(&states_dir)
        .with_context(|| format!("failed to create {}", states_dir.display()))?;

    let report = build_state_pages(config)?;
    build_index(config)?;
    write_pages_config(config)?;

    log!("build"; "built {} state pages", report.built);
    if report.missing.is_empty() {
        log!("build"; "missing: none");
    } else {
        log!("build"; "missing: {}", report.missing.join(", "));
    }
    log!("build"; "done");

    Ok(report)
}

/// Render one page per registry entry, skipping absent sources.
fn build_state_pages(config: &SiteConfig) -> Result<BuildReport> {
    let mut report = BuildReport::default();

    for entry in config.registry {
        let src = config.state_source(entry);
        let raw = match fs::read_to_string(&src) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                log!("missing"; "{}", src.display());
                report.missing.push(entry.slug);
                continue;
            }
            Err(err) => {
                return Err(err).with_context(|| format!("failed to read {}", src.display()));
            }
        };

        let body = compiler::state_body(&raw);
        page::render_page(
            config,
            &config.state_title(entry),
            entry.description,
            &body,
            &config.state_output(entry),
        )?;
        report.built += 1;
    }

    Ok(report)
}

/// Render the directory index.
///
/// The overview document is required: a directory without its index is
/// not a partial success, so absence aborts the run.
fn build_index(config: &SiteConfig) -> Result<()> {
    log!("index"; "building directory index");

    let src = config.index_source_path();
    let raw = fs::read_to_string(&src)
        .with_context(|| format!("index source not found: {}", src.display()))?;

    let (body, replaced) = compiler::index_body(&raw, config.registry);
    if !replaced {
        log!("warn"; "index has no table; card grid was not inserted");
    }

    page::render_page(
        config,
        config.index_title,
        config.index_description,
        &body,
        &config.index_output_path(),
    )
}

/// Disable the default Jekyll theme on GitHub Pages.
fn write_pages_config(config: &SiteConfig) -> Result<()> {
    let path = config.pages_config_path();
    fs::write(&path, "theme: null\n")
        .with_context(|| format!("failed to write {}", path.display()))
}

// ============================================================================
// Tests
// ============================================================================
