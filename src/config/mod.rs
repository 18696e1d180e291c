//! Build configuration for the directory site.
//!
//! One parametrized pipeline replaces the pair of near-identical build
//! scripts this tool grew out of: everything that differed between them
//! (source path, output path, registry shape, nav CTA label) is a value
//! on [`SiteConfig`], and the builders read only this struct.
//!
//! # Layout
//!
//! | Module        | Purpose                                   |
//! |---------------|-------------------------------------------|
//! | `defaults`    | Fixed values for the production site      |
//! | `registry`    | `PageEntry` and the 50-state table        |
//! | `error`       | Typed validation errors                   |

pub mod defaults;
mod error;
pub mod registry;

pub use registry::{PageEntry, STATE_PAGES};

use crate::theme;
use anyhow::{Result, bail};
use error::ConfigError;
use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

/// Everything the build pipeline needs to produce one site.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Directory holding the markdown sources.
    pub source_root: PathBuf,
    /// Directory receiving the rendered tree.
    pub output_root: PathBuf,
    /// Static page registry; validated before any build runs.
    pub registry: &'static [PageEntry],
    /// Filename of the directory overview document.
    pub index_source: &'static str,
    /// Prefix of convention-named state sources.
    pub draft_prefix: &'static str,
    /// Year component of convention-named state sources.
    pub draft_year: u16,
    /// Leading part of state page titles.
    pub title_prefix: &'static str,
    /// Index page title.
    pub index_title: &'static str,
    /// Index page meta description.
    pub index_description: &'static str,
    /// Page template with the CTA label baked in; four slots remain.
    pub template: String,
    /// Stylesheet inlined into every page.
    pub css: &'static str,
}

impl SiteConfig {
    /// Assemble a config around the values that distinguish one site.
    pub fn new(
        source_root: impl Into<PathBuf>,
        output_root: impl Into<PathBuf>,
        registry: &'static [PageEntry],
        cta_label: &str,
    ) -> Self {
        Self {
            source_root: source_root.into(),
            output_root: output_root.into(),
            registry,
            index_source: defaults::site::index_source(),
            draft_prefix: defaults::site::draft_prefix(),
            draft_year: defaults::site::draft_year(),
            title_prefix: defaults::site::title_prefix(),
            index_title: defaults::site::index_title(),
            index_description: defaults::site::index_description(),
            template: theme::page_template(cta_label),
            css: theme::STYLESHEET,
        }
    }

    /// The production directory site.
    pub fn directory_site() -> Self {
        Self::new(
            defaults::paths::source_root(),
            defaults::paths::output_root(),
            STATE_PAGES,
            defaults::site::cta_label(),
        )
    }

    // ========================================================================
    // Path Helpers
    // ========================================================================

    /// Source file for a state entry.
    ///
    /// An explicit `source` filename on the entry wins; otherwise the
    /// draft naming convention `{prefix}-{slug}-{year}-draft.md` applies.
    pub fn state_source(&self, entry: &PageEntry) -> PathBuf {
        let name = match entry.source {
            Some(name) => name.to_owned(),
            None => format!(
                "{}-{}-{}-draft.md",
                self.draft_prefix, entry.slug, self.draft_year
            ),
        };
        self.source_root.join(name)
    }

    /// Output file for a state entry: `{output_root}/states/{slug}.html`.
    pub fn state_output(&self, entry: &PageEntry) -> PathBuf {
        self.output_root
            .join("states")
            .join(format!("{}.html", entry.slug))
    }

    /// Title line for a state page.
    pub fn state_title(&self, entry: &PageEntry) -> String {
        format!("{} — {}", self.title_prefix, entry.name)
    }

    /// Source file for the directory overview document.
    pub fn index_source_path(&self) -> PathBuf {
        self.source_root.join(self.index_source)
    }

    /// Output file for the index page.
    pub fn index_output_path(&self) -> PathBuf {
        self.output_root.join("index.html")
    }

    /// GitHub Pages config, written beside the output root.
    pub fn pages_config_path(&self) -> PathBuf {
        self.output_root
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or(Path::new("."))
            .join("_config.yml")
    }

    // ========================================================================
    // Validation
    // ========================================================================

    /// Validate registry invariants and the source root.
    ///
    /// Slugs are used verbatim as filename stems and link targets, so
    /// each must be unique, non-empty, and limited to `[a-z0-9-]`.
    pub fn validate(&self) -> Result<()> {
        if self.registry.is_empty() {
            bail!(ConfigError::EmptyRegistry);
        }

        let mut seen = HashSet::new();
        for entry in self.registry {
            if !is_url_safe(entry.slug) {
                bail!(ConfigError::UnsafeSlug(entry.slug.to_owned()));
            }
            if !seen.insert(entry.slug) {
                bail!(ConfigError::DuplicateSlug(entry.slug.to_owned()));
            }
        }

        if !self.source_root.is_dir() {
            bail!(ConfigError::MissingSourceRoot(self.source_root.clone()));
        }

        Ok(())
    }
}

/// Non-empty, lowercase letters, digits, and hyphens only.
fn is_url_safe(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const REGISTRY: &[PageEntry] = &[
        PageEntry::new("acme", "Acme", "Acme filings."),
        PageEntry::new("zenith", "Zenith", "Zenith filings."),
    ];

    fn test_config(registry: &'static [PageEntry]) -> SiteConfig {
        SiteConfig::new("content", "docs", registry, "Get Tracker →")
    }

    #[test]
    fn test_state_source_follows_draft_convention() {
        let config = test_config(REGISTRY);
        let path = config.state_source(&REGISTRY[0]);
        assert_eq!(
            path,
            PathBuf::from("content/church-compliance-deadlines-acme-2026-draft.md")
        );
    }

    #[test]
    fn test_state_source_explicit_filename_wins() {
        let entry = PageEntry {
            slug: "acme",
            name: "Acme",
            description: "Acme filings.",
            source: Some("acme-notes.md"),
        };
        let config = test_config(REGISTRY);
        assert_eq!(
            config.state_source(&entry),
            PathBuf::from("content/acme-notes.md")
        );
    }

    #[test]
    fn test_state_output_path() {
        let config = test_config(REGISTRY);
        assert_eq!(
            config.state_output(&REGISTRY[1]),
            PathBuf::from("docs/states/zenith.html")
        );
    }

    #[test]
    fn test_state_title_uses_em_dash() {
        let config = test_config(REGISTRY);
        assert_eq!(config.state_title(&REGISTRY[0]), "Church Compliance — Acme");
    }

    #[test]
    fn test_pages_config_lands_beside_output_root() {
        let config = SiteConfig::new("content", "site/docs", REGISTRY, "Get Tracker →");
        assert_eq!(config.pages_config_path(), PathBuf::from("site/_config.yml"));

        // Bare output root: parent is empty, fall back to the cwd
        let config = test_config(REGISTRY);
        assert_eq!(config.pages_config_path(), PathBuf::from("./_config.yml"));
    }

    #[test]
    fn test_template_is_baked_once() {
        let config = test_config(REGISTRY);
        assert!(config.template.contains(">Get Tracker →</a>"));
        assert!(!config.template.contains("{cta}"));
    }

    #[test]
    fn test_validate_accepts_production_registry() {
        let dir = tempfile::tempdir().unwrap();
        let config = SiteConfig::new(dir.path(), "docs", STATE_PAGES, "Get Tracker →");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_registry() {
        const EMPTY: &[PageEntry] = &[];
        let err = test_config(EMPTY).validate().unwrap_err();
        assert!(err.to_string().contains("registry is empty"));
    }

    #[test]
    fn test_validate_rejects_duplicate_slug() {
        const DUPED: &[PageEntry] = &[
            PageEntry::new("acme", "Acme", "a"),
            PageEntry::new("acme", "Acme Again", "b"),
        ];
        let dir = tempfile::tempdir().unwrap();
        let err = SiteConfig::new(dir.path(), "docs", DUPED, "Get Tracker →")
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("duplicate slug"));
    }

    #[test]
    fn test_validate_rejects_unsafe_slug() {
        const SHOUTY: &[PageEntry] = &[PageEntry::new("New_York", "New York", "ny")];
        let dir = tempfile::tempdir().unwrap();
        let err = SiteConfig::new(dir.path(), "docs", SHOUTY, "Get Tracker →")
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("not url-safe"));
    }

    #[test]
    fn test_validate_rejects_missing_source_root() {
        let config = SiteConfig::new("no-such-dir", "docs", REGISTRY, "Get Tracker →");
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("source directory not found"));
    }

    #[test]
    fn test_is_url_safe() {
        assert!(is_url_safe("new-hampshire"));
        assert!(is_url_safe("area-51"));
        assert!(!is_url_safe(""));
        assert!(!is_url_safe("New-York"));
        assert!(!is_url_safe("new york"));
        assert!(!is_url_safe("états"));
    }
}
