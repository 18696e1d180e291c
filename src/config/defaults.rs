//! Fixed values for the production directory site.
//!
//! There are no CLI flags or environment variables; a build is driven
//! entirely by these values through [`SiteConfig::directory_site`].
//!
//! [`SiteConfig::directory_site`]: super::SiteConfig::directory_site

// ============================================================================
// Paths
// ============================================================================

pub mod paths {
    use std::path::PathBuf;

    /// Directory holding the markdown sources.
    pub fn source_root() -> PathBuf {
        "content".into()
    }

    /// Directory receiving the rendered tree. Its parent gets the
    /// GitHub Pages `_config.yml`.
    pub fn output_root() -> PathBuf {
        "docs".into()
    }
}

// ============================================================================
// Site Strings
// ============================================================================

pub mod site {
    /// Nav call-to-action label, baked into the page template.
    pub fn cta_label() -> &'static str {
        "Get Compliance Tracker →"
    }

    /// Prefix of convention-named state sources:
    /// `{prefix}-{slug}-{year}-draft.md`.
    pub fn draft_prefix() -> &'static str {
        "church-compliance-deadlines"
    }

    /// Year component of convention-named state sources.
    pub fn draft_year() -> u16 {
        2026
    }

    /// Filename of the directory overview document.
    pub fn index_source() -> &'static str {
        "church-compliance-directory-index.md"
    }

    /// Leading part of state page titles: `{prefix} — {state name}`.
    pub fn title_prefix() -> &'static str {
        "Church Compliance"
    }

    /// Index page title.
    pub fn index_title() -> &'static str {
        "Church Compliance Directory"
    }

    /// Index page meta description.
    pub fn index_description() -> &'static str {
        "State-by-state compliance guides for churches — official government links, no legal advice."
    }
}
