//! Page chrome for the directory site: stylesheet and template skeleton.
//!
//! The stylesheet is inlined into every page via the `{css}` slot, so the
//! output tree needs no asset files. The skeleton carries five tokens at
//! rest; [`page_template`] bakes the nav CTA label in once, leaving
//! exactly the four slots the page assembler fills (`{title}`,
//! `{description}`, `{css}`, `{body}`).

/// Shared stylesheet, inlined into every page.
pub const STYLESHEET: &str = r#"
:root {
  --bg: #ffffff;
  --text: #1a1a2e;
  --muted: #555;
  --accent: #2563eb;
  --accent-hover: #1d4ed8;
  --border: #e2e8f0;
  --callout-bg: #eff6ff;
  --callout-border: #93c5fd;
  --tag-bg: #f1f5f9;
}
* { box-sizing: border-box; margin: 0; padding: 0; }
body {
  font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
  font-size: 16px;
  line-height: 1.65;
  color: var(--text);
  background: var(--bg);
}
a { color: var(--accent); text-decoration: none; }
a:hover { color: var(--accent-hover); text-decoration: underline; }

/* Nav */
nav {
  background: var(--text);
  color: #fff;
  padding: 0 1.5rem;
  display: flex;
  align-items: center;
  gap: 1.5rem;
  height: 52px;
  position: sticky;
  top: 0;
  z-index: 100;
}
nav .brand { font-weight: 700; font-size: 1rem; color: #fff; letter-spacing: -0.3px; }
nav .brand span { color: #60a5fa; }
nav a { color: #cbd5e1; font-size: 0.875rem; }
nav a:hover { color: #fff; text-decoration: none; }
nav .spacer { flex: 1; }
nav .cta {
  background: var(--accent);
  color: #fff !important;
  padding: 0.35rem 0.85rem;
  border-radius: 6px;
  font-size: 0.8rem;
  font-weight: 600;
}
nav .cta:hover { background: var(--accent-hover); }

/* Layout */
.container { max-width: 860px; margin: 0 auto; padding: 2rem 1.5rem 4rem; }

/* Disclaimer */
blockquote {
  background: var(--callout-bg);
  border-left: 4px solid var(--callout-border);
  padding: 0.85rem 1.1rem;
  border-radius: 0 6px 6px 0;
  margin: 1.5rem 0;
  font-size: 0.9rem;
  color: #1e40af;
}
blockquote p { margin: 0; }

/* Typography */
h1 { font-size: 1.75rem; font-weight: 800; margin: 1.5rem 0 0.5rem; line-height: 1.25; }
h2 { font-size: 1.2rem; font-weight: 700; margin: 2rem 0 0.75rem; padding-bottom: 0.4rem; border-bottom: 1px solid var(--border); }
h3 { font-size: 1rem; font-weight: 700; margin: 1.5rem 0 0.5rem; }
p { margin: 0.75rem 0; }
ul, ol { margin: 0.75rem 0 0.75rem 1.5rem; }
li { margin: 0.3rem 0; }
strong { font-weight: 600; }

/* Tables */
table { width: 100%; border-collapse: collapse; margin: 1rem 0; font-size: 0.9rem; }
th { background: var(--tag-bg); text-align: left; padding: 0.6rem 0.8rem; font-weight: 600; border: 1px solid var(--border); }
td { padding: 0.55rem 0.8rem; border: 1px solid var(--border); vertical-align: top; }
tr:nth-child(even) td { background: #fafafa; }

/* Sources */
.sources { margin-top: 2.5rem; padding-top: 1.5rem; border-top: 1px solid var(--border); }
.sources h2 { border-bottom: none; font-size: 1rem; color: var(--muted); }
.sources ul { font-size: 0.85rem; color: var(--muted); }
.sources li { margin: 0.4rem 0; }

/* Footer */
footer {
  margin-top: 3rem;
  padding: 1.5rem;
  text-align: center;
  font-size: 0.8rem;
  color: var(--muted);
  border-top: 1px solid var(--border);
}

/* State grid (index only) */
.state-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(260px, 1fr)); gap: 1rem; margin: 1.5rem 0; }
.state-card {
  border: 1px solid var(--border);
  border-radius: 8px;
  padding: 1rem 1.1rem;
  transition: box-shadow 0.15s;
}
.state-card:hover { box-shadow: 0 2px 12px rgba(0,0,0,0.08); border-color: var(--accent); }
.state-card h3 { margin: 0 0 0.4rem; font-size: 0.95rem; }
.state-card p { font-size: 0.82rem; color: var(--muted); margin: 0 0 0.6rem; }
.state-card a { font-size: 0.82rem; font-weight: 600; }

@media (max-width: 600px) {
  .container { padding: 1.25rem 1rem 3rem; }
  h1 { font-size: 1.4rem; }
  table { font-size: 0.8rem; }
  td, th { padding: 0.4rem 0.5rem; }
}
"#;

/// Template skeleton. `{cta}` is filled by [`page_template`]; the four
/// remaining slots belong to the page assembler.
const TEMPLATE_SKELETON: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{title} | Church Compliance Directory</title>
  <meta name="description" content="{description}">
  <style>{css}</style>
</head>
<body>
<nav>
  <span class="brand">Church<span>Compliance</span>.guide</span>
  <a href="/index.html">Directory</a>
  <div class="spacer"></div>
  <a class="cta" href="https://compliancecalendar.app">{cta}</a>
</nav>
<div class="container">
{body}
</div>
<footer>
  <p>Church Compliance Directory — a free resource by <a href="https://compliancecalendar.app">Compliance Tracker</a></p>
  <p style="margin-top:0.4rem">Not legal or tax advice. Links point to official government agency pages. Last updated Feb 2026.</p>
</footer>
</body>
</html>"#;

/// Bake the nav CTA label into the skeleton.
///
/// Done once at config construction: the builders only ever see a
/// four-slot template.
pub fn page_template(cta_label: &str) -> String {
    TEMPLATE_SKELETON.replacen("{cta}", cta_label, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_has_each_slot_exactly_once() {
        let template = page_template("Get Compliance Tracker \u{2192}");
        for slot in ["{title}", "{description}", "{css}", "{body}"] {
            assert_eq!(template.matches(slot).count(), 1, "slot {slot}");
        }
    }

    #[test]
    fn test_template_bakes_cta_label() {
        let template = page_template("Try it free");
        assert!(template.contains(">Try it free</a>"));
        assert!(!template.contains("{cta}"));
    }

    #[test]
    fn test_template_brands_the_title_slot() {
        // The brand suffix lives in the skeleton, not in per-page titles.
        assert!(TEMPLATE_SKELETON.contains("<title>{title} | Church Compliance Directory</title>"));
    }

    #[test]
    fn test_stylesheet_styles_the_generated_markup() {
        // Classes referenced by the post-processor and card grid.
        assert!(STYLESHEET.contains(".sources"));
        assert!(STYLESHEET.contains(".state-grid"));
        assert!(STYLESHEET.contains(".state-card"));
    }
}
