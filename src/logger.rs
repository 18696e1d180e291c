//! Terminal logging with colored module prefixes.
//!
//! The build prints one line per page written, one line per missing
//! source, and a short summary. Everything goes through the `log!` macro
//! so prefixes and truncation stay consistent.
//!
//! # Example
//!
//! ```ignore
//! log!("write"; "docs/states/{}.html", slug);
//! log!("missing"; "{}", src.display());
//! ```

use colored::{ColoredString, Colorize};
use crossterm::terminal::size;
use std::{
    io::{Write, stdout},
    sync::OnceLock,
};

/// Cached terminal width (fetched once on first use)
static TERMINAL_WIDTH: OnceLock<u16> = OnceLock::new();

/// Get terminal width, cached after first call.
/// Falls back to 120 columns if detection fails.
fn terminal_width() -> usize {
    *TERMINAL_WIDTH.get_or_init(|| size().map(|(w, _)| w).unwrap_or(120)) as usize
}

/// Log a message with a colored module prefix.
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Log a message with a colored `[module]` prefix.
///
/// Messages longer than the terminal width are truncated.
pub fn log(module: &str, message: &str) {
    let prefix = colorize_prefix(module);

    // "[module] " overhead: brackets plus the separating space
    let max_msg_len = terminal_width().saturating_sub(module.len() + 3);
    let message = truncate_str(message, max_msg_len);

    let mut stdout = stdout().lock();
    writeln!(stdout, "{prefix} {message}").ok();
    stdout.flush().ok();
}

/// Apply color to a module prefix based on module type.
fn colorize_prefix(module: &str) -> ColoredString {
    let prefix = format!("[{module}]");
    match module {
        "error" | "missing" => prefix.bright_red().bold(),
        "warn" => prefix.yellow().bold(),
        "index" => prefix.bright_blue().bold(),
        _ => prefix.bright_yellow().bold(),
    }
}

/// Truncate a string to fit within `max_len` bytes.
///
/// Ensures the result is valid UTF-8 by backing up to a character boundary.
fn truncate_str(s: &str, max_len: usize) -> &str {
    if s.len() <= max_len {
        return s;
    }
    let mut end = max_len;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_str_short_string() {
        assert_eq!(truncate_str("hello", 10), "hello");
    }

    #[test]
    fn test_truncate_str_exact_length() {
        assert_eq!(truncate_str("hello", 5), "hello");
    }

    #[test]
    fn test_truncate_str_needs_truncation() {
        assert_eq!(truncate_str("hello world", 5), "hello");
    }

    #[test]
    fn test_truncate_str_unicode_boundary() {
        // "—" is 3 bytes; a cut inside it must back up to the boundary
        let s = "a—b";
        assert_eq!(truncate_str(s, 2), "a");
        assert_eq!(truncate_str(s, 4), "a—");
        assert_eq!(truncate_str(s, 5), "a—b");
    }

    #[test]
    fn test_truncate_str_zero_limit() {
        assert_eq!(truncate_str("hello", 0), "");
    }

    #[test]
    fn test_colorize_prefix_wraps_in_brackets() {
        let prefix = colorize_prefix("write");
        assert!(format!("{prefix}").contains("[write]"));
    }
}
