//! Logging utilities with colored module prefixes.
//!
//! Provides the `log!` macro for formatted terminal output, used on the
//! filesystem-writing and reload paths.
//!
//! # Example
//!
//! ```ignore
//! log!("scan"; "{} files scanned", count);
//! ```

use colored::{ColoredString, Colorize};
use crossterm::terminal::size;
use std::{
    io::{Write, stdout},
    sync::OnceLock,
};

/// Cached terminal width (fetched once on first use)
static TERMINAL_WIDTH: OnceLock<u16> = OnceLock::new();

/// Length of brackets around module name plus trailing space: "[module] "
const PREFIX_OVERHEAD: usize = 3;

/// Get terminal width, cached after first call.
/// Falls back to 120 columns if detection fails.
fn get_terminal_width() -> u16 {
    *TERMINAL_WIDTH.get_or_init(|| size().map(|(w, _)| w).unwrap_or(120))
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

/// Log a message with a colored module prefix.
///
/// Automatically truncates long single-line messages to fit terminal width.
pub fn log(module: &str, message: &str) {
    let prefix = colorize_prefix(module, &module.to_ascii_lowercase());
    let width = get_terminal_width() as usize;

    let mut stdout = stdout().lock();

    if message.contains('\n') {
        writeln!(stdout, "{prefix} {message}").ok();
    } else {
        let max_msg_len = width.saturating_sub(module.len() + PREFIX_OVERHEAD);
        let message = truncate_str(message, max_msg_len);
        writeln!(stdout, "{prefix} {message}").ok();
    }

    stdout.flush().ok();
}

/// Apply color to a module prefix based on module type.
#[inline]
fn colorize_prefix(module: &str, module_lower: &str) -> ColoredString {
    let prefix = format!("[{module}]");
    match module_lower {
        "reload" => prefix.bright_green().bold(),
        "error" => prefix.bright_red().bold(),
        _ => prefix.bright_yellow().bold(),
    }
}

/// Truncate a string to fit within `max_len` bytes.
///
/// Ensures the result is valid UTF-8 by finding the nearest character boundary.
#[inline]
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
    fn test_truncate_str_respects_char_boundaries() {
        assert_eq!(truncate_str("hello", 10), "hello");
        assert_eq!(truncate_str("hello", 3), "hel");
        // "é" is two bytes; cutting inside it steps back to a boundary.
        assert_eq!(truncate_str("éé", 3), "é");
    }
}
