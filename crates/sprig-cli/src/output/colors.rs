//! Terminal color support detection and formatting.
//!
//! Provides automatic color detection that respects NO_COLOR environment
//! variable and TTY detection for consistent output across different
//! environments.

use std::env;
use std::io::{self, IsTerminal};

/// Color support detection and formatting
pub struct ColorSupport {
    enabled: bool,
}

impl ColorSupport {
    /// Detect color support automatically
    pub fn detect() -> Self {
        let enabled = Self::should_use_colors();
        Self { enabled }
    }

    /// Force enable colors
    pub fn enabled() -> Self {
        Self { enabled: true }
    }

    /// Force disable colors
    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    /// Check if colors should be used
    fn should_use_colors() -> bool {
        // Respect NO_COLOR environment variable
        if env::var("NO_COLOR").is_ok() {
            return false;
        }

        // Diagnostics go to stderr, so that is the stream that matters
        io::stderr().is_terminal()
    }

    /// Format text in red
    pub fn red(&self, text: &str) -> String {
        if self.enabled {
            format!("\x1b[31m{}\x1b[0m", text)
        } else {
            text.to_string()
        }
    }

    /// Format text in yellow
    pub fn yellow(&self, text: &str) -> String {
        if self.enabled {
            format!("\x1b[33m{}\x1b[0m", text)
        } else {
            text.to_string()
        }
    }

    /// Format text as dim/gray
    pub fn dim(&self, text: &str) -> String {
        if self.enabled {
            format!("\x1b[2m{}\x1b[0m", text)
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_passes_text_through() {
        let colors = ColorSupport::disabled();
        assert_eq!(colors.red("boom"), "boom");
        assert_eq!(colors.dim("quiet"), "quiet");
    }

    #[test]
    fn test_enabled_wraps_with_escape_codes() {
        let colors = ColorSupport::enabled();
        assert_eq!(colors.red("boom"), "\x1b[31mboom\x1b[0m");
    }
}
