//! Error message formatting with actionable suggestions.
//!
//! Provides user-friendly error formatting that includes context,
//! suggestions for fixes, and the cause chain when available.

use sprig_core::error::SprigError;
use super::colors::ColorSupport;
use std::error::Error;

/// Error formatter with suggestions
pub struct ErrorFormatter {
    colors: ColorSupport,
}

impl ErrorFormatter {
    /// Create a new error formatter
    pub fn new() -> Self {
        Self {
            colors: ColorSupport::detect(),
        }
    }

    /// Format an error with context and suggestions
    pub fn format_error(&self, error: &SprigError) -> String {
        let mut output = String::new();

        // Main error message
        output.push_str(&self.colors.red("error"));
        output.push_str(": ");
        output.push_str(&error.to_string());
        output.push('\n');

        // Add suggestion if available
        if let Some(suggestion) = error.suggestion() {
            output.push('\n');
            output.push_str(&self.colors.dim("help"));
            output.push_str(": ");
            output.push_str(suggestion);
            output.push('\n');
        }

        // Add source chain if available
        let mut source = error.source();
        while let Some(err) = source {
            output.push('\n');
            output.push_str(&self.colors.dim("caused by"));
            output.push_str(": ");
            output.push_str(&err.to_string());
            source = err.source();
        }

        output
    }

    /// Format a warning message
    pub fn format_warning(&self, message: &str) -> String {
        format!("{}: {}", self.colors.yellow("warning"), message)
    }
}

impl Default for ErrorFormatter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn formatter() -> ErrorFormatter {
        ErrorFormatter {
            colors: ColorSupport::disabled(),
        }
    }

    #[test]
    fn test_format_error_includes_suggestion() {
        let err = SprigError::invalid_options("packageId", "may only be used when fetching versions");
        let formatted = formatter().format_error(&err);

        assert!(formatted.contains("error: Option 'packageId' is invalid"));
        assert!(formatted.contains("help:"));
    }

    #[test]
    fn test_format_error_includes_cause_chain() {
        let err = SprigError::transport(
            "connection refused".to_string(),
            std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused"),
        );
        let formatted = formatter().format_error(&err);

        assert!(formatted.contains("caused by: refused"));
    }
}
