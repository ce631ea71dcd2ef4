//! Terminal output formatting.
//!
//! Resolved records print to stdout as plain JSON so they stay pipeable;
//! this module only decorates diagnostics on stderr.

pub mod colors;
pub mod errors;
