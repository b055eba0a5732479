//! Utility modules.

/// Bounded body excerpts for logs.
pub mod log_sanitizer;
