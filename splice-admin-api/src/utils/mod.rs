//! Utility modules.

/// Log truncation for response bodies.
pub mod log_sanitizer;
