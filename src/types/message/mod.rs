//! Messages.

pub mod fields;

/// Longest message content.
pub const CONTENT_LENGTH_MAX: usize = 2000;
