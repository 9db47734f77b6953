//! Discovery metadata of a guild.

pub mod fields;

/// Most keywords a guild can be discovered by.
pub const KEYWORDS_MAX: usize = 10;

/// Longest keyword.
pub const KEYWORD_LENGTH_MAX: usize = 30;
