//! Custom emojis.

pub mod fields;
