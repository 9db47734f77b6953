//! Guild members.

pub mod fields;
