//! Stage instances.

pub mod fields;
