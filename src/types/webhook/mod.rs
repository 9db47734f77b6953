//! Webhooks.

pub mod fields;
