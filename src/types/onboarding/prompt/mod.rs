//! Onboarding prompts.

pub mod fields;

/// Most options a prompt can have.
pub const OPTIONS_MAX: usize = 50;
