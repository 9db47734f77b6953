//! Options of onboarding prompts.

pub mod fields;
