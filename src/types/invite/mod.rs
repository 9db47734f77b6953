//! Invites.

pub mod fields;

/// Longest lifetime of an invite, in seconds.
pub const MAX_AGE_MAX: i64 = 604_800;

/// Most uses an invite can be limited to.
pub const MAX_USES_MAX: i64 = 100;
