//! Discord API types and their field converters.
//!
//! Every entity kind gets a module holding its enum and flag types plus a
//! `fields` module declaring one [`Field`] per attribute. Entities and the
//! audit log conversions are built from those declarations, so an
//! attribute's default, wire key and accepted input live in exactly one
//! place.
//!
//! [`Field`]: crate::field::Field

// ===========================================================================
// Value types shared by every entity
// ===========================================================================

/// Type-safe IDs with marker types.
pub mod id;

/// Permission bit sets of roles, members and overwrites.
pub mod permissions;

/// Utility types (timestamps, image hashes, hex colors).
pub mod util;

// ===========================================================================
// Entities
// ===========================================================================

pub mod application;
pub mod application_command;
pub mod auto_moderation;
pub mod channel;
pub mod emoji;
pub mod guild;
pub mod integration;
pub mod invite;
pub mod member;
pub mod message;
pub mod onboarding;
pub mod role;
pub mod scheduled_event;
pub mod stage_instance;
pub mod sticker;
pub mod webhook;

#[cfg(test)]
mod round_trip;

// ===========================================================================
// Convenience re-exports
// ===========================================================================

pub use self::{
    id::Id,
    permissions::Permissions,
    role::Role,
    util::{HexColor, ImageHash, Timestamp},
};
