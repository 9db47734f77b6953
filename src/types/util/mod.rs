//! Utilities for efficiently parsing and representing data from Discord's API.
//!
//! Besides the value types ([`Timestamp`], [`ImageHash`], [`HexColor`]) this
//! module hosts the two traits every enum and flag type implements so the
//! generic codecs in [`field`] can convert them without knowing the concrete
//! type.
//!
//! [`field`]: crate::field

pub mod datetime;
pub mod hex_color;
pub mod image_hash;
mod wire_enum;

pub(crate) use self::wire_enum::wire_enum;
pub use self::{datetime::Timestamp, hex_color::HexColor, image_hash::ImageHash};

use crate::value::IntoChange;
use bitflags::Flags;
use std::fmt::Debug;

/// An enum sent as a small integer, with an `Unknown` case for values this
/// library predates.
///
/// Implemented by [`wire_enum!`].
pub trait WireEnum:
    Copy + Debug + Default + Eq + From<u8> + Into<u8> + IntoChange + Send + Sync + 'static
{
    /// Human readable name of the variant, `"unknown"` for unknown values.
    fn name(self) -> &'static str;

    /// Whether the value is one the library knows about.
    fn is_known(self) -> bool {
        self.name() != "unknown"
    }
}

/// A `bitflags` type carried on the wire as 64 bits.
pub trait WireFlags:
    Flags<Bits = u64> + Copy + Debug + PartialEq + IntoChange + Send + Sync + 'static
{
    /// Whether the bits travel as a decimal string rather than an integer.
    ///
    /// Permissions outgrew 53 bits and are therefore always stringified.
    const STRING_ENCODED: bool = false;
}
