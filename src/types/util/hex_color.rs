//! RGB colors as used by roles and embeds.

use serde::{
    de::{Deserialize, Deserializer, Error as DeError, Visitor},
    ser::{Serialize, Serializer},
};
use std::{
    error::Error,
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

/// Largest value a color integer may take on the wire.
pub const MAX_COLOR: u32 = 0xFF_FF_FF;

/// A 24-bit RGB color, sent by Discord as an integer.
///
/// Displays as `#RRGGBB`.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct HexColor(pub u8, pub u8, pub u8);

impl HexColor {
    /// Build a color from its integer form. Returns `None` above `0xFFFFFF`.
    pub const fn from_u32(value: u32) -> Option<Self> {
        if value > MAX_COLOR {
            return None;
        }

        Some(Self((value >> 16) as u8, (value >> 8) as u8, value as u8))
    }

    /// The integer form sent on the wire.
    pub const fn to_u32(self) -> u32 {
        ((self.0 as u32) << 16) | ((self.1 as u32) << 8) | self.2 as u32
    }
}

impl Display for HexColor {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl FromStr for HexColor {
    type Err = HexColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('#').ok_or(HexColorParseError::FORMAT)?;

        if digits.len() != 6 {
            return Err(HexColorParseError::FORMAT);
        }

        let value = u32::from_str_radix(digits, 16).map_err(|_| HexColorParseError::FORMAT)?;

        Self::from_u32(value).ok_or(HexColorParseError::FORMAT)
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct HexColorVisitor;

        impl Visitor<'_> for HexColorVisitor {
            type Value = HexColor;

            fn expecting(&self, f: &mut Formatter<'_>) -> FmtResult {
                f.write_str("a 24-bit color integer")
            }

            fn visit_u64<E: DeError>(self, v: u64) -> Result<Self::Value, E> {
                u32::try_from(v)
                    .ok()
                    .and_then(HexColor::from_u32)
                    .ok_or_else(|| DeError::custom("color out of range"))
            }

            fn visit_i64<E: DeError>(self, v: i64) -> Result<Self::Value, E> {
                let unsigned = u64::try_from(v).map_err(|_| DeError::custom("color is negative"))?;

                self.visit_u64(unsigned)
            }
        }

        deserializer.deserialize_u32(HexColorVisitor)
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.to_u32())
    }
}

/// Parsing a `#RRGGBB` string failed.
#[derive(Debug)]
pub struct HexColorParseError {
    kind: HexColorParseErrorType,
}

impl HexColorParseError {
    const FORMAT: Self = Self {
        kind: HexColorParseErrorType::Format,
    };

    /// Immutable reference to the type of error that occurred.
    #[must_use = "retrieving the type has no effect if left unused"]
    pub const fn kind(&self) -> &HexColorParseErrorType {
        &self.kind
    }
}

impl Display for HexColorParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self.kind {
            HexColorParseErrorType::Format => f.write_str("color is not in #RRGGBB format"),
        }
    }
}

impl Error for HexColorParseError {}

/// Type of [`HexColorParseError`] that occurred.
#[derive(Debug)]
#[non_exhaustive]
pub enum HexColorParseErrorType {
    /// Input is not `#` followed by six hexadecimal digits.
    Format,
}
