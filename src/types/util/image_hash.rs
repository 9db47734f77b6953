//! Efficient parsing and representation of image hashes.
//!
//! Icons, avatars, banners and splashes are identified by a 128-bit hash
//! sent as 32 lowercase hexadecimal characters. Animated images carry an
//! `a_` prefix.

use serde::{
    de::{Deserialize, Deserializer, Error as DeError, Visitor},
    ser::{Serialize, Serializer},
};
use std::{
    error::Error,
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

/// Prefix of animated image hashes.
const ANIMATED_PREFIX: &str = "a_";

/// Number of hexadecimal characters in a hash.
const HASH_LENGTH: usize = 32;

/// Parsed image hash.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct ImageHash {
    animated: bool,
    bytes: [u8; 16],
}

impl ImageHash {
    /// Create an image hash from raw parts.
    pub const fn new(bytes: [u8; 16], animated: bool) -> Self {
        Self { animated, bytes }
    }

    /// Parse an image hash as sent by Discord.
    ///
    /// # Errors
    ///
    /// Returns [`ImageHashParseErrorType::Format`] if the input is not 32
    /// hexadecimal characters with an optional `a_` prefix.
    pub fn parse(value: &str) -> Result<Self, ImageHashParseError> {
        let (animated, digits) = match value.strip_prefix(ANIMATED_PREFIX) {
            Some(rest) => (true, rest),
            None => (false, value),
        };

        if digits.len() != HASH_LENGTH {
            return Err(ImageHashParseError::FORMAT);
        }

        let mut bytes = [0; 16];

        for (index, byte) in bytes.iter_mut().enumerate() {
            let pair = digits
                .get(index * 2..index * 2 + 2)
                .ok_or(ImageHashParseError::FORMAT)?;
            *byte = u8::from_str_radix(pair, 16).map_err(|_| ImageHashParseError::FORMAT)?;
        }

        Ok(Self { animated, bytes })
    }

    /// Whether the hash is for an animated image.
    pub const fn is_animated(self) -> bool {
        self.animated
    }

    /// The raw 16 bytes of the hash.
    pub const fn bytes(self) -> [u8; 16] {
        self.bytes
    }
}

impl Display for ImageHash {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        if self.animated {
            f.write_str(ANIMATED_PREFIX)?;
        }

        for byte in self.bytes {
            write!(f, "{byte:02x}")?;
        }

        Ok(())
    }
}

impl FromStr for ImageHash {
    type Err = ImageHashParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<'de> Deserialize<'de> for ImageHash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ImageHashVisitor;

        impl Visitor<'_> for ImageHashVisitor {
            type Value = ImageHash;

            fn expecting(&self, f: &mut Formatter<'_>) -> FmtResult {
                f.write_str("an image hash")
            }

            fn visit_str<E: DeError>(self, v: &str) -> Result<Self::Value, E> {
                ImageHash::parse(v).map_err(DeError::custom)
            }
        }

        deserializer.deserialize_str(ImageHashVisitor)
    }
}

impl Serialize for ImageHash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Parsing an image hash failed.
#[derive(Debug)]
pub struct ImageHashParseError {
    kind: ImageHashParseErrorType,
}

impl ImageHashParseError {
    const FORMAT: Self = Self {
        kind: ImageHashParseErrorType::Format,
    };

    /// Immutable reference to the type of error that occurred.
    #[must_use = "retrieving the type has no effect if left unused"]
    pub const fn kind(&self) -> &ImageHashParseErrorType {
        &self.kind
    }
}

impl Display for ImageHashParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self.kind {
            ImageHashParseErrorType::Format => {
                f.write_str("image hash is not 32 hexadecimal characters")
            }
        }
    }
}

impl Error for ImageHashParseError {}

/// Type of [`ImageHashParseError`] that occurred.
#[derive(Debug)]
#[non_exhaustive]
pub enum ImageHashParseErrorType {
    /// Input is not a (possibly `a_` prefixed) 32 character hex string.
    Format,
}

#[cfg(test)]
mod tests {
    use super::{ImageHash, ImageHashParseErrorType};
    use serde_test::Token;

    const HASH: &str = "1acefe340fafb4ecefae407f3abdb323";

    #[test]
    fn parse_static() {
        let hash = ImageHash::parse(HASH).unwrap();
        assert!(!hash.is_animated());
        assert_eq!(hash.bytes()[0], 0x1a);
        assert_eq!(hash.to_string(), HASH);
    }

    #[test]
    fn parse_animated() {
        let input = format!("a_{HASH}");
        let hash = ImageHash::parse(&input).unwrap();
        assert!(hash.is_animated());
        assert_eq!(hash.to_string(), input);
    }

    #[test]
    fn parse_rejects_bad_input() {
        for input in ["", "a_", "1acefe", "zzcefe340fafb4ecefae407f3abdb323"] {
            let err = ImageHash::parse(input).unwrap_err();
            assert!(matches!(err.kind(), ImageHashParseErrorType::Format));
        }
    }

    #[test]
    fn serde_tokens() {
        let hash = ImageHash::parse(HASH).unwrap();
        serde_test::assert_tokens(&hash, &[Token::Str(HASH)]);
    }
}
