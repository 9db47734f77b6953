//! ISO 8601 timestamps as Discord sends them.
//!
//! Discord writes microseconds on some attributes
//! (`2021-01-01T01:01:01.010000+00:00`) and leaves them out on others
//! (`2021-01-01T01:01:01+00:00`). Both parse; [`Timestamp`] always writes
//! microseconds.

mod error;

pub use self::error::{TimestampParseError, TimestampParseErrorType};

use chrono::{DateTime, Datelike, SubsecRound, Utc};
use serde::{
    de::{Deserialize, Deserializer, Error as DeError},
    ser::{Serialize, Serializer},
};
use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    ops::RangeInclusive,
    str::FromStr,
};

const WIRE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f+00:00";

/// Years with a four digit ISO 8601 form.
const WIRE_YEARS: RangeInclusive<i32> = 0..=9999;

/// A UTC instant with microsecond precision.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Parse a datetime in any UTC offset.
    ///
    /// # Errors
    ///
    /// Returns a [`TimestampParseErrorType::Format`] error if the input has no
    /// `T` between date and time, and a [`TimestampParseErrorType::Parsing`]
    /// error if it isn't valid RFC 3339.
    pub fn parse(datetime: &str) -> Result<Self, TimestampParseError> {
        if !datetime.contains('T') {
            return Err(TimestampParseError::new(TimestampParseErrorType::Format));
        }

        DateTime::parse_from_rfc3339(datetime)
            .map(|parsed| Self::from(parsed.with_timezone(&Utc)))
            .map_err(TimestampParseError::chrono)
    }

    /// Seconds since the Unix epoch.
    ///
    /// # Errors
    ///
    /// Returns a [`TimestampParseErrorType::Range`] error if the instant
    /// falls outside the years 0 to 9999.
    pub fn from_secs(unix_seconds: i64) -> Result<Self, TimestampParseError> {
        DateTime::from_timestamp(unix_seconds, 0)
            .map(Self)
            .filter(Self::is_wire_representable)
            .ok_or(TimestampParseError::new(TimestampParseErrorType::Range))
    }

    /// Whether the year has a four digit form, so the written timestamp
    /// parses back.
    pub fn is_wire_representable(&self) -> bool {
        WIRE_YEARS.contains(&self.0.year())
    }

    pub const fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }
}

impl From<DateTime<Utc>> for Timestamp {
    /// Nanoseconds are dropped so the value survives being written and read
    /// back.
    fn from(datetime: DateTime<Utc>) -> Self {
        Self(datetime.trunc_subsecs(6))
    }
}

impl Display for Timestamp {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0.format(WIRE_FORMAT), f)
    }
}

impl FromStr for Timestamp {
    type Err = TimestampParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let datetime = String::deserialize(deserializer)?;

        Self::parse(&datetime).map_err(DeError::custom)
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
