//! Field converters of guild integrations.

use super::IntegrationExpireBehavior;
use crate::{
    field::{BoolCodec, EnumCodec, Field, IdCodec, IntCodec, StringCodec},
    types::id::marker::IntegrationMarker,
};

pub const ID: Field<IdCodec<IntegrationMarker>> = Field::named("id", IdCodec::new());

pub const NAME: Field<StringCodec> = Field::named("name", StringCodec::new());

/// Whether emoticons of a Twitch integration are synced.
pub const ENABLE_EMOTICONS: Field<BoolCodec> =
    Field::named("enable_emoticons", BoolCodec::new(false));

pub const EXPIRE_BEHAVIOR: Field<EnumCodec<IntegrationExpireBehavior>> =
    Field::named("expire_behavior", EnumCodec::new());

/// Days subscribers are kept after their subscription expired.
pub const EXPIRE_GRACE_PERIOD: Field<IntCodec> =
    Field::named("expire_grace_period", IntCodec::new(0).min(0).max(30));
