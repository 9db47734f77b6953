//! Field converters of invites.

use super::{MAX_AGE_MAX, MAX_USES_MAX};
use crate::{
    field::{BoolCodec, Field, IdCodec, IntCodec, StringCodec},
    types::id::marker::{ChannelMarker, UserMarker},
};

pub const CODE: Field<StringCodec> = Field::named("code", StringCodec::new());

pub const CHANNEL_ID: Field<IdCodec<ChannelMarker>> = Field::named("channel_id", IdCodec::new());

pub const INVITER_ID: Field<IdCodec<UserMarker>> = Field::named("inviter_id", IdCodec::new());

/// Seconds until the invite expires, `0` for never.
pub const MAX_AGE: Field<IntCodec> =
    Field::named("max_age", IntCodec::new(86_400).min(0).max(MAX_AGE_MAX));

/// Times the invite can be used, `0` for unlimited.
pub const MAX_USES: Field<IntCodec> =
    Field::named("max_uses", IntCodec::new(0).min(0).max(MAX_USES_MAX));

/// Whether members joining through the invite are kicked when they go offline
/// without a role.
pub const TEMPORARY: Field<BoolCodec> = Field::named("temporary", BoolCodec::new(false));

pub const USES: Field<IntCodec> = Field::named("uses", IntCodec::new(0).min(0));
