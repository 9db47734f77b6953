//! Field converters of guild onboarding.

use super::OnboardingMode;
use crate::{
    field::{BoolCodec, EnumCodec, Field, IdArrayCodec, IdCodec, ObjectArrayCodec},
    types::id::marker::{ChannelMarker, GuildMarker},
};

pub const GUILD_ID: Field<IdCodec<GuildMarker>> = Field::named("guild_id", IdCodec::new());

/// Channels members are added to by default.
pub const DEFAULT_CHANNEL_IDS: Field<IdArrayCodec<ChannelMarker>> =
    Field::named("default_channel_ids", IdArrayCodec::new());

pub const ENABLED: Field<BoolCodec> = Field::named("enabled", BoolCodec::new(false));

pub const MODE: Field<EnumCodec<OnboardingMode>> = Field::named("mode", EnumCodec::new());

/// Prompts of the onboarding, in wire form.
pub const PROMPTS: Field<ObjectArrayCodec> = Field::named("prompts", ObjectArrayCodec::new());
