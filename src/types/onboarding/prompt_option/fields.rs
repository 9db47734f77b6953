//! Field converters of onboarding prompt options.

use crate::{
    field::{Field, IdArrayCodec, IdCodec, NullableStringCodec, StringCodec},
    types::id::marker::{ChannelMarker, OnboardingPromptOptionMarker, RoleMarker},
};

pub const ID: Field<IdCodec<OnboardingPromptOptionMarker>> = Field::named("id", IdCodec::new());

/// Title of the option. Always written, even when empty.
pub const NAME: Field<StringCodec> =
    Field::new("name", "title", StringCodec::new().max_length(50).emit_defaults());

pub const DESCRIPTION: Field<NullableStringCodec> =
    Field::named("description", NullableStringCodec::new().max_length(100));

/// Channels the member is added to when picking the option.
pub const CHANNEL_IDS: Field<IdArrayCodec<ChannelMarker>> =
    Field::named("channel_ids", IdArrayCodec::new());

/// Roles the member receives when picking the option.
pub const ROLE_IDS: Field<IdArrayCodec<RoleMarker>> =
    Field::named("role_ids", IdArrayCodec::new());
