//! Field converters of roles.

use super::RoleFlags;
use crate::{
    field::{
        BoolCodec, ColorCodec, Field, FlagsCodec, IdCodec, ImageHashCodec, IntCodec,
        NullableStringCodec, StringCodec,
    },
    types::{id::marker::RoleMarker, permissions::Permissions},
};

pub const ID: Field<IdCodec<RoleMarker>> = Field::named("id", IdCodec::new());

pub const NAME: Field<StringCodec> = Field::named("name", StringCodec::new().length(1, 100));

pub const COLOR: Field<ColorCodec> = Field::named("color", ColorCodec::new());

/// Whether members of the role are listed separately in the member list.
pub const SEPARATED: Field<BoolCodec> = Field::new("separated", "hoist", BoolCodec::new(false));

pub const ICON: Field<ImageHashCodec> = Field::named("icon", ImageHashCodec::new());

pub const UNICODE_EMOJI: Field<NullableStringCodec> =
    Field::named("unicode_emoji", NullableStringCodec::new());

/// Whether the role is managed by an integration.
pub const MANAGED: Field<BoolCodec> = Field::named("managed", BoolCodec::new(false));

pub const MENTIONABLE: Field<BoolCodec> = Field::named("mentionable", BoolCodec::new(false));

pub const PERMISSIONS: Field<FlagsCodec<Permissions>> =
    Field::named("permissions", FlagsCodec::new());

pub const POSITION: Field<IntCodec> = Field::named("position", IntCodec::new(0).min(0));

pub const FLAGS: Field<FlagsCodec<RoleFlags>> = Field::named("flags", FlagsCodec::new());
