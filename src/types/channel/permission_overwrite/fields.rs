use super::PermissionOverwriteTargetType;
use crate::{
    field::{EnumCodec, Field, FlagsCodec, IdCodec},
    types::{id::marker::GenericMarker, permissions::Permissions},
};

pub const ALLOW: Field<FlagsCodec<Permissions>> = Field::named("allow", FlagsCodec::new());

pub const DENY: Field<FlagsCodec<Permissions>> = Field::named("deny", FlagsCodec::new());

/// ID of the role or user, depending on [`TARGET_TYPE`].
pub const TARGET_ID: Field<IdCodec<GenericMarker>> =
    Field::new("target_id", "id", IdCodec::new());

pub const TARGET_TYPE: Field<EnumCodec<PermissionOverwriteTargetType>> =
    Field::new("target_type", "type", EnumCodec::new().emit_defaults());
