use crate::{
    audit_log::{conversion::conversion, ConversionGroup, Placement, RegistryError},
    field::{Field, ImageHashCodec, NestedArrayCodec},
    types::{member::fields, role::AuditLogRole},
};

const AVATAR: Field<ImageHashCodec> = Field::new("avatar", "avatar_hash", ImageHashCodec::new());

/// Roles granted or taken. Discord only reports them through `$add` and
/// `$remove`.
const ROLES: Field<NestedArrayCodec<AuditLogRole>> =
    Field::named("roles", NestedArrayCodec::new());

conversion! {
    static AVATAR_ENTRY = AVATAR => ImageHash;
    static DEAF = fields::DEAF => Bool;
    static MUTE = fields::MUTE => Bool;
    static NICK = fields::NICK => String;
    static PENDING = fields::PENDING => Bool;
    static ROLES_ENTRY = ROLES => Roles;
    static TIMED_OUT_UNTIL = fields::TIMED_OUT_UNTIL => Timestamp;
}

pub(super) fn group() -> Result<ConversionGroup, RegistryError> {
    ConversionGroup::builder("member")
        .entries([
            &AVATAR_ENTRY,
            &DEAF,
            &MUTE,
            &NICK,
            &PENDING,
            &ROLES_ENTRY,
            &TIMED_OUT_UNTIL,
        ])
        .alias("$add", "roles", Placement::Added)
        .alias("$remove", "roles", Placement::Removed)
        .build()
}
