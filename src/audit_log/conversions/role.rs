use crate::{
    audit_log::{conversion::conversion, ConversionGroup, RegistryError},
    field::{Field, ImageHashCodec},
    types::role::fields,
};

const ICON: Field<ImageHashCodec> = Field::new("icon", "icon_hash", ImageHashCodec::new());

conversion! {
    static COLOR = fields::COLOR => Color;
    static FLAGS = fields::FLAGS => RoleFlags;
    static ICON_ENTRY = ICON => ImageHash;
    static MENTIONABLE = fields::MENTIONABLE => Bool;
    static NAME = fields::NAME => String;
    static PERMISSIONS = fields::PERMISSIONS => Permissions;
    static POSITION = fields::POSITION => Integer;
    static SEPARATED = fields::SEPARATED => Bool;
    static UNICODE_EMOJI = fields::UNICODE_EMOJI => String;
}

pub(super) fn group() -> Result<ConversionGroup, RegistryError> {
    ConversionGroup::builder("role")
        .entries([
            &COLOR,
            &FLAGS,
            &ICON_ENTRY,
            &MENTIONABLE,
            &NAME,
            &PERMISSIONS,
            &POSITION,
            &SEPARATED,
            &UNICODE_EMOJI,
        ])
        .build()
}
