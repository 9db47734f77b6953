use super::CHANNEL_ID;
use crate::{
    audit_log::{conversion::conversion, ConversionGroup, RegistryError},
    field::{Field, ImageHashCodec},
    types::webhook::fields,
};

const AVATAR: Field<ImageHashCodec> = Field::new("avatar", "avatar_hash", ImageHashCodec::new());

conversion! {
    static APPLICATION_ID = fields::APPLICATION_ID => Id;
    static AVATAR_ENTRY = AVATAR => ImageHash;
    static NAME = fields::NAME => String;
}

pub(super) fn group() -> Result<ConversionGroup, RegistryError> {
    ConversionGroup::builder("webhook")
        .entries([&APPLICATION_ID, &AVATAR_ENTRY, &CHANNEL_ID, &NAME])
        .build()
}
