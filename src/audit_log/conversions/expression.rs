//! Emojis and stickers.

use crate::{
    audit_log::{conversion::conversion, ConversionGroup, RegistryError},
    types::{emoji::fields as emoji, sticker::fields as sticker},
};

conversion! {
    static EMOJI_NAME = emoji::NAME => String;
    static EMOJI_ROLE_IDS = emoji::ROLE_IDS => Ids;

    static STICKER_AVAILABLE = sticker::AVAILABLE => Bool;
    static STICKER_DESCRIPTION = sticker::DESCRIPTION => String;
    static STICKER_FORMAT = sticker::FORMAT => StickerFormat;
    static STICKER_GUILD_ID = sticker::GUILD_ID => Id;
    static STICKER_ID = sticker::ID => Id;
    static STICKER_NAME = sticker::NAME => String;
    static STICKER_TAGS = sticker::TAGS => StringSet;
}

pub(super) fn emoji_group() -> Result<ConversionGroup, RegistryError> {
    ConversionGroup::builder("emoji")
        .entries([&EMOJI_NAME, &EMOJI_ROLE_IDS])
        .build()
}

pub(super) fn sticker_group() -> Result<ConversionGroup, RegistryError> {
    ConversionGroup::builder("sticker")
        .entries([
            &STICKER_AVAILABLE,
            &STICKER_DESCRIPTION,
            &STICKER_FORMAT,
            &STICKER_GUILD_ID,
            &STICKER_ID,
            &STICKER_NAME,
            &STICKER_TAGS,
        ])
        .build()
}
