//! Guild stickers.

pub mod fields;

use super::util::wire_enum;

wire_enum! {
    /// Image format of a sticker.
    pub enum StickerFormat => ChangeValue::StickerFormat {
        None = 0 => "none",
        Png = 1 => "png",
        Apng = 2 => "apng",
        Lottie = 3 => "lottie",
        Gif = 4 => "gif",
    }
    default = None;
}
