use crate::{
    audit_log::{conversion::conversion, ConversionGroup, RegistryError},
    field::{Field, ImageHashCodec},
    types::guild::fields,
};

const BANNER: Field<ImageHashCodec> = Field::new("banner", "banner_hash", ImageHashCodec::new());

const DISCOVERY_SPLASH: Field<ImageHashCodec> = Field::new(
    "discovery_splash",
    "discovery_splash_hash",
    ImageHashCodec::new(),
);

const ICON: Field<ImageHashCodec> = Field::new("icon", "icon_hash", ImageHashCodec::new());

const INVITE_SPLASH: Field<ImageHashCodec> =
    Field::new("invite_splash", "splash_hash", ImageHashCodec::new());

conversion! {
    static AFK_CHANNEL_ID = fields::AFK_CHANNEL_ID => Id;
    static AFK_TIMEOUT = fields::AFK_TIMEOUT => Integer;
    static BANNER_ENTRY = BANNER => ImageHash;
    static BOOST_PROGRESS_BAR_ENABLED = fields::BOOST_PROGRESS_BAR_ENABLED => Bool;
    static CONTENT_FILTER = fields::CONTENT_FILTER => ContentFilterLevel;
    static DESCRIPTION = fields::DESCRIPTION => String;
    static DISCOVERY_SPLASH_ENTRY = DISCOVERY_SPLASH => ImageHash;
    static ICON_ENTRY = ICON => ImageHash;
    static INVITE_SPLASH_ENTRY = INVITE_SPLASH => ImageHash;
    static MESSAGE_NOTIFICATION = fields::MESSAGE_NOTIFICATION => MessageNotificationLevel;
    static MFA = fields::MFA => MfaLevel;
    static NAME = fields::NAME => String;
    static NSFW_LEVEL = fields::NSFW_LEVEL => NsfwLevel;
    static OWNER_ID = fields::OWNER_ID => Id;
    static PUBLIC_UPDATES_CHANNEL_ID = fields::PUBLIC_UPDATES_CHANNEL_ID => Id;
    static REGION = fields::REGION => String;
    static RULES_CHANNEL_ID = fields::RULES_CHANNEL_ID => Id;
    static SAFETY_ALERTS_CHANNEL_ID = fields::SAFETY_ALERTS_CHANNEL_ID => Id;
    static SYSTEM_CHANNEL_FLAGS = fields::SYSTEM_CHANNEL_FLAGS => SystemChannelFlags;
    static SYSTEM_CHANNEL_ID = fields::SYSTEM_CHANNEL_ID => Id;
    static VANITY_CODE = fields::VANITY_CODE => String;
    static VERIFICATION_LEVEL = fields::VERIFICATION_LEVEL => VerificationLevel;
    static WIDGET_CHANNEL_ID = fields::WIDGET_CHANNEL_ID => Id;
    static WIDGET_ENABLED = fields::WIDGET_ENABLED => Bool;
}

pub(super) fn group() -> Result<ConversionGroup, RegistryError> {
    ConversionGroup::builder("guild")
        .entries([
            &AFK_CHANNEL_ID,
            &AFK_TIMEOUT,
            &BANNER_ENTRY,
            &BOOST_PROGRESS_BAR_ENABLED,
            &CONTENT_FILTER,
            &DESCRIPTION,
            &DISCOVERY_SPLASH_ENTRY,
            &ICON_ENTRY,
            &INVITE_SPLASH_ENTRY,
            &MESSAGE_NOTIFICATION,
            &MFA,
            &NAME,
            &NSFW_LEVEL,
            &OWNER_ID,
            &PUBLIC_UPDATES_CHANNEL_ID,
            &REGION,
            &RULES_CHANNEL_ID,
            &SAFETY_ALERTS_CHANNEL_ID,
            &SYSTEM_CHANNEL_FLAGS,
            &SYSTEM_CHANNEL_ID,
            &VANITY_CODE,
            &VERIFICATION_LEVEL,
            &WIDGET_CHANNEL_ID,
            &WIDGET_ENABLED,
        ])
        .build()
}
