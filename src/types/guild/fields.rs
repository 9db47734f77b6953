//! Field converters of guilds.

use super::{
    ContentFilterLevel, MessageNotificationLevel, MfaLevel, NsfwLevel, SystemChannelFlags,
    VerificationLevel,
};
use crate::{
    field::{
        BoolCodec, EnumCodec, Field, FlagsCodec, IdCodec, ImageHashCodec, IntCodec,
        NullableStringCodec, StringCodec,
    },
    types::id::marker::{ChannelMarker, GuildMarker, UserMarker},
};

pub const ID: Field<IdCodec<GuildMarker>> = Field::named("id", IdCodec::new());

pub const NAME: Field<StringCodec> = Field::named("name", StringCodec::new().length(2, 100));

pub const DESCRIPTION: Field<NullableStringCodec> =
    Field::named("description", NullableStringCodec::new().max_length(120));

pub const OWNER_ID: Field<IdCodec<UserMarker>> = Field::named("owner_id", IdCodec::new());

pub const ICON: Field<ImageHashCodec> = Field::named("icon", ImageHashCodec::new());

pub const BANNER: Field<ImageHashCodec> = Field::named("banner", ImageHashCodec::new());

pub const DISCOVERY_SPLASH: Field<ImageHashCodec> =
    Field::named("discovery_splash", ImageHashCodec::new());

/// Background of the invite page.
pub const INVITE_SPLASH: Field<ImageHashCodec> =
    Field::new("invite_splash", "splash", ImageHashCodec::new());

pub const AFK_CHANNEL_ID: Field<IdCodec<ChannelMarker>> =
    Field::named("afk_channel_id", IdCodec::new());

/// Seconds of inactivity after which a member is moved to the afk channel.
pub const AFK_TIMEOUT: Field<IntCodec> =
    Field::named("afk_timeout", IntCodec::new(3600).min(60).max(3600));

pub const PUBLIC_UPDATES_CHANNEL_ID: Field<IdCodec<ChannelMarker>> =
    Field::named("public_updates_channel_id", IdCodec::new());

pub const RULES_CHANNEL_ID: Field<IdCodec<ChannelMarker>> =
    Field::named("rules_channel_id", IdCodec::new());

pub const SAFETY_ALERTS_CHANNEL_ID: Field<IdCodec<ChannelMarker>> =
    Field::named("safety_alerts_channel_id", IdCodec::new());

pub const SYSTEM_CHANNEL_ID: Field<IdCodec<ChannelMarker>> =
    Field::named("system_channel_id", IdCodec::new());

pub const SYSTEM_CHANNEL_FLAGS: Field<FlagsCodec<SystemChannelFlags>> =
    Field::named("system_channel_flags", FlagsCodec::new());

pub const WIDGET_CHANNEL_ID: Field<IdCodec<ChannelMarker>> =
    Field::named("widget_channel_id", IdCodec::new());

pub const WIDGET_ENABLED: Field<BoolCodec> =
    Field::named("widget_enabled", BoolCodec::new(false));

/// Whether the boost progress bar is shown.
pub const BOOST_PROGRESS_BAR_ENABLED: Field<BoolCodec> = Field::new(
    "boost_progress_bar_enabled",
    "premium_progress_bar_enabled",
    BoolCodec::new(false),
);

pub const CONTENT_FILTER: Field<EnumCodec<ContentFilterLevel>> =
    Field::new("content_filter", "explicit_content_filter", EnumCodec::new());

pub const MESSAGE_NOTIFICATION: Field<EnumCodec<MessageNotificationLevel>> = Field::new(
    "message_notification",
    "default_message_notifications",
    EnumCodec::new(),
);

pub const MFA: Field<EnumCodec<MfaLevel>> = Field::new("mfa", "mfa_level", EnumCodec::new());

pub const NSFW_LEVEL: Field<EnumCodec<NsfwLevel>> =
    Field::named("nsfw_level", EnumCodec::new());

pub const VERIFICATION_LEVEL: Field<EnumCodec<VerificationLevel>> =
    Field::named("verification_level", EnumCodec::new());

/// Deprecated voice region of the guild.
pub const REGION: Field<NullableStringCodec> =
    Field::named("region", NullableStringCodec::new());

pub const VANITY_CODE: Field<NullableStringCodec> =
    Field::new("vanity_code", "vanity_url_code", NullableStringCodec::new());

#[cfg(test)]
mod tests {
    use super::{AFK_TIMEOUT, BOOST_PROGRESS_BAR_ENABLED, CONTENT_FILTER, VANITY_CODE};
    use crate::{field::WireObject, types::guild::ContentFilterLevel};
    use serde_json::{json, Value};

    #[test]
    fn renamed_keys() {
        let mut data = WireObject::new();
        BOOST_PROGRESS_BAR_ENABLED.put(&true, &mut data, false);
        CONTENT_FILTER.put(&ContentFilterLevel::AllMembers, &mut data, false);
        VANITY_CODE.put(&Some("koishi".to_owned()), &mut data, false);

        assert_eq!(
            Value::Object(data.clone()),
            json!({
                "premium_progress_bar_enabled": true,
                "explicit_content_filter": 2,
                "vanity_url_code": "koishi",
            })
        );
        assert!(BOOST_PROGRESS_BAR_ENABLED.parse(&data));
        assert_eq!(VANITY_CODE.parse(&data).as_deref(), Some("koishi"));
    }

    #[test]
    fn default_enum_omitted() {
        let mut data = WireObject::new();
        CONTENT_FILTER.put(&ContentFilterLevel::Disabled, &mut data, false);
        assert!(data.is_empty());

        CONTENT_FILTER.put(&ContentFilterLevel::Disabled, &mut data, true);
        assert_eq!(Value::Object(data), json!({"explicit_content_filter": 0}));
    }

    #[test]
    fn afk_timeout_bounds() {
        assert_eq!(AFK_TIMEOUT.parse(&WireObject::new()), 3600);
        assert_eq!(AFK_TIMEOUT.validate(60), Ok(60));
        assert!(AFK_TIMEOUT.validate(59).unwrap_err().is_value());
        assert!(AFK_TIMEOUT.validate(true).unwrap_err().is_type());
    }
}
