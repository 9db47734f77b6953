//! Field converters of webhooks.

use crate::{
    field::{Field, IdCodec, ImageHashCodec, StringCodec},
    types::id::marker::{ApplicationMarker, ChannelMarker, GuildMarker, WebhookMarker},
};

pub const ID: Field<IdCodec<WebhookMarker>> = Field::named("id", IdCodec::new());

pub const NAME: Field<StringCodec> = Field::named("name", StringCodec::new().length(1, 80));

pub const AVATAR: Field<ImageHashCodec> = Field::named("avatar", ImageHashCodec::new());

pub const CHANNEL_ID: Field<IdCodec<ChannelMarker>> = Field::named("channel_id", IdCodec::new());

pub const GUILD_ID: Field<IdCodec<GuildMarker>> = Field::named("guild_id", IdCodec::new());

/// Application that created the webhook.
pub const APPLICATION_ID: Field<IdCodec<ApplicationMarker>> =
    Field::named("application_id", IdCodec::new());

#[cfg(test)]
mod tests {
    use super::{AVATAR, NAME};

    #[test]
    fn name_bounds() {
        assert!(NAME.validate("").unwrap_err().is_value());
        assert!(NAME.validate("a".repeat(81)).unwrap_err().is_value());
        assert_eq!(NAME.validate("hook"), Ok("hook".to_owned()));
    }

    #[test]
    fn avatar() {
        assert_eq!(AVATAR.validate(None::<String>), Ok(None));
        assert!(AVATAR.validate("zz").unwrap_err().is_value());
    }
}
