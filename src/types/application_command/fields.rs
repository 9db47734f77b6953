//! Field converters of application commands and application command
//! permissions.

use super::{DESCRIPTION_LENGTH, NAME_LENGTH};
use crate::{
    field::{BoolCodec, Field, IdCodec, StringCodec},
    types::id::marker::{ApplicationMarker, ChannelMarker, CommandMarker, GuildMarker},
};

pub const ID: Field<IdCodec<CommandMarker>> = Field::named("id", IdCodec::new());

/// Application owning the command.
pub const APPLICATION_ID: Field<IdCodec<ApplicationMarker>> =
    Field::named("application_id", IdCodec::new());

/// Guild the command or permission is bound to.
pub const GUILD_ID: Field<IdCodec<GuildMarker>> = Field::named("guild_id", IdCodec::new());

/// Channel targeted by a permission overwrite.
pub const CHANNEL_ID: Field<IdCodec<ChannelMarker>> = Field::named("channel_id", IdCodec::new());

pub const NAME: Field<StringCodec> = Field::named(
    "name",
    StringCodec::new().length(NAME_LENGTH.0, NAME_LENGTH.1),
);

pub const DESCRIPTION: Field<StringCodec> = Field::named(
    "description",
    StringCodec::new().length(DESCRIPTION_LENGTH.0, DESCRIPTION_LENGTH.1),
);

pub const NSFW: Field<BoolCodec> = Field::named("nsfw", BoolCodec::new(false));

#[cfg(test)]
mod tests {
    use super::{APPLICATION_ID, DESCRIPTION, NAME};
    use crate::{field::WireObject, types::id::Id};
    use serde_json::{json, Value};

    #[test]
    fn ids_are_strings_on_the_wire() {
        let mut data = WireObject::new();
        APPLICATION_ID.put(&Some(Id::new(202304260001)), &mut data, false);

        assert_eq!(Value::Object(data.clone()), json!({"application_id": "202304260001"}));
        assert_eq!(APPLICATION_ID.parse(&data), Some(Id::new(202304260001)));
    }

    #[test]
    fn unset_id_omitted() {
        let mut data = WireObject::new();
        APPLICATION_ID.put(&None, &mut data, false);
        assert!(data.is_empty());

        APPLICATION_ID.put(&None, &mut data, true);
        assert_eq!(Value::Object(data), json!({"application_id": null}));
    }

    #[test]
    fn name_and_description_lengths() {
        assert!(NAME.validate("").unwrap_err().is_value());
        assert!(NAME.validate("a".repeat(33)).unwrap_err().is_value());
        assert!(NAME.validate("a".repeat(32)).is_ok());
        assert!(DESCRIPTION.validate("a").unwrap_err().is_value());
        assert!(DESCRIPTION.validate("ab").is_ok());
    }
}
