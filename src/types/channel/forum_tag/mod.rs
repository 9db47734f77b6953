//! Tags of forum and media channels.

pub mod fields;

use crate::{
    field::{Nested, ValidationError, WireObject},
    types::id::{
        marker::{EmojiMarker, TagMarker},
        Id,
    },
    value::into_change,
};

/// A tag posts of a forum channel can be labeled with.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ForumTag {
    /// Emoji shown next to the tag, if it is a custom emoji.
    pub emoji_id: Option<Id<EmojiMarker>>,
    /// Unicode emoji shown next to the tag.
    pub emoji_name: Option<String>,
    pub id: Option<Id<TagMarker>>,
    /// Whether only moderators can apply the tag.
    pub moderated: bool,
    pub name: String,
}

impl Nested for ForumTag {
    fn from_wire(data: &WireObject) -> Self {
        Self {
            emoji_id: fields::EMOJI_ID.parse(data),
            emoji_name: fields::EMOJI_NAME.parse(data),
            id: fields::ID.parse(data),
            moderated: fields::MODERATED.parse(data),
            name: fields::NAME.parse(data),
        }
    }

    fn to_wire(&self, include_defaults: bool) -> WireObject {
        let mut data = WireObject::new();

        fields::EMOJI_ID.put(&self.emoji_id, &mut data, include_defaults);
        fields::EMOJI_NAME.put(&self.emoji_name, &mut data, include_defaults);
        fields::ID.put(&self.id, &mut data, include_defaults);
        fields::MODERATED.put(&self.moderated, &mut data, include_defaults);
        fields::NAME.put(&self.name, &mut data, include_defaults);

        data
    }

    fn validate_wire(data: &WireObject) -> Result<Self, ValidationError> {
        let value = |key: &str| data.get(key);

        Ok(Self {
            emoji_id: fields::EMOJI_ID.validate(value(fields::EMOJI_ID.key()))?,
            emoji_name: fields::EMOJI_NAME.validate(value(fields::EMOJI_NAME.key()))?,
            id: fields::ID.validate(value(fields::ID.key()))?,
            moderated: fields::MODERATED.parse(data),
            name: fields::NAME.validate(value(fields::NAME.key()))?,
        })
    }
}

into_change!(Vec<ForumTag> => ForumTags);

#[cfg(test)]
mod tests {
    use super::ForumTag;
    use crate::{field::Nested, types::id::Id};
    use serde_json::json;

    #[test]
    fn wire_round_trip() {
        let tag = ForumTag {
            emoji_id: None,
            emoji_name: Some("❤".to_owned()),
            id: Some(Id::new(202304120159)),
            moderated: false,
            name: "Yup".to_owned(),
        };
        let data = tag.to_wire(false);

        assert_eq!(
            json!(data),
            json!({"emoji_name": "❤", "id": "202304120159", "name": "Yup"})
        );
        assert_eq!(ForumTag::from_wire(&data), tag);
        assert_eq!(ForumTag::from_wire(&tag.to_wire(true)), tag);
    }

    #[test]
    fn validation_requires_name() {
        let data = json!({"name": ""});

        assert!(ForumTag::validate_wire(data.as_object().unwrap()).is_err());
        assert!(ForumTag::validate_wire(json!({"name": "a"}).as_object().unwrap()).is_ok());
        assert!(ForumTag::validate_wire(json!({}).as_object().unwrap()).is_err());
    }
}
