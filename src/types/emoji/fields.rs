//! Field converters of custom emojis.

use crate::{
    field::{BoolCodec, Field, IdArrayCodec, IdCodec, StringCodec},
    types::id::marker::{EmojiMarker, RoleMarker},
};

pub const ID: Field<IdCodec<EmojiMarker>> = Field::named("id", IdCodec::new());

pub const NAME: Field<StringCodec> = Field::named("name", StringCodec::new().length(2, 32));

pub const ANIMATED: Field<BoolCodec> = Field::named("animated", BoolCodec::new(false));

/// Whether the emoji can be used, false after losing boosts.
pub const AVAILABLE: Field<BoolCodec> = Field::named("available", BoolCodec::new(true));

/// Roles allowed to use the emoji. `None` allows everyone.
pub const ROLE_IDS: Field<IdArrayCodec<RoleMarker>> =
    Field::new("role_ids", "roles", IdArrayCodec::new());

#[cfg(test)]
mod tests {
    use super::{AVAILABLE, ROLE_IDS};
    use crate::{field::WireObject, types::id::Id};
    use serde_json::json;

    #[test]
    fn role_ids() {
        assert_eq!(ROLE_IDS.validate(["5", "4"]), Ok(Some(vec![Id::new(4), Id::new(5)])));
        assert_eq!(ROLE_IDS.validate(Vec::<u64>::new()), Ok(None));
        assert!(ROLE_IDS.validate([1.5]).unwrap_err().is_type());
    }

    #[test]
    fn available_defaults_to_true() {
        assert!(AVAILABLE.parse(&WireObject::new()));
        assert!(!AVAILABLE.parse(json!({"available": false}).as_object().unwrap()));
    }
}
