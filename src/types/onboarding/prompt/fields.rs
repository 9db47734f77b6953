//! Field converters of onboarding prompts.

use super::OPTIONS_MAX;
use crate::{
    field::{BoolCodec, EnumCodec, Field, IdCodec, ObjectArrayCodec, StringCodec},
    types::{id::marker::OnboardingPromptMarker, onboarding::OnboardingPromptType},
};

pub const ID: Field<IdCodec<OnboardingPromptMarker>> = Field::named("id", IdCodec::new());

/// Question of the prompt. Stored under `title`.
pub const NAME: Field<StringCodec> =
    Field::new("name", "title", StringCodec::new().max_length(100).emit_defaults());

/// Whether the prompt is shown during onboarding, rather than only in the
/// channels and roles page.
pub const IN_ONBOARDING: Field<BoolCodec> = Field::named("in_onboarding", BoolCodec::new(true));

pub const REQUIRED: Field<BoolCodec> = Field::named("required", BoolCodec::new(false));

pub const SINGLE_SELECT: Field<BoolCodec> = Field::named("single_select", BoolCodec::new(false));

pub const TYPE: Field<EnumCodec<OnboardingPromptType>> = Field::named("type", EnumCodec::new());

/// Options of the prompt, in wire form.
pub const OPTIONS: Field<ObjectArrayCodec> =
    Field::named("options", ObjectArrayCodec::new().max_items(OPTIONS_MAX));

#[cfg(test)]
mod tests {
    use super::{IN_ONBOARDING, NAME, TYPE};
    use crate::{field::WireObject, types::onboarding::OnboardingPromptType};
    use serde_json::{json, Value};

    #[test]
    fn name_is_title() {
        let data = json!({"title": "Pick one"});

        assert_eq!(NAME.parse(data.as_object().unwrap()), "Pick one");
    }

    #[test]
    fn in_onboarding_defaults_to_true() {
        let mut data = WireObject::new();
        IN_ONBOARDING.put(&true, &mut data, false);
        assert!(data.is_empty());
        assert!(IN_ONBOARDING.parse(&data));
    }

    #[test]
    fn prompt_type() {
        let mut data = WireObject::new();
        TYPE.put(&OnboardingPromptType::Dropdown, &mut data, false);

        assert_eq!(Value::Object(data), json!({"type": 1}));
    }
}
