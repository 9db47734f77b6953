//! Guild onboarding, its prompts and their options.

pub mod fields;
pub mod prompt;
pub mod prompt_option;

use super::util::wire_enum;

wire_enum! {
    /// Criteria a guild's onboarding has to meet before it can be enabled.
    pub enum OnboardingMode => ChangeValue::OnboardingMode {
        /// Only default channels count towards the constraints.
        Default = 0 => "default",
        /// Default channels and prompt questions count towards the
        /// constraints.
        Advanced = 1 => "advanced",
    }
    default = Default;
}

wire_enum! {
    pub enum OnboardingPromptType => ChangeValue::OnboardingPromptType {
        MultipleChoice = 0 => "multiple choice",
        Dropdown = 1 => "dropdown",
    }
    default = MultipleChoice;
}
