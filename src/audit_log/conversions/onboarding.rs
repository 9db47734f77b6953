//! Guild onboarding and its prompts.

use crate::{
    audit_log::{conversion::conversion, ConversionGroup, RegistryError},
    types::onboarding::{fields as onboarding, prompt::fields as prompt},
};

conversion! {
    static DEFAULT_CHANNEL_IDS = onboarding::DEFAULT_CHANNEL_IDS => Ids;
    static ENABLED = onboarding::ENABLED => Bool;
    static MODE = onboarding::MODE => OnboardingMode;
    static PROMPTS = onboarding::PROMPTS => Objects;

    static IN_ONBOARDING = prompt::IN_ONBOARDING => Bool;
    static NAME = prompt::NAME => String;
    static OPTIONS = prompt::OPTIONS => Objects;
    static REQUIRED = prompt::REQUIRED => Bool;
    static SINGLE_SELECT = prompt::SINGLE_SELECT => Bool;
    static TYPE = prompt::TYPE => OnboardingPromptType;
}

pub(super) fn onboarding_group() -> Result<ConversionGroup, RegistryError> {
    ConversionGroup::builder("onboarding")
        .entries([&DEFAULT_CHANNEL_IDS, &ENABLED, &MODE, &PROMPTS])
        .build()
}

pub(super) fn prompt_group() -> Result<ConversionGroup, RegistryError> {
    ConversionGroup::builder("onboarding prompt")
        .entries([
            &IN_ONBOARDING,
            &NAME,
            &OPTIONS,
            &REQUIRED,
            &SINGLE_SELECT,
            &TYPE,
        ])
        .build()
}
