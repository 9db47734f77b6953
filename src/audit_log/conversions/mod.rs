//! The conversion group of every [`ChangeTarget`].
//!
//! Attribute names follow the entity fields; the wire keys are the ones
//! audit logs report, which sometimes differ from the entity's own keys
//! (`icon_hash` rather than `icon`).
//!
//! [`ChangeTarget`]: super::ChangeTarget

mod auto_moderation;
mod channel;
mod expression;
mod guild;
mod integration;
mod invite;
mod member;
mod onboarding;
mod role;
mod scheduled_event;
mod webhook;

use super::{conversion::conversion, ChangeTarget, ConversionGroup, RegistryError};
use crate::types::invite::fields as invite_fields;

conversion! {
    /// Shared by every group reporting the channel an object lives in.
    static CHANNEL_ID = invite_fields::CHANNEL_ID => Id;
}

/// Build the group of a target.
pub(super) fn group(target: ChangeTarget) -> Result<ConversionGroup, RegistryError> {
    match target {
        ChangeTarget::ApplicationCommand => integration::application_command_group(),
        ChangeTarget::AutoModerationRule => auto_moderation::group(),
        ChangeTarget::Channel => channel::group(),
        ChangeTarget::Emoji => expression::emoji_group(),
        ChangeTarget::Guild => guild::group(),
        ChangeTarget::Integration => integration::integration_group(),
        ChangeTarget::Invite => invite::group(),
        ChangeTarget::Member => member::group(),
        ChangeTarget::Onboarding => onboarding::onboarding_group(),
        ChangeTarget::OnboardingPrompt => onboarding::prompt_group(),
        ChangeTarget::PermissionOverwrite => channel::permission_overwrite_group(),
        ChangeTarget::Role => role::group(),
        ChangeTarget::ScheduledEvent => scheduled_event::scheduled_event_group(),
        ChangeTarget::StageInstance => scheduled_event::stage_instance_group(),
        ChangeTarget::Sticker => expression::sticker_group(),
        ChangeTarget::Webhook => webhook::group(),
    }
}
