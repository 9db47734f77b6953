//! Resolution of audit log change keys to their conversions.

use super::{conversions, ConversionGroup, RegistryError, Resolved};
use std::{
    collections::HashMap,
    fmt::{Display, Formatter, Result as FmtResult},
    sync::LazyLock,
};

/// Kind of object an audit log entry reports changes of.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum ChangeTarget {
    ApplicationCommand,
    AutoModerationRule,
    Channel,
    Emoji,
    Guild,
    Integration,
    Invite,
    Member,
    Onboarding,
    OnboardingPrompt,
    /// A single permission overwrite of a channel.
    PermissionOverwrite,
    Role,
    ScheduledEvent,
    StageInstance,
    Sticker,
    Webhook,
}

impl ChangeTarget {
    /// Every target, each with a conversion group.
    pub const ALL: &'static [ChangeTarget] = &[
        ChangeTarget::ApplicationCommand,
        ChangeTarget::AutoModerationRule,
        ChangeTarget::Channel,
        ChangeTarget::Emoji,
        ChangeTarget::Guild,
        ChangeTarget::Integration,
        ChangeTarget::Invite,
        ChangeTarget::Member,
        ChangeTarget::Onboarding,
        ChangeTarget::OnboardingPrompt,
        ChangeTarget::PermissionOverwrite,
        ChangeTarget::Role,
        ChangeTarget::ScheduledEvent,
        ChangeTarget::StageInstance,
        ChangeTarget::Sticker,
        ChangeTarget::Webhook,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            ChangeTarget::ApplicationCommand => "application command",
            ChangeTarget::AutoModerationRule => "auto moderation rule",
            ChangeTarget::Channel => "channel",
            ChangeTarget::Emoji => "emoji",
            ChangeTarget::Guild => "guild",
            ChangeTarget::Integration => "integration",
            ChangeTarget::Invite => "invite",
            ChangeTarget::Member => "member",
            ChangeTarget::Onboarding => "onboarding",
            ChangeTarget::OnboardingPrompt => "onboarding prompt",
            ChangeTarget::PermissionOverwrite => "permission overwrite",
            ChangeTarget::Role => "role",
            ChangeTarget::ScheduledEvent => "scheduled event",
            ChangeTarget::StageInstance => "stage instance",
            ChangeTarget::Sticker => "sticker",
            ChangeTarget::Webhook => "webhook",
        }
    }
}

impl Display for ChangeTarget {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.name())
    }
}

/// The conversion group of every [`ChangeTarget`].
///
/// Built once and never mutated afterwards; use [`registry`] for the shared
/// instance.
#[derive(Clone, Debug)]
pub struct ConversionRegistry {
    groups: HashMap<ChangeTarget, ConversionGroup>,
}

impl ConversionRegistry {
    /// Build and check every group.
    ///
    /// # Errors
    ///
    /// Returns the first group's [`RegistryError`].
    pub fn build() -> Result<Self, RegistryError> {
        let groups = ChangeTarget::ALL
            .iter()
            .map(|target| conversions::group(*target).map(|group| (*target, group)))
            .collect::<Result<_, _>>()?;

        Ok(Self { groups })
    }

    pub fn group(&self, target: ChangeTarget) -> Option<&ConversionGroup> {
        self.groups.get(&target)
    }

    /// Resolve the wire key of a change, aliases included.
    pub fn resolve(&self, target: ChangeTarget, wire_key: &str) -> Option<Resolved> {
        self.group(target)?.get_converter(wire_key)
    }

    /// Resolve an attribute name for writing or validation.
    pub fn resolve_attribute(&self, target: ChangeTarget, attribute_name: &str) -> Option<Resolved> {
        self.group(target)?.put_converter(attribute_name)
    }
}

static REGISTRY: LazyLock<ConversionRegistry> = LazyLock::new(|| {
    ConversionRegistry::build().unwrap_or_else(|source| panic!("{source}"))
});

/// The process-wide registry, built on first use.
///
/// # Panics
///
/// Panics if a conversion group is inconsistent with the value domain table.
/// That is a bug in the declarations, caught by this module's tests.
pub fn registry() -> &'static ConversionRegistry {
    &REGISTRY
}
