//! Value Domain Table: the admissible before/after kinds of every audited
//! attribute.
//!
//! A change record does not carry its own schema. What `before` and `after`
//! may hold is looked up here by attribute name, together with the rule for
//! empty aggregates. Every conversion entry is checked against this table
//! when its group is built.

use crate::{field::Canonical, value::ValueDomain};
use std::{collections::HashMap, sync::LazyLock};

use Canonical::{EmptyAsNone, Keep};
use ValueDomain::*;

/// Admissible domains and canonicalization rule of one attribute.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DomainRule {
    pub attribute: &'static str,
    pub domains: &'static [ValueDomain],
    pub canonical: Canonical,
}

impl DomainRule {
    /// Whether a value of `domain` may appear on either side of a change.
    pub fn admits(&self, domain: ValueDomain) -> bool {
        self.domains.contains(&domain)
    }
}

/// Every audited attribute, alphabetically.
pub const VALUE_DOMAINS: &[(&str, &[ValueDomain], Canonical)] = &[
    ("actions", &[Objects], EmptyAsNone),
    ("afk_channel_id", &[Id], Keep),
    ("afk_timeout", &[Integer], Keep),
    ("allow", &[Permissions], Keep),
    ("application_id", &[Id], Keep),
    ("applied_tag_ids", &[Ids], EmptyAsNone),
    ("archived", &[Bool], Keep),
    ("auto_archive_duration", &[Integer], Keep),
    ("available", &[Bool], Keep),
    ("available_tags", &[ForumTags], EmptyAsNone),
    ("avatar", &[ImageHash], Keep),
    ("banner", &[ImageHash], Keep),
    ("bitrate", &[Integer], Keep),
    ("boost_progress_bar_enabled", &[Bool], Keep),
    ("channel_id", &[Id], Keep),
    ("code", &[String], Keep),
    ("color", &[Color], Keep),
    ("content_filter", &[ContentFilterLevel], Keep),
    ("deaf", &[Bool], Keep),
    ("default_channel_ids", &[Ids], EmptyAsNone),
    ("default_forum_layout", &[ForumLayout], Keep),
    ("default_sort_order", &[SortOrder], Keep),
    ("default_thread_auto_archive_after", &[Integer], Keep),
    ("default_thread_reaction", &[Object], EmptyAsNone),
    ("default_thread_slowmode", &[Integer], Keep),
    ("deny", &[Permissions], Keep),
    ("description", &[String], EmptyAsNone),
    ("discovery_splash", &[ImageHash], Keep),
    ("enable_emoticons", &[Bool], Keep),
    ("enabled", &[Bool], Keep),
    ("end", &[Timestamp], Keep),
    ("entity_id", &[Id], Keep),
    ("entity_metadata", &[Object], EmptyAsNone),
    ("entity_type", &[ScheduledEventEntityType], Keep),
    ("event_type", &[AutoModerationEventType], Keep),
    ("excluded_channel_ids", &[Ids], EmptyAsNone),
    ("excluded_keywords", &[Strings], EmptyAsNone),
    ("excluded_role_ids", &[Ids], EmptyAsNone),
    ("expire_behavior", &[IntegrationExpireBehavior], Keep),
    ("expire_grace_period", &[Integer], Keep),
    ("flags", &[ChannelFlags, RoleFlags], Keep),
    ("format", &[StickerFormat], Keep),
    ("guild_id", &[Id], Keep),
    ("icon", &[ImageHash], Keep),
    ("id", &[Id], Keep),
    ("image", &[ImageHash], Keep),
    ("in_onboarding", &[Bool], Keep),
    ("invitable", &[Bool], Keep),
    ("invite_splash", &[ImageHash], Keep),
    ("inviter_id", &[Id], Keep),
    ("keywords", &[Strings], EmptyAsNone),
    ("locked", &[Bool], Keep),
    ("max_age", &[Integer], Keep),
    ("max_uses", &[Integer], Keep),
    ("mentionable", &[Bool], Keep),
    ("message_notification", &[MessageNotificationLevel], Keep),
    ("mfa", &[MfaLevel], Keep),
    ("mode", &[OnboardingMode], Keep),
    ("mute", &[Bool], Keep),
    ("name", &[String], Keep),
    ("nick", &[String], EmptyAsNone),
    ("nsfw", &[Bool], Keep),
    ("nsfw_level", &[NsfwLevel], Keep),
    ("options", &[Objects], EmptyAsNone),
    ("owner_id", &[Id], Keep),
    ("parent_id", &[Id], Keep),
    ("pending", &[Bool], Keep),
    ("permission_overwrites", &[PermissionOverwrites], EmptyAsNone),
    ("permissions", &[Permissions], Keep),
    ("position", &[Integer], Keep),
    ("privacy_level", &[PrivacyLevel], Keep),
    ("prompts", &[Objects], EmptyAsNone),
    ("public_updates_channel_id", &[Id], Keep),
    ("regex_patterns", &[Strings], EmptyAsNone),
    ("region", &[String], EmptyAsNone),
    ("required", &[Bool], Keep),
    ("role_ids", &[Ids], EmptyAsNone),
    ("roles", &[Roles], EmptyAsNone),
    ("rules_channel_id", &[Id], Keep),
    ("safety_alerts_channel_id", &[Id], Keep),
    ("separated", &[Bool], Keep),
    ("single_select", &[Bool], Keep),
    ("slowmode", &[Integer], Keep),
    ("start", &[Timestamp], Keep),
    ("status", &[ScheduledEventStatus], Keep),
    ("system_channel_flags", &[SystemChannelFlags], Keep),
    ("system_channel_id", &[Id], Keep),
    ("tags", &[StringSet], EmptyAsNone),
    ("target_id", &[Id], Keep),
    ("target_type", &[PermissionOverwriteTargetType], Keep),
    ("temporary", &[Bool], Keep),
    ("timed_out_until", &[Timestamp], Keep),
    ("topic", &[String], EmptyAsNone),
    ("trigger_metadata", &[Object], EmptyAsNone),
    ("trigger_type", &[AutoModerationTriggerType], Keep),
    ("type", &[ChannelType, OnboardingPromptType], Keep),
    ("unicode_emoji", &[String], EmptyAsNone),
    ("user_limit", &[Integer], Keep),
    ("uses", &[Integer], Keep),
    ("vanity_code", &[String], EmptyAsNone),
    ("verification_level", &[VerificationLevel], Keep),
    ("video_quality_mode", &[VideoQualityMode], Keep),
    ("widget_channel_id", &[Id], Keep),
    ("widget_enabled", &[Bool], Keep),
];

static INDEX: LazyLock<HashMap<&'static str, DomainRule>> = LazyLock::new(|| {
    VALUE_DOMAINS
        .iter()
        .map(|&(attribute, domains, canonical)| {
            (
                attribute,
                DomainRule {
                    attribute,
                    domains,
                    canonical,
                },
            )
        })
        .collect()
});

/// Look up the rule of an attribute.
pub fn value_domain(attribute: &str) -> Option<DomainRule> {
    INDEX.get(attribute).copied()
}

#[cfg(test)]
mod tests {
    use super::{value_domain, VALUE_DOMAINS};
    use crate::{field::Canonical, value::ValueDomain};
    use std::collections::HashSet;

    #[test]
    fn attributes_are_unique_and_sorted() {
        let names: Vec<_> = VALUE_DOMAINS.iter().map(|(name, ..)| *name).collect();
        let unique: HashSet<_> = names.iter().collect();

        assert_eq!(unique.len(), names.len());
        assert!(names.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn every_attribute_has_a_domain() {
        assert!(VALUE_DOMAINS.iter().all(|(_, domains, _)| !domains.is_empty()));
    }

    #[test]
    fn raw_is_never_admissible() {
        assert!(VALUE_DOMAINS
            .iter()
            .all(|(_, domains, _)| !domains.contains(&ValueDomain::Raw)));
    }

    #[test]
    fn lookup() {
        let rule = value_domain("flags").unwrap();

        assert!(rule.admits(ValueDomain::ChannelFlags));
        assert!(rule.admits(ValueDomain::RoleFlags));
        assert!(!rule.admits(ValueDomain::Permissions));
        assert_eq!(value_domain("keywords").unwrap().canonical, Canonical::EmptyAsNone);
        assert_eq!(value_domain("position").unwrap().canonical, Canonical::Keep);
        assert_eq!(value_domain("unknown"), None);
    }
}
