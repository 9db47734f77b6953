//! Guilds, their moderation levels and discovery metadata.

pub mod discovery;
pub mod fields;

use super::util::{wire_enum, WireFlags};
use crate::value::into_change;
use bitflags::bitflags;

wire_enum! {
    /// Requirements a member has to meet before talking in the guild.
    pub enum VerificationLevel => ChangeValue::VerificationLevel {
        None = 0 => "none",
        /// Verified email.
        Low = 1 => "low",
        /// Registered for longer than five minutes.
        Medium = 2 => "medium",
        /// Member of the guild for longer than ten minutes.
        High = 3 => "high",
        /// Verified phone number.
        VeryHigh = 4 => "very high",
    }
    default = None;
}

wire_enum! {
    /// Whose messages are scanned for explicit media.
    pub enum ContentFilterLevel => ChangeValue::ContentFilterLevel {
        Disabled = 0 => "disabled",
        MembersWithoutRoles = 1 => "members without roles",
        AllMembers = 2 => "all members",
    }
    default = Disabled;
}

wire_enum! {
    /// Which messages notify members by default.
    pub enum MessageNotificationLevel => ChangeValue::MessageNotificationLevel {
        AllMessages = 0 => "all messages",
        OnlyMentions = 1 => "only mentions",
    }
    default = AllMessages;
}

wire_enum! {
    /// Whether moderators need two factor authentication.
    pub enum MfaLevel => ChangeValue::MfaLevel {
        None = 0 => "none",
        Elevated = 1 => "elevated",
    }
    default = None;
}

wire_enum! {
    pub enum NsfwLevel => ChangeValue::NsfwLevel {
        Default = 0 => "default",
        Explicit = 1 => "explicit",
        Safe = 2 => "safe",
        AgeRestricted = 3 => "age restricted",
    }
    default = Default;
}

bitflags! {
    /// Notifications suppressed in a guild's system channel.
    #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
    pub struct SystemChannelFlags: u64 {
        const SUPPRESS_JOIN_NOTIFICATIONS = 1;
        const SUPPRESS_PREMIUM_SUBSCRIPTIONS = 1 << 1;
        const SUPPRESS_GUILD_REMINDER_NOTIFICATIONS = 1 << 2;
        const SUPPRESS_JOIN_NOTIFICATION_REPLIES = 1 << 3;
        const SUPPRESS_ROLE_SUBSCRIPTION_PURCHASE_NOTIFICATIONS = 1 << 4;
        const SUPPRESS_ROLE_SUBSCRIPTION_PURCHASE_NOTIFICATION_REPLIES = 1 << 5;
    }
}

impl WireFlags for SystemChannelFlags {}

into_change!(domain SystemChannelFlags => SystemChannelFlags);

#[cfg(test)]
mod tests {
    use super::{NsfwLevel, SystemChannelFlags, VerificationLevel};
    use crate::types::util::WireEnum;
    use serde_test::Token;

    #[test]
    fn verification_level_serde() {
        serde_test::assert_tokens(&VerificationLevel::VeryHigh, &[Token::U8(4)]);
        serde_test::assert_tokens(&VerificationLevel::Unknown(9), &[Token::U8(9)]);
    }

    #[test]
    fn names() {
        assert_eq!(NsfwLevel::AgeRestricted.name(), "age restricted");
        assert!(!NsfwLevel::Unknown(7).is_known());
        assert_eq!(NsfwLevel::default(), NsfwLevel::Default);
    }

    #[test]
    fn system_channel_flags_bits() {
        assert_eq!(
            SystemChannelFlags::from_bits_retain(0b11),
            SystemChannelFlags::SUPPRESS_JOIN_NOTIFICATIONS
                | SystemChannelFlags::SUPPRESS_PREMIUM_SUBSCRIPTIONS
        );
    }
}
