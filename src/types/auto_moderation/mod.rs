//! Auto moderation rules.

pub mod fields;

use super::util::wire_enum;

wire_enum! {
    /// When an auto moderation rule is checked.
    pub enum AutoModerationEventType => ChangeValue::AutoModerationEventType {
        /// No event.
        None = 0 => "none",
        /// A member sends or edits a message.
        MessageSend = 1 => "message send",
        /// A member edits their profile.
        MemberUpdate = 2 => "member update",
    }
    default = None;
}

wire_enum! {
    /// What kind of content an auto moderation rule looks for.
    pub enum AutoModerationTriggerType => ChangeValue::AutoModerationTriggerType {
        /// No trigger.
        None = 0 => "none",
        /// Words from a user defined list.
        Keyword = 1 => "keyword",
        /// Generic spam.
        Spam = 3 => "spam",
        /// Words from Discord's predefined lists.
        KeywordPreset = 4 => "keyword preset",
        /// Too many unique mentions.
        MentionSpam = 5 => "mention spam",
        /// Words in a member's profile.
        MemberProfile = 6 => "member profile",
    }
    default = None;
}

/// Maximum number of keywords of a rule.
pub const KEYWORDS_MAX: usize = 1000;

/// Maximum length of one keyword or allow list entry.
pub const KEYWORD_LENGTH_MAX: usize = 60;

/// Maximum number of regex patterns of a rule.
pub const REGEX_PATTERNS_MAX: usize = 10;

/// Maximum length of one regex pattern.
pub const REGEX_PATTERN_LENGTH_MAX: usize = 260;

/// Maximum number of roles a rule may exempt.
pub const EXCLUDED_ROLES_MAX: usize = 20;

/// Maximum number of channels a rule may exempt.
pub const EXCLUDED_CHANNELS_MAX: usize = 50;
