//! Audit log action types.

use super::ChangeTarget;
use serde::{Deserialize, Serialize};

macro_rules! audit_log_events {
    ($( $variant:ident = $value:literal => $target:expr, )+) => {
        /// Action an audit log entry records, sent as `action_type`.
        #[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
        #[serde(from = "u16", into = "u16")]
        #[non_exhaustive]
        pub enum AuditLogEvent {
            $( $variant, )+
            /// Variant value is unknown to the library.
            Unknown(u16),
        }

        impl From<u16> for AuditLogEvent {
            fn from(value: u16) -> Self {
                match value {
                    $( $value => Self::$variant, )+
                    unknown => Self::Unknown(unknown),
                }
            }
        }

        impl From<AuditLogEvent> for u16 {
            fn from(value: AuditLogEvent) -> Self {
                match value {
                    $( AuditLogEvent::$variant => $value, )+
                    AuditLogEvent::Unknown(unknown) => unknown,
                }
            }
        }

        impl AuditLogEvent {
            /// Kind of object whose changes the entry reports, if the action
            /// reports changes at all.
            pub const fn target(self) -> Option<ChangeTarget> {
                match self {
                    $( Self::$variant => $target, )+
                    Self::Unknown(_) => None,
                }
            }
        }
    };
}

use ChangeTarget::*;

audit_log_events! {
    GuildUpdate = 1 => Some(Guild),
    ChannelCreate = 10 => Some(Channel),
    ChannelUpdate = 11 => Some(Channel),
    ChannelDelete = 12 => Some(Channel),
    ChannelOverwriteCreate = 13 => Some(PermissionOverwrite),
    ChannelOverwriteUpdate = 14 => Some(PermissionOverwrite),
    ChannelOverwriteDelete = 15 => Some(PermissionOverwrite),
    MemberKick = 20 => None,
    MemberPrune = 21 => None,
    MemberBanAdd = 22 => None,
    MemberBanRemove = 23 => None,
    MemberUpdate = 24 => Some(Member),
    MemberRoleUpdate = 25 => Some(Member),
    MemberMove = 26 => None,
    MemberDisconnect = 27 => None,
    BotAdd = 28 => None,
    RoleCreate = 30 => Some(Role),
    RoleUpdate = 31 => Some(Role),
    RoleDelete = 32 => Some(Role),
    InviteCreate = 40 => Some(Invite),
    InviteUpdate = 41 => Some(Invite),
    InviteDelete = 42 => Some(Invite),
    WebhookCreate = 50 => Some(Webhook),
    WebhookUpdate = 51 => Some(Webhook),
    WebhookDelete = 52 => Some(Webhook),
    EmojiCreate = 60 => Some(Emoji),
    EmojiUpdate = 61 => Some(Emoji),
    EmojiDelete = 62 => Some(Emoji),
    MessageDelete = 72 => None,
    MessageBulkDelete = 73 => None,
    MessagePin = 74 => None,
    MessageUnpin = 75 => None,
    IntegrationCreate = 80 => Some(Integration),
    IntegrationUpdate = 81 => Some(Integration),
    IntegrationDelete = 82 => Some(Integration),
    StageInstanceCreate = 83 => Some(StageInstance),
    StageInstanceUpdate = 84 => Some(StageInstance),
    StageInstanceDelete = 85 => Some(StageInstance),
    StickerCreate = 90 => Some(Sticker),
    StickerUpdate = 91 => Some(Sticker),
    StickerDelete = 92 => Some(Sticker),
    ScheduledEventCreate = 100 => Some(ScheduledEvent),
    ScheduledEventUpdate = 101 => Some(ScheduledEvent),
    ScheduledEventDelete = 102 => Some(ScheduledEvent),
    ThreadCreate = 110 => Some(Channel),
    ThreadUpdate = 111 => Some(Channel),
    ThreadDelete = 112 => Some(Channel),
    ApplicationCommandPermissionUpdate = 121 => Some(ApplicationCommand),
    AutoModerationRuleCreate = 140 => Some(AutoModerationRule),
    AutoModerationRuleUpdate = 141 => Some(AutoModerationRule),
    AutoModerationRuleDelete = 142 => Some(AutoModerationRule),
    AutoModerationBlockMessage = 143 => None,
    AutoModerationFlagToChannel = 144 => None,
    AutoModerationUserCommunicationDisabled = 145 => None,
    OnboardingPromptCreate = 163 => Some(OnboardingPrompt),
    OnboardingPromptUpdate = 164 => Some(OnboardingPrompt),
    OnboardingPromptDelete = 165 => Some(OnboardingPrompt),
    OnboardingCreate = 166 => Some(Onboarding),
    OnboardingUpdate = 167 => Some(Onboarding),
}
