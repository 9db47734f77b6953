//! Applications.

pub mod fields;

use super::util::WireFlags;
use crate::value::into_change;
use bitflags::bitflags;

bitflags! {
    /// Public flags of an application.
    #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
    pub struct ApplicationFlags: u64 {
        /// Application uses the auto moderation API.
        const APPLICATION_AUTO_MODERATION_RULE_CREATE_BADGE = 1 << 6;
        /// Intent required for bots in 100 or more servers to receive presence
        /// update events.
        const GATEWAY_PRESENCE = 1 << 12;
        /// Intent required for bots in under 100 servers to receive presence
        /// update events.
        const GATEWAY_PRESENCE_LIMITED = 1 << 13;
        /// Intent required for bots in 100 or more servers to receive member
        /// related events.
        const GATEWAY_GUILD_MEMBERS = 1 << 14;
        /// Intent required for bots in under 100 servers to receive member
        /// related events.
        const GATEWAY_GUILD_MEMBERS_LIMITED = 1 << 15;
        /// Unusual growth of an application prevented verification.
        const VERIFICATION_PENDING_GUILD_LIMIT = 1 << 16;
        /// Application is embedded within the Discord client.
        const EMBEDDED = 1 << 17;
        /// Intent required for bots in 100 or more servers to receive message
        /// content.
        const GATEWAY_MESSAGE_CONTENT = 1 << 18;
        /// Intent required for bots in under 100 servers to receive message
        /// content.
        const GATEWAY_MESSAGE_CONTENT_LIMITED = 1 << 19;
        /// Application has registered global application commands.
        const APPLICATION_COMMAND_BADGE = 1 << 23;
    }
}

impl WireFlags for ApplicationFlags {}

into_change!(domain ApplicationFlags => ApplicationFlags);
