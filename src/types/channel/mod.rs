//! Channels, threads and their nested objects.

pub mod fields;
pub mod forum_tag;
pub mod permission_overwrite;

use super::util::{wire_enum, WireFlags};
use crate::value::into_change;
use bitflags::bitflags;

wire_enum! {
    /// Type of a channel.
    pub enum ChannelType => ChangeValue::ChannelType {
        GuildText = 0 => "guild text",
        Private = 1 => "private",
        GuildVoice = 2 => "guild voice",
        Group = 3 => "group",
        GuildCategory = 4 => "guild category",
        GuildAnnouncement = 5 => "guild announcement",
        AnnouncementThread = 10 => "announcement thread",
        PublicThread = 11 => "public thread",
        PrivateThread = 12 => "private thread",
        GuildStageVoice = 13 => "guild stage voice",
        GuildDirectory = 14 => "guild directory",
        GuildForum = 15 => "guild forum",
        GuildMedia = 16 => "guild media",
    }
    default = GuildText;
}

impl ChannelType {
    /// Whether the channel is a thread.
    pub const fn is_thread(self) -> bool {
        matches!(
            self,
            Self::AnnouncementThread | Self::PublicThread | Self::PrivateThread
        )
    }
}

wire_enum! {
    /// Order posts of a forum channel are listed in by default.
    pub enum SortOrder => ChangeValue::SortOrder {
        LatestActivity = 0 => "latest activity",
        CreationDate = 1 => "creation date",
    }
    default = LatestActivity;
}

wire_enum! {
    /// How posts of a forum channel are displayed by default.
    pub enum ForumLayout => ChangeValue::ForumLayout {
        NotSet = 0 => "not set",
        List = 1 => "list",
        Gallery = 2 => "gallery",
    }
    default = NotSet;
}

wire_enum! {
    /// Camera video quality of a voice channel.
    pub enum VideoQualityMode => ChangeValue::VideoQualityMode {
        /// Discord chooses the quality for optimal performance.
        Auto = 1 => "auto",
        /// 720p.
        Full = 2 => "full",
    }
    default = Auto;
}

bitflags! {
    /// Flags of a channel.
    #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
    pub struct ChannelFlags: u64 {
        /// Thread is pinned to the top of its parent forum.
        const PINNED = 1 << 1;
        /// Forum requires a tag on every post.
        const REQUIRE_TAG = 1 << 4;
        /// Media channel hides the embedded media download options.
        const HIDE_MEDIA_DOWNLOAD_OPTIONS = 1 << 15;
    }
}

impl WireFlags for ChannelFlags {}

into_change!(domain ChannelFlags => ChannelFlags);
