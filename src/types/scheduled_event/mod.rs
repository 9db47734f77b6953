//! Scheduled events.

pub mod fields;

use super::util::wire_enum;

wire_enum! {
    /// Who can see a scheduled event or stage instance.
    pub enum PrivacyLevel => ChangeValue::PrivacyLevel {
        /// Visible to everyone. No longer accepted by Discord.
        Public = 1 => "public",
        GuildOnly = 2 => "guild only",
    }
    default = GuildOnly;
}

wire_enum! {
    /// Where a scheduled event takes place.
    pub enum ScheduledEventEntityType => ChangeValue::ScheduledEventEntityType {
        None = 0 => "none",
        StageInstance = 1 => "stage instance",
        Voice = 2 => "voice",
        External = 3 => "external",
    }
    default = None;
}

wire_enum! {
    pub enum ScheduledEventStatus => ChangeValue::ScheduledEventStatus {
        None = 0 => "none",
        Scheduled = 1 => "scheduled",
        Active = 2 => "active",
        Completed = 3 => "completed",
        Cancelled = 4 => "cancelled",
    }
    default = None;
}
