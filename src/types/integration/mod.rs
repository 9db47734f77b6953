//! Guild integrations.

pub mod fields;

use super::util::wire_enum;

wire_enum! {
    /// What happens to a member whose subscription expired.
    pub enum IntegrationExpireBehavior => ChangeValue::IntegrationExpireBehavior {
        RemoveRole = 0 => "remove role",
        Kick = 1 => "kick",
    }
    default = RemoveRole;
}
