//! Permission overwrites of channels.

pub mod fields;

use crate::{
    field::{Candidate, Nested, ValidationError, WireObject},
    types::{
        id::{marker::GenericMarker, Id},
        permissions::Permissions,
        util::wire_enum,
    },
    value::into_change,
};

wire_enum! {
    /// Kind of entity a permission overwrite targets.
    pub enum PermissionOverwriteTargetType => ChangeValue::PermissionOverwriteTargetType {
        Role = 0 => "role",
        User = 1 => "user",
    }
    default = Role;
}

/// Permissions explicitly allowed and denied for one role or user in a
/// channel.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PermissionOverwrite {
    pub allow: Permissions,
    pub deny: Permissions,
    /// ID of the targeted role or user.
    pub target_id: Option<Id<GenericMarker>>,
    pub target_type: PermissionOverwriteTargetType,
}

impl PermissionOverwrite {
    /// Create an overwrite allowing and denying nothing.
    pub const fn new<T>(target_id: Id<T>, target_type: PermissionOverwriteTargetType) -> Self {
        Self {
            allow: Permissions::empty(),
            deny: Permissions::empty(),
            target_id: Some(target_id.cast()),
            target_type,
        }
    }
}

impl Nested for PermissionOverwrite {
    fn from_wire(data: &WireObject) -> Self {
        Self {
            allow: fields::ALLOW.parse(data),
            deny: fields::DENY.parse(data),
            target_id: fields::TARGET_ID.parse(data),
            target_type: fields::TARGET_TYPE.parse(data),
        }
    }

    fn to_wire(&self, include_defaults: bool) -> WireObject {
        let mut data = WireObject::new();

        fields::ALLOW.put(&self.allow, &mut data, include_defaults);
        fields::DENY.put(&self.deny, &mut data, include_defaults);
        fields::TARGET_ID.put(&self.target_id, &mut data, include_defaults);
        fields::TARGET_TYPE.put(&self.target_type, &mut data, include_defaults);

        data
    }

    fn validate_wire(data: &WireObject) -> Result<Self, ValidationError> {
        let value = |key: &str| data.get(key);
        let flags = |key: &str| data.get(key).map_or(Candidate::Integer(0), Candidate::from);

        Ok(Self {
            allow: fields::ALLOW.validate(flags(fields::ALLOW.key()))?,
            deny: fields::DENY.validate(flags(fields::DENY.key()))?,
            target_id: fields::TARGET_ID.validate(value(fields::TARGET_ID.key()))?,
            target_type: fields::TARGET_TYPE.validate(value(fields::TARGET_TYPE.key()))?,
        })
    }
}

into_change!(Vec<PermissionOverwrite> => PermissionOverwrites);
