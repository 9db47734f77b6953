//! Roles and the partial roles reported by member updates.

pub mod fields;

use super::{
    id::{marker::RoleMarker, Id},
    permissions::Permissions,
    util::{HexColor, ImageHash, WireFlags},
};
use crate::{
    field::{Candidate, Field, Nested, StringCodec, ValidationError, WireObject},
    value::into_change,
};
use bitflags::bitflags;

bitflags! {
    /// Flags of a role.
    #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
    pub struct RoleFlags: u64 {
        /// Role can be picked in an onboarding prompt.
        const IN_PROMPT = 1;
    }
}

impl WireFlags for RoleFlags {}

into_change!(domain RoleFlags => RoleFlags);

/// Partial role added to or removed from a member, as listed by audit logs.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct AuditLogRole {
    pub id: Option<Id<RoleMarker>>,
    pub name: String,
}

/// Name of a partial role; it may be empty for deleted roles.
const PARTIAL_NAME: Field<StringCodec> =
    Field::named("name", StringCodec::new().max_length(100).emit_defaults());

impl AuditLogRole {
    pub fn new(id: Id<RoleMarker>, name: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            name: name.into(),
        }
    }
}

impl Nested for AuditLogRole {
    fn from_wire(data: &WireObject) -> Self {
        Self {
            id: fields::ID.parse(data),
            name: PARTIAL_NAME.parse(data),
        }
    }

    fn to_wire(&self, include_defaults: bool) -> WireObject {
        let mut data = WireObject::new();

        fields::ID.put(&self.id, &mut data, include_defaults);
        PARTIAL_NAME.put(&self.name, &mut data, include_defaults);

        data
    }

    fn validate_wire(data: &WireObject) -> Result<Self, ValidationError> {
        Ok(Self {
            id: fields::ID.validate(data.get(fields::ID.key()))?,
            name: PARTIAL_NAME.validate(data.get(PARTIAL_NAME.key()))?,
        })
    }
}

into_change!(Vec<AuditLogRole> => Roles);

/// A guild role.
///
/// Built from and written to the wire through [`fields`]. Setters validate
/// their input before touching the role, so a rejected value leaves it
/// unchanged.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Role {
    pub color: HexColor,
    pub flags: RoleFlags,
    pub icon: Option<ImageHash>,
    pub id: Option<Id<RoleMarker>>,
    pub managed: bool,
    pub mentionable: bool,
    pub name: String,
    pub permissions: Permissions,
    pub position: i64,
    pub separated: bool,
    pub unicode_emoji: Option<String>,
}

impl Default for RoleFlags {
    fn default() -> Self {
        Self::empty()
    }
}

impl Role {
    pub fn from_wire(data: &WireObject) -> Self {
        Self {
            color: fields::COLOR.parse(data),
            flags: fields::FLAGS.parse(data),
            icon: fields::ICON.parse(data),
            id: fields::ID.parse(data),
            managed: fields::MANAGED.parse(data),
            mentionable: fields::MENTIONABLE.parse(data),
            name: fields::NAME.parse(data),
            permissions: fields::PERMISSIONS.parse(data),
            position: fields::POSITION.parse(data),
            separated: fields::SEPARATED.parse(data),
            unicode_emoji: fields::UNICODE_EMOJI.parse(data),
        }
    }

    /// Write the role.
    ///
    /// With `include_defaults` the result is a full snapshot, without it
    /// only the attributes differing from their defaults are written.
    pub fn to_wire(&self, include_defaults: bool) -> WireObject {
        let mut data = WireObject::new();

        fields::COLOR.put(&self.color, &mut data, include_defaults);
        fields::FLAGS.put(&self.flags, &mut data, include_defaults);
        fields::ICON.put(&self.icon, &mut data, include_defaults);
        fields::ID.put(&self.id, &mut data, include_defaults);
        fields::MANAGED.put(&self.managed, &mut data, include_defaults);
        fields::MENTIONABLE.put(&self.mentionable, &mut data, include_defaults);
        fields::NAME.put(&self.name, &mut data, include_defaults);
        fields::PERMISSIONS.put(&self.permissions, &mut data, include_defaults);
        fields::POSITION.put(&self.position, &mut data, include_defaults);
        fields::SEPARATED.put(&self.separated, &mut data, include_defaults);
        fields::UNICODE_EMOJI.put(&self.unicode_emoji, &mut data, include_defaults);

        data
    }

    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the color is not an RGB color.
    pub fn set_color(&mut self, color: impl Into<Candidate>) -> Result<(), ValidationError> {
        self.color = fields::COLOR.validate(color)?;

        Ok(())
    }

    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the name is not 1 to 100 characters
    /// long.
    pub fn set_name(&mut self, name: impl Into<Candidate>) -> Result<(), ValidationError> {
        self.name = fields::NAME.validate(name)?;

        Ok(())
    }

    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the input is not a permission set.
    pub fn set_permissions(
        &mut self,
        permissions: impl Into<Candidate>,
    ) -> Result<(), ValidationError> {
        self.permissions = fields::PERMISSIONS.validate(permissions)?;

        Ok(())
    }

    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the position is negative.
    pub fn set_position(
        &mut self,
        position: impl Into<Candidate>,
    ) -> Result<(), ValidationError> {
        self.position = fields::POSITION.validate(position)?;

        Ok(())
    }

    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the input is not a boolean.
    pub fn set_separated(
        &mut self,
        separated: impl Into<Candidate>,
    ) -> Result<(), ValidationError> {
        self.separated = fields::SEPARATED.validate(separated)?;

        Ok(())
    }

    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the input is neither text nor null.
    pub fn set_unicode_emoji(
        &mut self,
        emoji: impl Into<Candidate>,
    ) -> Result<(), ValidationError> {
        self.unicode_emoji = fields::UNICODE_EMOJI.validate(emoji)?;

        Ok(())
    }
}
