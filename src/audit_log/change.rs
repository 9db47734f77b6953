//! Change records: typed before/after pairs of audit log changes.

use super::{converters, registry, ChangeTarget, Placement, Resolved};
use crate::{
    field::{Candidate, ValidationError, WireObject},
    value::ChangeValue,
};
use serde_json::Value;
use std::{
    borrow::Cow,
    error::Error,
    fmt::{Display, Formatter, Result as FmtResult},
};
use tracing::{debug, warn};

const KEY: &str = "key";
const OLD_VALUE: &str = "old_value";
const NEW_VALUE: &str = "new_value";

/// One attribute change of an audit log entry.
///
/// Either side may be unset: a change that sets an attribute has no
/// `before`, one that clears it has no `after`.
#[derive(Clone, Debug, PartialEq)]
pub struct AuditLogChange {
    attribute_name: Cow<'static, str>,
    before: Option<ChangeValue>,
    after: Option<ChangeValue>,
}

impl AuditLogChange {
    /// Read a change from its wire form, `{"key", "old_value", "new_value"}`.
    ///
    /// Keys without a conversion for `target`, and every key when the target
    /// is unknown, keep their wire values as [`ChangeValue::Raw`]. Returns
    /// `None` only when the change has no key at all.
    pub fn from_wire(target: Option<ChangeTarget>, data: &WireObject) -> Option<Self> {
        let Some(key) = data.get(KEY).and_then(Value::as_str) else {
            warn!(change = ?data, "ignoring audit log change without a key");

            return None;
        };

        let old_value = data.get(OLD_VALUE);
        let new_value = data.get(NEW_VALUE);

        let Some(resolved) = target.and_then(|target| registry().resolve(target, key)) else {
            debug!(attribute = %key, target = ?target, "keeping unconverted audit log change");

            return Some(Self {
                attribute_name: Cow::Owned(key.to_owned()),
                before: converters::get_raw(old_value),
                after: converters::get_raw(new_value),
            });
        };

        let (before, after) = match resolved.placement() {
            Placement::Direct => (resolved.get(old_value), resolved.get(new_value)),
            Placement::Added => (None, resolved.get(new_value)),
            Placement::Removed => (resolved.get(new_value), None),
        };

        Some(Self {
            attribute_name: Cow::Borrowed(resolved.entry().attribute_name()),
            before,
            after,
        })
    }

    /// Build a change from external input, validating both sides.
    ///
    /// A null candidate leaves its side unset.
    ///
    /// # Errors
    ///
    /// Returns a [`ChangeErrorType::UnknownAttribute`] error if `target` has
    /// no attribute named `attribute_name`, and a
    /// [`ChangeErrorType::Invalid`] error if either side fails validation.
    pub fn validated(
        target: ChangeTarget,
        attribute_name: &str,
        before: impl Into<Candidate>,
        after: impl Into<Candidate>,
    ) -> Result<Self, ChangeError> {
        let resolved = registry()
            .resolve_attribute(target, attribute_name)
            .ok_or_else(|| ChangeError {
                kind: ChangeErrorType::UnknownAttribute {
                    target,
                    name: attribute_name.to_owned(),
                },
                source: None,
            })?;

        Ok(Self {
            attribute_name: Cow::Borrowed(resolved.entry().attribute_name()),
            before: validate_side(&resolved, before.into())?,
            after: validate_side(&resolved, after.into())?,
        })
    }

    /// Write the change back into its wire form.
    ///
    /// Unset sides are omitted. A one-sided change of an attribute Discord
    /// reports through `$add`/`$remove` style keys is written under that key.
    pub fn to_wire(&self, target: Option<ChangeTarget>) -> WireObject {
        let mut data = WireObject::new();

        let Some(group) = target.and_then(|target| registry().group(target)) else {
            self.put_raw(&mut data);

            return data;
        };

        let Some(resolved) = group.put_converter(&self.attribute_name) else {
            self.put_raw(&mut data);

            return data;
        };

        let alias = match (&self.before, &self.after) {
            (None, Some(after)) => group
                .alias(&self.attribute_name, Placement::Added)
                .map(|key| (key, after)),
            (Some(before), None) => group
                .alias(&self.attribute_name, Placement::Removed)
                .map(|key| (key, before)),
            _ => None,
        };

        if let Some((key, value)) = alias {
            data.insert(KEY.to_owned(), Value::from(key));
            data.insert(NEW_VALUE.to_owned(), resolved.put(Some(value)));

            return data;
        }

        data.insert(KEY.to_owned(), Value::from(resolved.entry().wire_key()));

        if let Some(before) = &self.before {
            data.insert(OLD_VALUE.to_owned(), resolved.put(Some(before)));
        }

        if let Some(after) = &self.after {
            data.insert(NEW_VALUE.to_owned(), resolved.put(Some(after)));
        }

        data
    }

    /// Name of the changed attribute. For unconverted changes this is the
    /// wire key.
    pub fn attribute_name(&self) -> &str {
        &self.attribute_name
    }

    pub const fn before(&self) -> Option<&ChangeValue> {
        self.before.as_ref()
    }

    pub const fn after(&self) -> Option<&ChangeValue> {
        self.after.as_ref()
    }

    /// Whether the values were kept in their wire form.
    pub fn is_raw(&self) -> bool {
        [&self.before, &self.after]
            .into_iter()
            .flatten()
            .any(|value| matches!(value, ChangeValue::Raw(_)))
    }

    /// Consume the change, returning the attribute name and both sides.
    pub fn into_parts(self) -> (Cow<'static, str>, Option<ChangeValue>, Option<ChangeValue>) {
        (self.attribute_name, self.before, self.after)
    }

    fn put_raw(&self, data: &mut WireObject) {
        data.insert(KEY.to_owned(), Value::from(self.attribute_name.as_ref()));

        if let Some(before) = &self.before {
            data.insert(OLD_VALUE.to_owned(), converters::put_change(Some(before)));
        }

        if let Some(after) = &self.after {
            data.insert(NEW_VALUE.to_owned(), converters::put_change(Some(after)));
        }
    }
}

fn validate_side(
    resolved: &Resolved,
    candidate: Candidate,
) -> Result<Option<ChangeValue>, ChangeError> {
    if candidate == Candidate::Null {
        return Ok(None);
    }

    resolved.validate(candidate).map_err(|source| ChangeError {
        kind: ChangeErrorType::Invalid,
        source: Some(source),
    })
}

/// A change could not be built from external input.
#[derive(Debug)]
pub struct ChangeError {
    kind: ChangeErrorType,
    source: Option<ValidationError>,
}

impl ChangeError {
    /// Immutable reference to the type of error that occurred.
    #[must_use = "retrieving the type has no effect if left unused"]
    pub const fn kind(&self) -> &ChangeErrorType {
        &self.kind
    }

    /// Consume the error, returning the source error if there is any.
    #[must_use = "consuming the error and retrieving the source has no effect if left unused"]
    pub fn into_source(self) -> Option<ValidationError> {
        self.source
    }

    /// Consume the error, returning the owned error type and the source error.
    #[must_use = "consuming the error into its parts has no effect if left unused"]
    pub fn into_parts(self) -> (ChangeErrorType, Option<ValidationError>) {
        (self.kind, self.source)
    }
}

impl Display for ChangeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match &self.kind {
            ChangeErrorType::UnknownAttribute { target, name } => {
                write!(f, "{target} has no attribute `{name}`")
            }
            ChangeErrorType::Invalid => f.write_str("change value is invalid"),
        }
    }
}

impl Error for ChangeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_ref()
            .map(|source| source as &(dyn Error + 'static))
    }
}

/// Type of [`ChangeError`] that occurred.
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum ChangeErrorType {
    /// The target has no conversion for the attribute.
    UnknownAttribute { target: ChangeTarget, name: String },
    /// A side was rejected by the attribute's validator.
    Invalid,
}

#[cfg(test)]
mod tests {
    use super::{AuditLogChange, ChangeErrorType};
    use crate::{
        audit_log::ChangeTarget,
        field::{Candidate, WireObject},
        types::{
            channel::ChannelType,
            id::Id,
            role::AuditLogRole,
            util::ImageHash,
            Permissions,
        },
        value::ChangeValue,
    };
    use serde_json::{json, Value};
    use std::error::Error;

    fn wire(value: Value) -> WireObject {
        match value {
            Value::Object(object) => object,
            other => panic!("not an object: {other}"),
        }
    }

    #[test]
    fn typed_sides() {
        let change = AuditLogChange::from_wire(
            Some(ChangeTarget::Role),
            &wire(json!({"key": "permissions", "old_value": "0", "new_value": "8"})),
        )
        .unwrap();

        assert_eq!(change.attribute_name(), "permissions");
        assert_eq!(change.before(), Some(&ChangeValue::Permissions(Permissions::empty())));
        assert_eq!(
            change.after(),
            Some(&ChangeValue::Permissions(Permissions::ADMINISTRATOR))
        );
        assert!(!change.is_raw());
    }

    #[test]
    fn renamed_keys() {
        let data = wire(json!({
            "key": "icon_hash",
            "new_value": "a_1269e74af4df7417b13759eae50c83dc",
        }));
        let change = AuditLogChange::from_wire(Some(ChangeTarget::Guild), &data).unwrap();

        assert_eq!(change.attribute_name(), "icon");
        assert_eq!(change.before(), None);
        assert!(matches!(
            change.after(),
            Some(ChangeValue::ImageHash(hash)) if hash.is_animated()
        ));
        assert_eq!(change.to_wire(Some(ChangeTarget::Guild)), data);
    }

    #[test]
    fn one_sided_changes() {
        let created = AuditLogChange::from_wire(
            Some(ChangeTarget::Channel),
            &wire(json!({"key": "type", "new_value": 15})),
        )
        .unwrap();
        assert_eq!(created.before(), None);
        assert_eq!(created.after(), Some(&ChangeValue::ChannelType(ChannelType::GuildForum)));

        let cleared = AuditLogChange::from_wire(
            Some(ChangeTarget::Channel),
            &wire(json!({"key": "topic", "old_value": "rules", "new_value": null})),
        )
        .unwrap();
        assert_eq!(cleared.before(), Some(&ChangeValue::String("rules".to_owned())));
        assert_eq!(cleared.after(), None);
        assert_eq!(
            cleared.to_wire(Some(ChangeTarget::Channel)),
            wire(json!({"key": "topic", "old_value": "rules"}))
        );
    }

    #[test]
    fn empty_aggregates_are_unset() {
        let change = AuditLogChange::from_wire(
            Some(ChangeTarget::AutoModerationRule),
            &wire(json!({"key": "allow_list", "old_value": [], "new_value": ["a"]})),
        )
        .unwrap();

        assert_eq!(change.attribute_name(), "excluded_keywords");
        assert_eq!(change.before(), None);
        assert_eq!(change.after(), Some(&ChangeValue::Strings(vec!["a".to_owned()])));
    }

    #[test]
    fn unresolved_attributes_stay_raw() {
        let data = wire(json!({
            "key": "brand_new_attribute",
            "old_value": {"a": 1},
            "new_value": [1, 2],
        }));

        for target in [Some(ChangeTarget::Guild), None] {
            let change = AuditLogChange::from_wire(target, &data).unwrap();

            assert_eq!(change.attribute_name(), "brand_new_attribute");
            assert_eq!(change.before(), Some(&ChangeValue::Raw(json!({"a": 1}))));
            assert_eq!(change.after(), Some(&ChangeValue::Raw(json!([1, 2]))));
            assert!(change.is_raw());
            assert_eq!(change.to_wire(Some(ChangeTarget::Guild)), data);
        }
    }

    #[test]
    fn mistyped_sides_stay_raw() {
        let data = wire(json!({"key": "position", "old_value": "3", "new_value": 5}));
        let change = AuditLogChange::from_wire(Some(ChangeTarget::Role), &data).unwrap();

        assert_eq!(change.before(), Some(&ChangeValue::Raw(json!("3"))));
        assert_eq!(change.after(), Some(&ChangeValue::Integer(5)));
        assert!(change.is_raw());
        assert_eq!(change.to_wire(Some(ChangeTarget::Role)), data);

        let change = AuditLogChange::from_wire(
            Some(ChangeTarget::Channel),
            &wire(json!({"key": "nsfw", "old_value": 1})),
        )
        .unwrap();

        assert_eq!(change.before(), Some(&ChangeValue::Raw(json!(1))));
        assert_eq!(change.after(), None);
    }

    #[test]
    fn known_key_without_target_stays_raw() {
        let change = AuditLogChange::from_wire(
            None,
            &wire(json!({"key": "name", "new_value": "general"})),
        )
        .unwrap();

        assert_eq!(change.after(), Some(&ChangeValue::Raw(json!("general"))));
    }

    #[test]
    fn missing_key() {
        assert!(AuditLogChange::from_wire(
            Some(ChangeTarget::Guild),
            &wire(json!({"new_value": 1}))
        )
        .is_none());
    }

    #[test]
    fn member_roles() {
        let data = wire(json!({
            "key": "$add",
            "new_value": [{"id": "42", "name": "mods"}],
        }));
        let added = AuditLogChange::from_wire(Some(ChangeTarget::Member), &data).unwrap();
        let roles = vec![AuditLogRole::new(Id::new(42), "mods")];

        assert_eq!(added.attribute_name(), "roles");
        assert_eq!(added.before(), None);
        assert_eq!(added.after(), Some(&ChangeValue::Roles(roles.clone())));
        assert_eq!(added.to_wire(Some(ChangeTarget::Member)), data);

        let removed = AuditLogChange::from_wire(
            Some(ChangeTarget::Member),
            &wire(json!({"key": "$remove", "new_value": [{"id": "42", "name": "mods"}]})),
        )
        .unwrap();

        assert_eq!(removed.before(), Some(&ChangeValue::Roles(roles)));
        assert_eq!(removed.after(), None);
        assert_eq!(
            removed.to_wire(Some(ChangeTarget::Member)),
            wire(json!({"key": "$remove", "new_value": [{"id": "42", "name": "mods"}]}))
        );
    }

    #[test]
    fn validated() {
        let change =
            AuditLogChange::validated(ChangeTarget::Role, "position", Candidate::Null, 3).unwrap();

        assert_eq!(change.before(), None);
        assert_eq!(change.after(), Some(&ChangeValue::Integer(3)));
        assert_eq!(
            change.to_wire(Some(ChangeTarget::Role)),
            wire(json!({"key": "position", "new_value": 3}))
        );

        let change = AuditLogChange::validated(
            ChangeTarget::Guild,
            "icon",
            ImageHash::parse("1269e74af4df7417b13759eae50c83dc").unwrap(),
            Candidate::Null,
        )
        .unwrap();
        assert_eq!(
            change.to_wire(Some(ChangeTarget::Guild)),
            wire(json!({"key": "icon_hash", "old_value": "1269e74af4df7417b13759eae50c83dc"}))
        );
    }

    #[test]
    fn validation_failures() {
        let err = AuditLogChange::validated(ChangeTarget::Role, "position", 0, -1).unwrap_err();

        assert_eq!(err.kind(), &ChangeErrorType::Invalid);
        assert!(err.source().is_some());
        assert!(err.into_source().unwrap().is_value());

        let err = AuditLogChange::validated(ChangeTarget::Role, "topic", "a", "b").unwrap_err();

        assert_eq!(
            err.kind(),
            &ChangeErrorType::UnknownAttribute {
                target: ChangeTarget::Role,
                name: "topic".to_owned(),
            }
        );
        assert_eq!(err.to_string(), "role has no attribute `topic`");
    }
}
