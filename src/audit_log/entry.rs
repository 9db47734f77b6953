use super::{AuditLogChange, AuditLogEvent};
use crate::{
    field::{Field, IdCodec, IntCodec, NullableStringCodec, ObjectArrayCodec, WireObject},
    types::id::{
        marker::{AuditLogEntryMarker, GenericMarker, UserMarker},
        Id,
    },
};
use serde_json::Value;

/// Longest reason Discord accepts through the `X-Audit-Log-Reason` header.
pub const REASON_LENGTH_MAX: usize = 512;

const ID: Field<IdCodec<AuditLogEntryMarker>> = Field::named("id", IdCodec::new());
const ACTION_TYPE: Field<IntCodec> = Field::named("action_type", IntCodec::new(0).min(0));
const USER_ID: Field<IdCodec<UserMarker>> = Field::named("user_id", IdCodec::new());
const TARGET_ID: Field<IdCodec<GenericMarker>> = Field::named("target_id", IdCodec::new());
const REASON: Field<NullableStringCodec> =
    Field::named("reason", NullableStringCodec::new().max_length(REASON_LENGTH_MAX));
const CHANGES: Field<ObjectArrayCodec> = Field::named("changes", ObjectArrayCodec::new());

/// An entry of a guild's audit log.
#[derive(Clone, Debug, PartialEq)]
pub struct AuditLogEntry {
    pub id: Option<Id<AuditLogEntryMarker>>,
    pub action_type: AuditLogEvent,
    /// User or bot that performed the action.
    pub user_id: Option<Id<UserMarker>>,
    /// Object the action was performed on.
    pub target_id: Option<Id<GenericMarker>>,
    pub reason: Option<String>,
    pub changes: Vec<AuditLogChange>,
}

impl AuditLogEntry {
    /// Read an entry. Its changes are converted for the kind of object the
    /// action type reports on.
    pub fn from_wire(data: &WireObject) -> Self {
        let action_type = u16::try_from(ACTION_TYPE.parse(data))
            .map(AuditLogEvent::from)
            .unwrap_or(AuditLogEvent::Unknown(u16::MAX));
        let target = action_type.target();

        let changes = CHANGES
            .parse(data)
            .unwrap_or_default()
            .iter()
            .filter_map(|change| AuditLogChange::from_wire(target, change))
            .collect();

        Self {
            id: ID.parse(data),
            action_type,
            user_id: USER_ID.parse(data),
            target_id: TARGET_ID.parse(data),
            reason: REASON.parse(data),
            changes,
        }
    }

    pub fn to_wire(&self, include_defaults: bool) -> WireObject {
        let mut data = WireObject::new();
        let target = self.action_type.target();

        ID.put(&self.id, &mut data, include_defaults);
        ACTION_TYPE.put(
            &i64::from(u16::from(self.action_type)),
            &mut data,
            include_defaults,
        );
        USER_ID.put(&self.user_id, &mut data, include_defaults);
        TARGET_ID.put(&self.target_id, &mut data, include_defaults);
        REASON.put(&self.reason, &mut data, include_defaults);

        if include_defaults || !self.changes.is_empty() {
            let changes = self
                .changes
                .iter()
                .map(|change| Value::Object(change.to_wire(target)))
                .collect();

            data.insert(CHANGES.key().to_owned(), Value::Array(changes));
        }

        data
    }
}

#[cfg(test)]
mod tests {
    use super::AuditLogEntry;
    use crate::{
        audit_log::AuditLogEvent,
        field::WireObject,
        types::id::Id,
        value::ChangeValue,
    };
    use serde_json::{json, Value};

    fn wire(value: Value) -> WireObject {
        match value {
            Value::Object(object) => object,
            other => panic!("not an object: {other}"),
        }
    }

    #[test]
    fn role_update() {
        let data = wire(json!({
            "id": "1101284421236781117",
            "action_type": 31,
            "user_id": "246749412939989000",
            "target_id": "1101284421236781115",
            "reason": "promotion",
            "changes": [
                {"key": "hoist", "old_value": false, "new_value": true},
                {"key": "color", "old_value": 0, "new_value": 16711680},
                {"key": "some_future_key", "new_value": "x"},
            ],
        }));
        let entry = AuditLogEntry::from_wire(&data);

        assert_eq!(entry.id, Some(Id::new(1_101_284_421_236_781_117)));
        assert_eq!(entry.action_type, AuditLogEvent::RoleUpdate);
        assert_eq!(entry.target_id, Some(Id::new(1_101_284_421_236_781_115)));
        assert_eq!(entry.reason.as_deref(), Some("promotion"));
        assert_eq!(entry.changes.len(), 3);

        let separated = &entry.changes[0];
        assert_eq!(separated.attribute_name(), "separated");
        assert_eq!(separated.before(), Some(&ChangeValue::Bool(false)));
        assert_eq!(separated.after(), Some(&ChangeValue::Bool(true)));

        assert!(entry.changes[2].is_raw());
        assert_eq!(entry.to_wire(false), data);
    }

    #[test]
    fn unknown_action_type() {
        let entry = AuditLogEntry::from_wire(&wire(json!({
            "action_type": 999,
            "changes": [{"key": "name", "new_value": "x"}],
        })));

        assert_eq!(entry.action_type, AuditLogEvent::Unknown(999));
        assert_eq!(entry.changes[0].after(), Some(&ChangeValue::Raw(json!("x"))));
        assert_eq!(entry.id, None);
    }

    #[test]
    fn defaults() {
        let entry = AuditLogEntry::from_wire(&wire(json!({"action_type": 74})));

        assert!(entry.changes.is_empty());
        assert_eq!(entry.to_wire(false), wire(json!({"action_type": 74})));
        assert_eq!(
            entry.to_wire(true),
            wire(json!({
                "id": null,
                "action_type": 74,
                "user_id": null,
                "target_id": null,
                "reason": null,
                "changes": [],
            }))
        );
    }
}
