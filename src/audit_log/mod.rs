//! Typed audit log changes.
//!
//! Each entry of a guild's audit log lists the attributes an action changed
//! as `{"key", "old_value", "new_value"}` fragments. The [`registry`] maps
//! every key, per [`ChangeTarget`], to a [`ConversionEntry`] built from the
//! same fields entities use, so [`AuditLogChange`] can hand out typed
//! [`ChangeValue`]s. Keys the registry doesn't know are kept as raw JSON.
//!
//! ```
//! use discord_conversions::{
//!     audit_log::{AuditLogChange, ChangeTarget},
//!     value::ChangeValue,
//! };
//! use serde_json::json;
//!
//! let data = json!({"key": "hoist", "old_value": false, "new_value": true});
//! let change = AuditLogChange::from_wire(Some(ChangeTarget::Role), data.as_object().unwrap())
//!     .unwrap();
//!
//! assert_eq!(change.attribute_name(), "separated");
//! assert_eq!(change.after(), Some(&ChangeValue::Bool(true)));
//! ```
//!
//! [`ChangeValue`]: crate::value::ChangeValue

mod change;
mod conversion;
mod conversions;
mod domain;
mod entry;
mod event;
mod registry;

pub mod converters;

pub use self::{
    change::{AuditLogChange, ChangeError, ChangeErrorType},
    conversion::{
        ConversionEntry, ConversionGroup, ConversionGroupBuilder, Placement, RegistryError,
        RegistryErrorType, Resolved,
    },
    domain::{value_domain, DomainRule, VALUE_DOMAINS},
    entry::{AuditLogEntry, REASON_LENGTH_MAX},
    event::AuditLogEvent,
    registry::{registry, ChangeTarget, ConversionRegistry},
};
