//! The before/after value universe of audit log changes.
//!
//! Every attribute an audit log entry can report maps to exactly one of the
//! [`ValueDomain`] kinds below; [`ChangeValue`] carries one variant per kind
//! so consumers can match on it exhaustively instead of poking at untyped
//! JSON. Attributes the library does not know about keep their wire value in
//! [`ChangeValue::Raw`].

use crate::{
    field::{Nested, WireObject},
    types::{
        application::ApplicationFlags,
        auto_moderation::{AutoModerationEventType, AutoModerationTriggerType},
        channel::{
            forum_tag::ForumTag, permission_overwrite::PermissionOverwrite,
            permission_overwrite::PermissionOverwriteTargetType, ChannelFlags, ChannelType,
            ForumLayout, SortOrder, VideoQualityMode,
        },
        guild::{
            ContentFilterLevel, MessageNotificationLevel, MfaLevel, NsfwLevel,
            SystemChannelFlags, VerificationLevel,
        },
        id::{marker::GenericMarker, Id},
        integration::IntegrationExpireBehavior,
        onboarding::{OnboardingMode, OnboardingPromptType},
        permissions::Permissions,
        role::{AuditLogRole, RoleFlags},
        scheduled_event::{PrivacyLevel, ScheduledEventEntityType, ScheduledEventStatus},
        sticker::StickerFormat,
        util::{HexColor, ImageHash, Timestamp, WireEnum},
    },
};
use serde_json::Value;
use std::{
    collections::BTreeSet,
    fmt::{Display, Formatter, Result as FmtResult},
};

/// Declares the `ValueDomain` ↔ `ChangeValue` pairing in one place so the two
/// enums can't drift apart.
macro_rules! value_domains {
    ($( $(#[$meta:meta])* $variant:ident($ty:ty) => $name:literal, )+) => {
        /// Kind of value a [`ChangeValue`] holds.
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum ValueDomain {
            $( $(#[$meta])* $variant, )+
        }

        impl ValueDomain {
            /// Every domain, in declaration order.
            pub const ALL: &'static [ValueDomain] = &[$( ValueDomain::$variant, )+];

            /// Short name used in diagnostics.
            pub const fn name(self) -> &'static str {
                match self {
                    $( ValueDomain::$variant => $name, )+
                }
            }
        }

        /// A typed before/after value of an audit log change.
        #[derive(Clone, Debug, PartialEq)]
        #[non_exhaustive]
        pub enum ChangeValue {
            $( $(#[$meta])* $variant($ty), )+
        }

        impl ChangeValue {
            /// The domain of this value.
            pub const fn domain(&self) -> ValueDomain {
                match self {
                    $( ChangeValue::$variant(_) => ValueDomain::$variant, )+
                }
            }
        }
    };
}

value_domains! {
    /// A boolean switch.
    Bool(bool) => "bool",
    /// A plain integer (durations, limits, counters).
    Integer(i64) => "int",
    /// A snowflake of any identifier space.
    Id(Id<GenericMarker>) => "id",
    /// An ordered, deduplicated list of snowflakes.
    Ids(Vec<Id<GenericMarker>>) => "id list",
    /// Free text.
    String(String) => "str",
    /// An ordered list of strings.
    Strings(Vec<String>) => "str list",
    /// An unordered set of strings.
    StringSet(BTreeSet<String>) => "str set",
    /// A point in time.
    Timestamp(Timestamp) => "timestamp",
    /// An icon, avatar, banner or splash hash.
    ImageHash(ImageHash) => "image hash",
    /// A role color.
    Color(HexColor) => "color",
    /// A permission bit set.
    Permissions(Permissions) => "permissions",
    /// Application flags.
    ApplicationFlags(ApplicationFlags) => "application flags",
    /// Channel flags.
    ChannelFlags(ChannelFlags) => "channel flags",
    /// Role flags.
    RoleFlags(RoleFlags) => "role flags",
    /// System channel flags.
    SystemChannelFlags(SystemChannelFlags) => "system channel flags",
    /// A channel's type.
    ChannelType(ChannelType) => "channel type",
    /// Forum sort order.
    SortOrder(SortOrder) => "sort order",
    /// Forum layout.
    ForumLayout(ForumLayout) => "forum layout",
    /// Voice channel video quality.
    VideoQualityMode(VideoQualityMode) => "video quality mode",
    /// Guild verification level.
    VerificationLevel(VerificationLevel) => "verification level",
    /// Guild explicit content filter.
    ContentFilterLevel(ContentFilterLevel) => "content filter level",
    /// Guild default message notifications.
    MessageNotificationLevel(MessageNotificationLevel) => "message notification level",
    /// Guild MFA requirement.
    MfaLevel(MfaLevel) => "mfa level",
    /// Guild NSFW level.
    NsfwLevel(NsfwLevel) => "nsfw level",
    /// Scheduled event / stage privacy level.
    PrivacyLevel(PrivacyLevel) => "privacy level",
    /// Scheduled event entity type.
    ScheduledEventEntityType(ScheduledEventEntityType) => "scheduled event entity type",
    /// Scheduled event status.
    ScheduledEventStatus(ScheduledEventStatus) => "scheduled event status",
    /// Permission overwrite target type.
    PermissionOverwriteTargetType(PermissionOverwriteTargetType) => "permission overwrite target type",
    /// Auto moderation event type.
    AutoModerationEventType(AutoModerationEventType) => "auto moderation event type",
    /// Auto moderation trigger type.
    AutoModerationTriggerType(AutoModerationTriggerType) => "auto moderation trigger type",
    /// Guild onboarding mode.
    OnboardingMode(OnboardingMode) => "onboarding mode",
    /// Onboarding prompt type.
    OnboardingPromptType(OnboardingPromptType) => "onboarding prompt type",
    /// Sticker format.
    StickerFormat(StickerFormat) => "sticker format",
    /// Integration expire behavior.
    IntegrationExpireBehavior(IntegrationExpireBehavior) => "integration expire behavior",
    /// Channel permission overwrites.
    PermissionOverwrites(Vec<PermissionOverwrite>) => "permission overwrites",
    /// Roles added to or removed from a member.
    Roles(Vec<AuditLogRole>) => "roles",
    /// Forum tags.
    ForumTags(Vec<ForumTag>) => "forum tags",
    /// A structured object kept in wire form (trigger metadata, entity
    /// metadata, default reaction).
    Object(WireObject) => "object",
    /// A list of structured objects kept in wire form (auto moderation
    /// actions, onboarding prompts and prompt options).
    Objects(Vec<WireObject>) => "object list",
    /// The unconverted wire value of an attribute without a conversion.
    Raw(Value) => "raw",
}

impl ValueDomain {
    /// Whether values of the domain travel as a JSON array.
    pub const fn is_sequence(self) -> bool {
        matches!(
            self,
            ValueDomain::Ids
                | ValueDomain::Strings
                | ValueDomain::PermissionOverwrites
                | ValueDomain::Roles
                | ValueDomain::ForumTags
                | ValueDomain::Objects
        )
    }
}

impl ChangeValue {
    /// Whether the value is the empty form of an aggregate.
    ///
    /// Used by [`Canonical::EmptyAsNone`].
    ///
    /// [`Canonical::EmptyAsNone`]: crate::field::Canonical::EmptyAsNone
    pub fn is_empty(&self) -> bool {
        match self {
            ChangeValue::Ids(ids) => ids.is_empty(),
            ChangeValue::String(string) => string.is_empty(),
            ChangeValue::Strings(strings) => strings.is_empty(),
            ChangeValue::StringSet(strings) => strings.is_empty(),
            ChangeValue::PermissionOverwrites(overwrites) => overwrites.is_empty(),
            ChangeValue::Roles(roles) => roles.is_empty(),
            ChangeValue::ForumTags(tags) => tags.is_empty(),
            ChangeValue::Object(object) => object.is_empty(),
            ChangeValue::Objects(objects) => objects.is_empty(),
            _ => false,
        }
    }

    /// Serialize the value into its wire form.
    pub fn to_wire(&self) -> Value {
        match self {
            ChangeValue::Bool(value) => Value::Bool(*value),
            ChangeValue::Integer(value) => Value::from(*value),
            ChangeValue::Id(id) => Value::String(id.to_string()),
            ChangeValue::Ids(ids) => ids.iter().map(|id| Value::String(id.to_string())).collect(),
            ChangeValue::String(value) => Value::String(value.clone()),
            ChangeValue::Strings(values) => values.iter().cloned().map(Value::String).collect(),
            ChangeValue::StringSet(values) => Value::String(join_set(values)),
            ChangeValue::Timestamp(timestamp) => Value::String(timestamp.to_string()),
            ChangeValue::ImageHash(hash) => Value::String(hash.to_string()),
            ChangeValue::Color(color) => Value::from(color.to_u32()),
            ChangeValue::Permissions(permissions) => Value::String(permissions.bits().to_string()),
            ChangeValue::ApplicationFlags(flags) => Value::from(flags.bits()),
            ChangeValue::ChannelFlags(flags) => Value::from(flags.bits()),
            ChangeValue::RoleFlags(flags) => Value::from(flags.bits()),
            ChangeValue::SystemChannelFlags(flags) => Value::from(flags.bits()),
            ChangeValue::ChannelType(value) => enum_wire(*value),
            ChangeValue::SortOrder(value) => enum_wire(*value),
            ChangeValue::ForumLayout(value) => enum_wire(*value),
            ChangeValue::VideoQualityMode(value) => enum_wire(*value),
            ChangeValue::VerificationLevel(value) => enum_wire(*value),
            ChangeValue::ContentFilterLevel(value) => enum_wire(*value),
            ChangeValue::MessageNotificationLevel(value) => enum_wire(*value),
            ChangeValue::MfaLevel(value) => enum_wire(*value),
            ChangeValue::NsfwLevel(value) => enum_wire(*value),
            ChangeValue::PrivacyLevel(value) => enum_wire(*value),
            ChangeValue::ScheduledEventEntityType(value) => enum_wire(*value),
            ChangeValue::ScheduledEventStatus(value) => enum_wire(*value),
            ChangeValue::PermissionOverwriteTargetType(value) => enum_wire(*value),
            ChangeValue::AutoModerationEventType(value) => enum_wire(*value),
            ChangeValue::AutoModerationTriggerType(value) => enum_wire(*value),
            ChangeValue::OnboardingMode(value) => enum_wire(*value),
            ChangeValue::OnboardingPromptType(value) => enum_wire(*value),
            ChangeValue::StickerFormat(value) => enum_wire(*value),
            ChangeValue::IntegrationExpireBehavior(value) => enum_wire(*value),
            ChangeValue::PermissionOverwrites(overwrites) => overwrites
                .iter()
                .map(|overwrite| Value::Object(overwrite.to_wire(true)))
                .collect(),
            ChangeValue::Roles(roles) => roles
                .iter()
                .map(|role| Value::Object(role.to_wire(true)))
                .collect(),
            ChangeValue::ForumTags(tags) => tags
                .iter()
                .map(|tag| Value::Object(tag.to_wire(true)))
                .collect(),
            ChangeValue::Object(object) => Value::Object(object.clone()),
            ChangeValue::Objects(objects) => objects.iter().cloned().map(Value::Object).collect(),
            ChangeValue::Raw(value) => value.clone(),
        }
    }
}

impl Display for ChangeValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            ChangeValue::Bool(value) => Display::fmt(value, f),
            ChangeValue::Integer(value) => Display::fmt(value, f),
            ChangeValue::Id(id) => Display::fmt(id, f),
            ChangeValue::String(value) => write!(f, "{value:?}"),
            ChangeValue::Timestamp(timestamp) => Display::fmt(timestamp, f),
            ChangeValue::ImageHash(hash) => Display::fmt(hash, f),
            ChangeValue::Color(color) => Display::fmt(color, f),
            ChangeValue::Permissions(flags) => write!(f, "{:?}", flags),
            ChangeValue::ApplicationFlags(flags) => write!(f, "{:?}", flags),
            ChangeValue::ChannelFlags(flags) => write!(f, "{:?}", flags),
            ChangeValue::RoleFlags(flags) => write!(f, "{:?}", flags),
            ChangeValue::SystemChannelFlags(flags) => write!(f, "{:?}", flags),
            _ => Display::fmt(&self.to_wire(), f),
        }
    }
}

fn enum_wire<E: WireEnum>(value: E) -> Value {
    let raw: u8 = value.into();
    Value::from(raw)
}

/// Join a string set into the comma separated wire form.
pub(crate) fn join_set(values: &BTreeSet<String>) -> String {
    values.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
}

/// Conversion between a domain type and its [`ChangeValue`] variant.
pub trait IntoChange: Sized {
    /// Wrap the value into its variant.
    fn into_change(self) -> ChangeValue;

    /// Unwrap the variant, handing the value back if it is another variant.
    ///
    /// # Errors
    ///
    /// Returns the input unchanged when it holds a different variant.
    fn from_change(value: ChangeValue) -> Result<Self, ChangeValue>;
}

/// Conversion of a field's domain value into an optional change value, with
/// `None` meaning "unset".
pub trait ToChange {
    /// Convert the value.
    fn to_change(self) -> Option<ChangeValue>;
}

impl<T: IntoChange> ToChange for Option<T> {
    fn to_change(self) -> Option<ChangeValue> {
        self.map(IntoChange::into_change)
    }
}

/// Implements [`IntoChange`] and [`ToChange`] for a type stored as-is in a
/// [`ChangeValue`] variant. The `domain` form also makes the type usable as a
/// pre-built validation [`Candidate`].
///
/// [`Candidate`]: crate::field::Candidate
macro_rules! into_change {
    ($ty:ty => $variant:ident) => {
        impl $crate::value::IntoChange for $ty {
            fn into_change(self) -> $crate::value::ChangeValue {
                $crate::value::ChangeValue::$variant(self)
            }

            fn from_change(
                value: $crate::value::ChangeValue,
            ) -> Result<Self, $crate::value::ChangeValue> {
                match value {
                    $crate::value::ChangeValue::$variant(inner) => Ok(inner),
                    other => Err(other),
                }
            }
        }

        impl $crate::value::ToChange for $ty {
            fn to_change(self) -> Option<$crate::value::ChangeValue> {
                Some($crate::value::IntoChange::into_change(self))
            }
        }
    };
    (domain $ty:ty => $variant:ident) => {
        $crate::value::into_change!($ty => $variant);

        impl From<$ty> for $crate::field::Candidate {
            fn from(value: $ty) -> Self {
                $crate::field::Candidate::Domain($crate::value::ChangeValue::$variant(value))
            }
        }
    };
}

pub(crate) use into_change;

into_change!(bool => Bool);
into_change!(i64 => Integer);
into_change!(String => String);
into_change!(Vec<String> => Strings);
into_change!(BTreeSet<String> => StringSet);
into_change!(domain Timestamp => Timestamp);
into_change!(domain ImageHash => ImageHash);
into_change!(domain HexColor => Color);
into_change!(WireObject => Object);
into_change!(Vec<WireObject> => Objects);

impl<M> IntoChange for Id<M> {
    fn into_change(self) -> ChangeValue {
        ChangeValue::Id(self.cast())
    }

    fn from_change(value: ChangeValue) -> Result<Self, ChangeValue> {
        match value {
            ChangeValue::Id(id) => Ok(id.cast()),
            other => Err(other),
        }
    }
}

impl<M> IntoChange for Vec<Id<M>> {
    fn into_change(self) -> ChangeValue {
        ChangeValue::Ids(self.into_iter().map(Id::cast).collect())
    }

    fn from_change(value: ChangeValue) -> Result<Self, ChangeValue> {
        match value {
            ChangeValue::Ids(ids) => Ok(ids.into_iter().map(Id::cast).collect()),
            other => Err(other),
        }
    }
}
