//! Markers for the identifier spaces used by the conversion schemas.
//!
//! Markers perform no logical action. They only make sure an ID from one
//! space can't be handed to a field that validates another: a role's ID
//! can't be stored in a channel field, even though both are 64-bit
//! snowflakes on the wire.

// DEVELOPMENT: When adding a new marker, be sure to add its field converters
// to the matching `types::<entity>::fields` module.

/// Marker for application IDs.
///
/// Fields such as [`application_command::fields::APPLICATION_ID`] use this
/// ID marker.
///
/// [`application_command::fields::APPLICATION_ID`]: crate::types::application_command::fields::APPLICATION_ID
#[derive(Debug)]
#[non_exhaustive]
pub struct ApplicationMarker;

/// Marker for audit log entry IDs.
///
/// [`AuditLogEntry`] uses this ID marker.
///
/// [`AuditLogEntry`]: crate::audit_log::AuditLogEntry
#[derive(Debug)]
#[non_exhaustive]
pub struct AuditLogEntryMarker;

/// Marker for channel IDs.
///
/// Fields such as [`channel::fields::PARENT_ID`] or
/// [`guild::fields::AFK_CHANNEL_ID`] use this ID marker.
///
/// [`channel::fields::PARENT_ID`]: crate::types::channel::fields::PARENT_ID
/// [`guild::fields::AFK_CHANNEL_ID`]: crate::types::guild::fields::AFK_CHANNEL_ID
#[derive(Debug)]
#[non_exhaustive]
pub struct ChannelMarker;

/// Marker for application command IDs.
#[derive(Debug)]
#[non_exhaustive]
pub struct CommandMarker;

/// Marker for emoji IDs.
///
/// [`ForumTag`] uses this ID marker for its emoji.
///
/// [`ForumTag`]: crate::types::channel::forum_tag::ForumTag
#[derive(Debug)]
#[non_exhaustive]
pub struct EmojiMarker;

/// Marker for generic IDs.
///
/// [`ChangeValue::Id`] stores identifiers of every space with this marker;
/// cast back with [`Id::cast`] when the space is known.
///
/// [`ChangeValue::Id`]: crate::value::ChangeValue::Id
/// [`Id::cast`]: super::Id::cast
#[derive(Debug)]
#[non_exhaustive]
pub struct GenericMarker;

/// Marker for guild IDs.
#[derive(Debug)]
#[non_exhaustive]
pub struct GuildMarker;

/// Marker for integration IDs.
#[derive(Debug)]
#[non_exhaustive]
pub struct IntegrationMarker;

/// Marker for message IDs.
///
/// [`message::fields::ID`] uses this ID marker.
///
/// [`message::fields::ID`]: crate::types::message::fields::ID
#[derive(Debug)]
#[non_exhaustive]
pub struct MessageMarker;

/// Marker for onboarding prompt IDs.
#[derive(Debug)]
#[non_exhaustive]
pub struct OnboardingPromptMarker;

/// Marker for onboarding prompt option IDs.
#[derive(Debug)]
#[non_exhaustive]
pub struct OnboardingPromptOptionMarker;

/// Marker for role IDs.
///
/// Fields such as [`auto_moderation::fields::EXCLUDED_ROLE_IDS`] and
/// [`AuditLogRole`] use this ID marker.
///
/// [`auto_moderation::fields::EXCLUDED_ROLE_IDS`]: crate::types::auto_moderation::fields::EXCLUDED_ROLE_IDS
/// [`AuditLogRole`]: crate::types::role::AuditLogRole
#[derive(Debug)]
#[non_exhaustive]
pub struct RoleMarker;

/// Marker for scheduled event IDs.
#[derive(Debug)]
#[non_exhaustive]
pub struct ScheduledEventMarker;

/// Marker for scheduled event entity IDs.
#[derive(Debug)]
#[non_exhaustive]
pub struct ScheduledEventEntityMarker;

/// Marker for sticker IDs.
#[derive(Debug)]
#[non_exhaustive]
pub struct StickerMarker;

/// Marker for forum tag IDs.
///
/// [`ForumTag`] and [`channel::fields::APPLIED_TAG_IDS`] use this ID marker.
///
/// [`ForumTag`]: crate::types::channel::forum_tag::ForumTag
/// [`channel::fields::APPLIED_TAG_IDS`]: crate::types::channel::fields::APPLIED_TAG_IDS
#[derive(Debug)]
#[non_exhaustive]
pub struct TagMarker;

/// Marker for user IDs.
#[derive(Debug)]
#[non_exhaustive]
pub struct UserMarker;

/// Marker for webhook IDs.
#[derive(Debug)]
#[non_exhaustive]
pub struct WebhookMarker;
