use crate::{
    audit_log::{conversion::conversion, ConversionGroup, RegistryError},
    types::channel::{fields, permission_overwrite::fields as overwrite},
};

conversion! {
    static APPLIED_TAG_IDS = fields::APPLIED_TAG_IDS => Ids;
    static ARCHIVED = fields::ARCHIVED => Bool;
    static AUTO_ARCHIVE_DURATION = fields::AUTO_ARCHIVE_DURATION => Integer;
    static AVAILABLE_TAGS = fields::AVAILABLE_TAGS => ForumTags;
    static BITRATE = fields::BITRATE => Integer;
    static DEFAULT_FORUM_LAYOUT = fields::DEFAULT_FORUM_LAYOUT => ForumLayout;
    static DEFAULT_SORT_ORDER = fields::DEFAULT_SORT_ORDER => SortOrder;
    static DEFAULT_THREAD_AUTO_ARCHIVE_AFTER = fields::DEFAULT_THREAD_AUTO_ARCHIVE_AFTER => Integer;
    static DEFAULT_THREAD_REACTION = fields::DEFAULT_THREAD_REACTION => Object;
    static DEFAULT_THREAD_SLOWMODE = fields::DEFAULT_THREAD_SLOWMODE => Integer;
    static FLAGS = fields::FLAGS => ChannelFlags;
    static INVITABLE = fields::INVITABLE => Bool;
    static LOCKED = fields::LOCKED => Bool;
    static NAME = fields::NAME => String;
    static NSFW = fields::NSFW => Bool;
    static PARENT_ID = fields::PARENT_ID => Id;
    static PERMISSION_OVERWRITES = fields::PERMISSION_OVERWRITES => PermissionOverwrites;
    static POSITION = fields::POSITION => Integer;
    static REGION = fields::REGION => String;
    static SLOWMODE = fields::SLOWMODE => Integer;
    static TOPIC = fields::TOPIC => String;
    static TYPE = fields::TYPE => ChannelType;
    static USER_LIMIT = fields::USER_LIMIT => Integer;
    static VIDEO_QUALITY_MODE = fields::VIDEO_QUALITY_MODE => VideoQualityMode;

    static ALLOW = overwrite::ALLOW => Permissions;
    static DENY = overwrite::DENY => Permissions;
    static TARGET_ID = overwrite::TARGET_ID => Id;
    static TARGET_TYPE = overwrite::TARGET_TYPE => PermissionOverwriteTargetType;
}

pub(super) fn group() -> Result<ConversionGroup, RegistryError> {
    ConversionGroup::builder("channel")
        .entries([
            &APPLIED_TAG_IDS,
            &ARCHIVED,
            &AUTO_ARCHIVE_DURATION,
            &AVAILABLE_TAGS,
            &BITRATE,
            &DEFAULT_FORUM_LAYOUT,
            &DEFAULT_SORT_ORDER,
            &DEFAULT_THREAD_AUTO_ARCHIVE_AFTER,
            &DEFAULT_THREAD_REACTION,
            &DEFAULT_THREAD_SLOWMODE,
            &FLAGS,
            &INVITABLE,
            &LOCKED,
            &NAME,
            &NSFW,
            &PARENT_ID,
            &PERMISSION_OVERWRITES,
            &POSITION,
            &REGION,
            &SLOWMODE,
            &TOPIC,
            &TYPE,
            &USER_LIMIT,
            &VIDEO_QUALITY_MODE,
        ])
        .build()
}

/// Changes of a single permission overwrite.
pub(super) fn permission_overwrite_group() -> Result<ConversionGroup, RegistryError> {
    ConversionGroup::builder("permission overwrite")
        .entries([&ALLOW, &DENY, &TARGET_ID, &TARGET_TYPE])
        .build()
}
