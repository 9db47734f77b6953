//! Scheduled events and the stage instances they open.

use super::CHANNEL_ID;
use crate::{
    audit_log::{conversion::conversion, ConversionGroup, RegistryError},
    types::{scheduled_event::fields as event, stage_instance::fields as stage},
};

conversion! {
    static DESCRIPTION = event::DESCRIPTION => String;
    static END = event::END => Timestamp;
    static ENTITY_ID = event::ENTITY_ID => Id;
    static ENTITY_METADATA = event::ENTITY_METADATA => Object;
    static ENTITY_TYPE = event::ENTITY_TYPE => ScheduledEventEntityType;
    static IMAGE = event::IMAGE => ImageHash;
    static NAME = event::NAME => String;
    static PRIVACY_LEVEL = event::PRIVACY_LEVEL => PrivacyLevel;
    static START = event::START => Timestamp;
    static STATUS = event::STATUS => ScheduledEventStatus;

    static STAGE_PRIVACY_LEVEL = stage::PRIVACY_LEVEL => PrivacyLevel;
    static STAGE_TOPIC = stage::TOPIC => String;
}

pub(super) fn scheduled_event_group() -> Result<ConversionGroup, RegistryError> {
    ConversionGroup::builder("scheduled event")
        .entries([
            &CHANNEL_ID,
            &DESCRIPTION,
            &END,
            &ENTITY_ID,
            &ENTITY_METADATA,
            &ENTITY_TYPE,
            &IMAGE,
            &NAME,
            &PRIVACY_LEVEL,
            &START,
            &STATUS,
        ])
        .build()
}

pub(super) fn stage_instance_group() -> Result<ConversionGroup, RegistryError> {
    ConversionGroup::builder("stage instance")
        .entries([&CHANNEL_ID, &STAGE_PRIVACY_LEVEL, &STAGE_TOPIC])
        .build()
}
