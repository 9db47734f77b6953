//! Integrations and the application commands they install.

use crate::{
    audit_log::{conversion::conversion, ConversionGroup, RegistryError},
    types::{application_command::fields as command, integration::fields as integration},
};

conversion! {
    static ENABLE_EMOTICONS = integration::ENABLE_EMOTICONS => Bool;
    static EXPIRE_BEHAVIOR = integration::EXPIRE_BEHAVIOR => IntegrationExpireBehavior;
    static EXPIRE_GRACE_PERIOD = integration::EXPIRE_GRACE_PERIOD => Integer;

    static APPLICATION_ID = command::APPLICATION_ID => Id;
    static CHANNEL_ID = command::CHANNEL_ID => Id;
    static GUILD_ID = command::GUILD_ID => Id;
}

pub(super) fn integration_group() -> Result<ConversionGroup, RegistryError> {
    ConversionGroup::builder("integration")
        .entries([&ENABLE_EMOTICONS, &EXPIRE_BEHAVIOR, &EXPIRE_GRACE_PERIOD])
        .build()
}

pub(super) fn application_command_group() -> Result<ConversionGroup, RegistryError> {
    ConversionGroup::builder("application command")
        .entries([&APPLICATION_ID, &CHANNEL_ID, &GUILD_ID])
        .build()
}
