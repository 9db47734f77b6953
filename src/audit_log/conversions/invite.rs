use super::CHANNEL_ID;
use crate::{
    audit_log::{conversion::conversion, ConversionGroup, RegistryError},
    types::invite::fields,
};

conversion! {
    static CODE = fields::CODE => String;
    static INVITER_ID = fields::INVITER_ID => Id;
    static MAX_AGE = fields::MAX_AGE => Integer;
    static MAX_USES = fields::MAX_USES => Integer;
    static TEMPORARY = fields::TEMPORARY => Bool;
    static USES = fields::USES => Integer;
}

pub(super) fn group() -> Result<ConversionGroup, RegistryError> {
    ConversionGroup::builder("invite")
        .entries([
            &CHANNEL_ID,
            &CODE,
            &INVITER_ID,
            &MAX_AGE,
            &MAX_USES,
            &TEMPORARY,
            &USES,
        ])
        .build()
}
