use crate::{
    audit_log::{conversion::conversion, ConversionGroup, Placement, RegistryError},
    types::auto_moderation::fields,
};

conversion! {
    static ACTIONS = fields::ACTIONS => Objects;
    static ENABLED = fields::ENABLED => Bool;
    static EVENT_TYPE = fields::EVENT_TYPE => AutoModerationEventType;
    static EXCLUDED_CHANNEL_IDS = fields::EXCLUDED_CHANNEL_IDS => Ids;
    static EXCLUDED_KEYWORDS = fields::EXCLUDED_KEYWORDS => Strings;
    static EXCLUDED_ROLE_IDS = fields::EXCLUDED_ROLE_IDS => Ids;
    static KEYWORDS = fields::KEYWORDS => Strings;
    static NAME = fields::NAME => String;
    static REGEX_PATTERNS = fields::REGEX_PATTERNS => Strings;
    static TRIGGER_METADATA = fields::TRIGGER_METADATA => Object;
    static TRIGGER_TYPE = fields::TRIGGER_TYPE => AutoModerationTriggerType;
}

pub(super) fn group() -> Result<ConversionGroup, RegistryError> {
    ConversionGroup::builder("auto moderation rule")
        .entries([
            &ACTIONS,
            &ENABLED,
            &EVENT_TYPE,
            &EXCLUDED_CHANNEL_IDS,
            &EXCLUDED_KEYWORDS,
            &EXCLUDED_ROLE_IDS,
            &KEYWORDS,
            &NAME,
            &REGEX_PATTERNS,
            &TRIGGER_METADATA,
            &TRIGGER_TYPE,
        ])
        .alias("$add_keyword_filter", "keywords", Placement::Added)
        .alias("$remove_keyword_filter", "keywords", Placement::Removed)
        .alias("$add_regex_patterns", "regex_patterns", Placement::Added)
        .alias("$remove_regex_patterns", "regex_patterns", Placement::Removed)
        .alias("$add_allow_list", "excluded_keywords", Placement::Added)
        .alias("$remove_allow_list", "excluded_keywords", Placement::Removed)
        .build()
}
