//! Every codec kind survives validate, put and parse unchanged, boundary
//! inputs included.

use crate::{
    field::{Candidate, Codec, Field, WireObject},
    types::{
        application::fields as application,
        auto_moderation::{fields as auto_moderation, KEYWORDS_MAX, KEYWORD_LENGTH_MAX},
        channel::{fields as channel, ChannelType},
        guild::{discovery::fields as discovery, fields as guild},
        member::fields as member,
        onboarding::prompt::{fields as prompt, OPTIONS_MAX},
        role::fields as role,
        scheduled_event::fields as scheduled_event,
        sticker::fields as sticker,
        Permissions,
    },
    value::ChangeValue,
};
use chrono::DateTime;
use serde_json::json;

fn round_trip<C: Codec, const N: usize>(field: &Field<C>, candidates: [Candidate; N]) {
    for candidate in candidates {
        let described = candidate.describe();
        let value = field
            .validate(candidate)
            .unwrap_or_else(|e| panic!("{described} rejected: {e}"));

        for include_defaults in [true, false] {
            let mut data = WireObject::new();
            field.put(&value, &mut data, include_defaults);

            assert_eq!(
                field.parse(&data),
                value,
                "`{}` from {described}, written as {data:?}",
                field.name()
            );
        }
    }
}

fn text(length: usize) -> String {
    "x".repeat(length)
}

#[test]
fn bools() {
    round_trip(&application::BOT_PUBLIC, [true.into(), false.into()]);
    round_trip(&channel::NSFW, [true.into(), false.into()]);
}

#[test]
fn integers() {
    round_trip(&channel::BITRATE, [8000.into(), 64000.into(), 384_000.into()]);
    round_trip(&channel::USER_LIMIT, [0.into(), 99.into()]);
    round_trip(&role::POSITION, [0.into(), i64::MAX.into()]);
}

#[test]
fn strings() {
    round_trip(&role::NAME, [text(1).into(), text(100).into(), "é".into()]);
    round_trip(&channel::TOPIC, ["".into(), text(4096).into(), Candidate::Null]);
}

#[test]
fn colors() {
    round_trip(
        &role::COLOR,
        [0.into(), 0x00FF_FFFF.into(), "#FF0000".into()],
    );
}

#[test]
fn enums() {
    round_trip(
        &channel::TYPE,
        [
            0.into(),
            2.into(),
            255.into(),
            ChannelType::Unknown(2).into(),
            ChannelType::Unknown(200).into(),
        ],
    );
}

#[test]
fn flags() {
    round_trip(&application::FLAGS, [0.into(), 1.into(), u64::MAX.into()]);
    round_trip(
        &role::PERMISSIONS,
        [
            "0".into(),
            u64::MAX.to_string().into(),
            (Permissions::ADMINISTRATOR | Permissions::from_bits_retain(1 << 60)).into(),
        ],
    );
}

#[test]
fn ids() {
    round_trip(
        &channel::PARENT_ID,
        [
            Candidate::Null,
            0.into(),
            1.into(),
            "1101284421236781117".into(),
            u64::MAX.into(),
        ],
    );
    round_trip(
        &member::ROLE_IDS,
        [
            Candidate::Null,
            Vec::<u64>::new().into(),
            ["3", "1", "3"].into(),
            vec![Candidate::from(0), Candidate::from(u64::MAX)].into(),
        ],
    );
}

#[test]
fn timestamps() {
    let last = DateTime::from_timestamp(253_402_300_799, 999_999_999).unwrap();

    round_trip(
        &member::TIMED_OUT_UNTIL,
        [
            Candidate::Null,
            last.into(),
            "2021-01-01T03:01:01+02:00".into(),
            "2021-08-10T11:16:37.123456789+00:00".into(),
        ],
    );
}

#[test]
fn image_hashes() {
    round_trip(
        &guild::ICON,
        [
            Candidate::Null,
            "1269e74af4df7417b13759eae50c83dc".into(),
            "a_1acefe340fafb4ecefae407f3abdb323".into(),
        ],
    );
}

#[test]
fn string_arrays() {
    let full: Vec<String> = (0..KEYWORDS_MAX).map(|i| format!("{i}")).collect();

    round_trip(
        &auto_moderation::KEYWORDS,
        [
            Candidate::Null,
            Vec::<String>::new().into(),
            vec![text(KEYWORD_LENGTH_MAX)].into(),
            full.into(),
        ],
    );
    round_trip(&discovery::KEYWORDS, [["b", "a"].into()]);
}

#[test]
fn string_sets() {
    round_trip(
        &sticker::TAGS,
        [
            Candidate::Null,
            "".into(),
            "dog, cat".into(),
            [" a", "b "].into(),
            ChangeValue::StringSet([" a".to_owned(), "b".to_owned()].into()).into(),
            text(200).into(),
        ],
    );
}

#[test]
fn objects() {
    round_trip(
        &scheduled_event::ENTITY_METADATA,
        [Candidate::Null, json!({}).into(), json!({"location": "park"}).into()],
    );

    let options: Vec<_> = (0..OPTIONS_MAX).map(|i| json!({"title": i})).collect();

    round_trip(
        &prompt::OPTIONS,
        [Candidate::Null, json!([]).into(), json!(options).into()],
    );
}

#[test]
fn nested_objects() {
    round_trip(
        &channel::PERMISSION_OVERWRITES,
        [
            Candidate::Null,
            json!([]).into(),
            json!([
                {"id": "1", "type": 0, "allow": "1024", "deny": "0"},
                {"id": "2", "type": 1, "deny": "8"},
            ])
            .into(),
        ],
    );
    round_trip(
        &channel::AVAILABLE_TAGS,
        [json!([
            {"name": "help", "moderated": true, "emoji_name": "🦊"},
            {"name": "x", "emoji_id": "5", "id": "6"},
        ])
        .into()],
    );
}
