//! Serialization of the tag model behind the `serde` feature.
#![cfg(feature = "serde")]
#![expect(clippy::expect_used, reason = "tests fail loudly on unexpected errors")]

use acctag::{Alias, LongTag, PriorityClass, Symbol, Tag, standardize};
use serde_json::json;

#[test]
fn tags_round_trip_through_json() {
    let tag = Tag::coord(Tag::central(Alias::Moment(3)));
    let encoded = serde_json::to_string(&tag).expect("tag should serialize");
    let decoded: Tag = serde_json::from_str(&encoded).expect("tag should deserialize");
    assert_eq!(decoded, tag);
}

#[test]
fn tags_use_externally_tagged_variants() {
    let tag = Tag::divide_by_count(Symbol::PowerSum(1));
    let value = serde_json::to_value(&tag).expect("tag should serialize");
    assert_eq!(
        value,
        json!({ "Modified": ["DivideByCount", { "Symbol": { "PowerSum": 1 } }] })
    );
}

#[test]
fn canonical_tags_serialize_like_plain_tags() {
    let canonical = standardize(&Alias::Mean.into()).expect("mean should standardize");
    let plain = canonical.as_tag().clone();
    assert_eq!(
        serde_json::to_value(&canonical).expect("canonical tag should serialize"),
        serde_json::to_value(&plain).expect("tag should serialize"),
    );
}

#[test]
fn long_tags_expose_slots() {
    let canonical = standardize(&Alias::Mean.into()).expect("mean should standardize");
    let value = serde_json::to_value(LongTag::expand(&canonical)).expect("long tag should serialize");
    assert_eq!(value.get("start"), Some(&json!("access-data")));
    assert_eq!(
        value.get("slots"),
        Some(&json!(["Placeholder", { "Modifier": "DivideByCount" }, "Placeholder"]))
    );
}

#[test]
fn priority_classes_use_kebab_case() {
    let value = serde_json::to_value(PriorityClass::PrepareData).expect("class should serialize");
    assert_eq!(value, json!("prepare-data"));
}
