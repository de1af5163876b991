//! Encoding followed by decoding must reproduce every value the
//! decoder is able to produce on its own.

use std::{
    collections::{hash_map::DefaultHasher, HashSet},
    hash::{Hash, Hasher},
};

use verify_core::{dynamic, from_slice, from_str, to_string, to_vec, DynamicValue, Error};

fn canonical_values() -> Vec<DynamicValue> {
    vec![
        dynamic!(null),
        dynamic!(true),
        dynamic!(false),
        dynamic!(0),
        dynamic!(-1),
        dynamic!((i64::MIN)),
        dynamic!((i64::MAX)),
        DynamicValue::UInt64(u64::MAX),
        DynamicValue::UInt64(i64::MAX as u64 + 1),
        dynamic!(1.5),
        dynamic!(-0.0),
        dynamic!(1e300),
        dynamic!(""),
        dynamic!("unicode \u{1F600} and \"quotes\""),
        dynamic!([]),
        dynamic!({}),
        dynamic!([1, [2, [3, []]], {"x": null}]),
        dynamic!({
            "a": [1, 2.5, "x", null],
            "b": {"c": true},
            "z": {"nested": {"deeper": [false]}},
        }),
    ]
}

fn hash_of(value: &DynamicValue) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn decode_after_encode_is_identity() -> Result<(), Error> {
    for value in canonical_values() {
        let encoded = to_vec(&value)?;
        let decoded = from_slice(&encoded)?;

        assert_eq!(decoded, value, "round trip through {}", String::from_utf8_lossy(&encoded));
    }

    Ok(())
}

#[test]
fn nested_scenario() -> Result<(), Error> {
    let value = from_str(r#"{"a": [1, 2.5, "x", null], "b": {"c": true}}"#)?;

    let a = value.get("a").and_then(DynamicValue::as_array).unwrap();
    assert_eq!(
        a.iter().map(DynamicValue::type_name).collect::<Vec<_>>(),
        ["int64", "float64", "string", "null"]
    );
    assert_eq!(value.pointer("/b/c"), Some(&DynamicValue::Bool(true)));

    // Key order is free to differ, the values are not.
    let reordered = from_str(r#"{"b": {"c": true}, "a": [1, 2.5, "x", null]}"#)?;
    assert_eq!(from_str(&to_string(&value)?)?, reordered);

    Ok(())
}

#[test]
fn non_canonical_widths_decode_canonically() -> Result<(), Error> {
    let value = dynamic!([(7u8), (-7i16), (0.5f32)]);
    let decoded = from_str(&to_string(&value)?)?;

    assert_eq!(decoded, dynamic!([7, -7, 0.5]));
    assert_ne!(decoded, value);

    Ok(())
}

#[test]
fn equality_is_strict() {
    assert_ne!(DynamicValue::Int64(1), DynamicValue::Int8(1));
    assert_ne!(dynamic!(true), dynamic!(1));
    assert_ne!(dynamic!(1), dynamic!(1.0));
    assert_eq!(dynamic!(null), dynamic!(null));
}

#[test]
fn equal_values_hash_equally() -> Result<(), Error> {
    let values = canonical_values();
    let decoded = values
        .iter()
        .map(|v| from_slice(&to_vec(v)?))
        .collect::<Result<Vec<_>, Error>>()?;

    for a in values.iter().chain(&decoded) {
        for b in values.iter().chain(&decoded) {
            if a == b {
                assert_eq!(hash_of(a), hash_of(b), "{a:?} and {b:?}");
            }
        }
    }

    Ok(())
}

#[test]
fn usable_as_set_members() {
    let set: HashSet<DynamicValue> = [dynamic!(1), dynamic!(1), dynamic!((1i8)), dynamic!("1")]
        .into_iter()
        .collect();

    assert_eq!(set.len(), 3);
}

#[test]
fn duplicate_literal_keys() {
    assert_eq!(dynamic!({"k": 1, "k": 2}), dynamic!({"k": 1}));
}
