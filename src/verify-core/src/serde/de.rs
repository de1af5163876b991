use std::fmt;

use ::serde::de::{self, DeserializeSeed, MapAccess, SeqAccess, Visitor};
use indexmap::IndexMap;

use crate::{Array, CodingPath, DynamicValue, Error, Object, PathSegment};

/// Mutable state threaded through a single decode.
pub(crate) struct DecodeState {
    path: CodingPath,
    recursion_limit: usize,
    failure: Option<Error>,
}

impl DecodeState {
    pub fn new(recursion_limit: usize) -> Self {
        Self {
            path: CodingPath::root(),
            recursion_limit,
            failure: None,
        }
    }

    /// Takes the structured error behind the last stringified failure.
    pub fn take_failure(&mut self) -> Option<Error> {
        self.failure.take()
    }

    // serde only transports errors as `D::Error`, so the structured
    // error is kept here for the entry points to pick up again.
    fn fail<E: de::Error>(&mut self, error: Error) -> E {
        let e = E::custom(&error);
        self.failure = Some(error);
        e
    }

    fn unsupported_shape<E: de::Error>(&mut self) -> E {
        let path = self.path.clone();
        self.fail(Error::UnsupportedShape { path })
    }

    #[inline]
    fn with_recursion_limit<F, T, E>(&mut self, f: F) -> Result<T, E>
    where
        F: FnOnce(&mut Self) -> Result<T, E>,
        E: de::Error,
    {
        if self.path.depth() >= self.recursion_limit {
            let path = self.path.clone();
            return Err(self.fail(Error::RecursionLimit { path }));
        }

        f(self)
    }
}

/// Decodes one [`DynamicValue`] at the current position of a
/// [`DecodeState`].
pub(crate) struct ValueSeed<'a> {
    state: &'a mut DecodeState,
}

impl<'a> ValueSeed<'a> {
    pub fn new(state: &'a mut DecodeState) -> Self {
        Self { state }
    }
}

impl<'de> DeserializeSeed<'de> for ValueSeed<'_> {
    type Value = DynamicValue;

    fn deserialize<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        deserializer.deserialize_any(ValueVisitor { state: self.state })
    }
}

struct ValueVisitor<'a> {
    state: &'a mut DecodeState,
}

impl<'de> Visitor<'de> for ValueVisitor<'_> {
    type Value = DynamicValue;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("any JSON value")
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E> {
        Ok(DynamicValue::Null)
    }

    fn visit_none<E>(self) -> Result<Self::Value, E> {
        Ok(DynamicValue::Null)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        ValueSeed::new(self.state).deserialize(deserializer)
    }

    fn visit_newtype_struct<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        ValueSeed::new(self.state).deserialize(deserializer)
    }

    fn visit_bool<E>(self, v: bool) -> Result<Self::Value, E> {
        Ok(DynamicValue::Bool(v))
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E> {
        Ok(DynamicValue::Int64(v))
    }

    // Unsigned input only stays unsigned when no signed
    // representation exists for it.
    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E> {
        Ok(i64::try_from(v).map_or(DynamicValue::UInt64(v), DynamicValue::Int64))
    }

    fn visit_i128<E: de::Error>(self, v: i128) -> Result<Self::Value, E> {
        if let Ok(v) = i64::try_from(v) {
            Ok(DynamicValue::Int64(v))
        } else if let Ok(v) = u64::try_from(v) {
            Ok(DynamicValue::UInt64(v))
        } else {
            Err(self.state.unsupported_shape())
        }
    }

    fn visit_u128<E: de::Error>(self, v: u128) -> Result<Self::Value, E> {
        if let Ok(v) = i64::try_from(v) {
            Ok(DynamicValue::Int64(v))
        } else if let Ok(v) = u64::try_from(v) {
            Ok(DynamicValue::UInt64(v))
        } else {
            Err(self.state.unsupported_shape())
        }
    }

    fn visit_f32<E>(self, v: f32) -> Result<Self::Value, E> {
        Ok(DynamicValue::Float64(v.into()))
    }

    fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E> {
        Ok(DynamicValue::Float64(v))
    }

    fn visit_char<E>(self, v: char) -> Result<Self::Value, E> {
        Ok(DynamicValue::from(v))
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E> {
        Ok(DynamicValue::from(v))
    }

    fn visit_string<E>(self, v: String) -> Result<Self::Value, E> {
        Ok(DynamicValue::String(v))
    }

    fn visit_bytes<E: de::Error>(self, _v: &[u8]) -> Result<Self::Value, E> {
        Err(self.state.unsupported_shape())
    }

    fn visit_enum<A>(self, _data: A) -> Result<Self::Value, A::Error>
    where
        A: de::EnumAccess<'de>,
    {
        Err(self.state.unsupported_shape())
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        self.state.with_recursion_limit(|state| {
            log::trace!("Decoding array at {}", state.path);

            let mut elements = Vec::with_capacity(seq.size_hint().unwrap_or(0).min(4096));
            loop {
                state.path.push(PathSegment::Index(elements.len()));
                let element = seq.next_element_seed(ValueSeed::new(state));
                state.path.pop();

                match element? {
                    Some(element) => elements.push(element),
                    None => break,
                }
            }

            Ok(DynamicValue::Array(Array::new(elements)))
        })
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        self.state.with_recursion_limit(|state| {
            log::trace!("Decoding object at {}", state.path);

            let mut members = IndexMap::with_capacity(map.size_hint().unwrap_or(0).min(4096));
            while let Some(key) = map.next_key_seed(ValueSeed::new(state))? {
                let DynamicValue::String(key) = key else {
                    return Err(state.unsupported_shape());
                };

                state.path.push(PathSegment::Key(key.clone()));
                let value = map.next_value_seed(ValueSeed::new(state));
                state.path.pop();

                // A repeated key replaces the earlier value in place.
                members.insert(key, value?);
            }

            Ok(DynamicValue::Object(Object::from(members)))
        })
    }
}

#[cfg(test)]
mod tests {
    use ::serde::de::{
        value::{BytesDeserializer, Error as ValueError},
        IntoDeserializer,
    };

    use crate::{dynamic, from_json_value, from_str, Decoder, DynamicValue, Error};

    #[test]
    fn primitives_in_trial_order() {
        assert_eq!(from_str("null").unwrap(), DynamicValue::Null);
        assert_eq!(from_str("true").unwrap(), DynamicValue::Bool(true));
        assert_eq!(from_str("1").unwrap(), DynamicValue::Int64(1));
        assert_eq!(from_str("-42").unwrap(), DynamicValue::Int64(-42));
        assert_eq!(
            from_str("9223372036854775807").unwrap(),
            DynamicValue::Int64(i64::MAX)
        );
        assert_eq!(
            from_str("18446744073709551615").unwrap(),
            DynamicValue::UInt64(u64::MAX)
        );
        assert_eq!(from_str("1.0").unwrap(), DynamicValue::Float64(1.0));
        assert_eq!(from_str("2.5e3").unwrap(), DynamicValue::Float64(2500.0));
        assert_eq!(from_str(r#""x""#).unwrap(), DynamicValue::from("x"));
    }

    #[test]
    fn nested_document() {
        let value = from_str(r#"{"a": [1, 2.5, "x", null], "b": {"c": true}}"#).unwrap();

        assert_eq!(value, dynamic!({"a": [1, 2.5, "x", null], "b": {"c": true}}));
        assert_eq!(
            value.to_string(),
            r#"{"a": [1, 2.5, "x", null], "b": {"c": true}}"#
        );
    }

    #[test]
    fn members_keep_input_order() {
        let value = from_str(r#"{"z": 1, "a": 2, "m": 3}"#).unwrap();
        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();

        assert_eq!(keys, ["z", "a", "m"]);
    }

    #[test]
    fn later_duplicate_key_overwrites() {
        let value = from_str(r#"{"k": 1, "k": 2}"#).unwrap();

        assert_eq!(value.get("k"), Some(&DynamicValue::Int64(2)));
        assert_eq!(value.as_object().map(|o| o.len()), Some(1));
    }

    #[test]
    fn recursion_limit() {
        let decoder = Decoder::with_recursion_limit(2);
        assert!(decoder.from_str("[[1]]").is_ok());

        let err = decoder.from_str(r#"[{"a": [1]}]"#).unwrap_err();
        match err {
            Error::RecursionLimit { path } => assert_eq!(path.to_string(), "$[0].a"),
            e => panic!("unexpected error: {e}"),
        }
    }

    fn nested_arrays(depth: usize) -> String {
        format!("{}{}", "[".repeat(depth), "]".repeat(depth))
    }

    #[test]
    fn raised_limit_accepts_deep_input() {
        let value = Decoder::with_recursion_limit(1000)
            .from_str(&nested_arrays(200))
            .unwrap();

        let mut depth = 0;
        let mut current = &value;
        while let Some(inner) = current.get_index(0) {
            current = inner;
            depth += 1;
        }
        assert_eq!(depth, 199);
    }

    #[test]
    fn default_limit_reports_path() {
        assert!(Decoder::default().from_str(&nested_arrays(128)).is_ok());

        match Decoder::default().from_slice(nested_arrays(129).as_bytes()) {
            Err(Error::RecursionLimit { path }) => {
                assert_eq!(path.depth(), 128);
                assert!(path.to_string().starts_with("$[0][0]"));
            }
            other => panic!("unexpected result: {other:?}"),
        }

        let reader = nested_arrays(129).into_bytes();
        assert!(matches!(
            Decoder::default().from_reader(reader.as_slice()),
            Err(Error::RecursionLimit { .. })
        ));
    }

    #[test]
    fn zero_limit_still_decodes_scalars() {
        let decoder = Decoder::with_recursion_limit(0);

        assert_eq!(decoder.from_str("7").unwrap(), DynamicValue::Int64(7));
        assert!(matches!(
            decoder.from_str("[]"),
            Err(Error::RecursionLimit { .. })
        ));
    }

    #[test]
    fn bytes_are_unsupported() {
        let de = BytesDeserializer::<ValueError>::new(b"raw");
        let err = Decoder::new().decode(de).unwrap_err();

        assert!(matches!(err, Error::UnsupportedShape { .. }));
        assert_eq!(err.to_string(), "unsupported value shape at $");
    }

    #[test]
    fn wide_integers() {
        let fits: ::serde::de::value::I128Deserializer<ValueError> = (-5i128).into_deserializer();
        assert_eq!(Decoder::new().decode(fits).unwrap(), DynamicValue::Int64(-5));

        let big: ::serde::de::value::U128Deserializer<ValueError> = u128::MAX.into_deserializer();
        assert!(matches!(
            Decoder::new().decode(big),
            Err(Error::UnsupportedShape { .. })
        ));
    }

    #[test]
    fn malformed_input() {
        assert!(matches!(from_str(r#"{"a": "#), Err(Error::Json(_))));
        assert!(matches!(from_str("1 2"), Err(Error::Json(_))));
    }

    #[test]
    fn from_parsed_json() {
        let json = serde_json::json!({"n": 3, "list": [true, null]});

        assert_eq!(
            from_json_value(json).unwrap(),
            dynamic!({"n": 3, "list": [true, null]})
        );
    }
}
