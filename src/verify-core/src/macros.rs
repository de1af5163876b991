/// Constructs a [`DynamicValue`](crate::DynamicValue) from JSON-like
/// literal syntax.
///
/// Untyped integer literals become `Int64` and untyped float literals
/// become `Float64`. Any other expression is converted through its
/// [`From`] impl, which keeps its native width. Literals with a type
/// suffix other than `i64`/`f64` need parentheses to be treated as
/// expressions, i.e. `(3u16)`. Object keys must be string literals;
/// when a key repeats, the first value wins.
///
/// ```
/// use verify_core::{dynamic, DynamicValue};
///
/// let width = 8u8;
/// let value = dynamic!({
///     "name": "Alice",
///     "scores": [1, 2.5, -3, null],
///     "width": width,
///     "k": 1,
///     "k": 2,
/// });
///
/// assert_eq!(value.get("width"), Some(&DynamicValue::UInt8(8)));
/// assert_eq!(value.get("k"), Some(&DynamicValue::Int64(1)));
/// ```
#[macro_export]
macro_rules! dynamic {
    ($($value:tt)+) => {
        $crate::__dynamic_internal!($($value)+)
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! __dynamic_internal {
    // Array elements are munched one at a time into `[$elems]`.
    (@array [$($elems:expr,)*]) => {
        ::std::vec![$($elems,)*]
    };
    (@array [$($elems:expr),*]) => {
        ::std::vec![$($elems),*]
    };
    (@array [$($elems:expr,)*] null $($rest:tt)*) => {
        $crate::__dynamic_internal!(@array [$($elems,)* $crate::DynamicValue::Null] $($rest)*)
    };
    (@array [$($elems:expr,)*] [$($array:tt)*] $($rest:tt)*) => {
        $crate::__dynamic_internal!(@array [$($elems,)* $crate::__dynamic_internal!([$($array)*])] $($rest)*)
    };
    (@array [$($elems:expr,)*] {$($object:tt)*} $($rest:tt)*) => {
        $crate::__dynamic_internal!(@array [$($elems,)* $crate::__dynamic_internal!({$($object)*})] $($rest)*)
    };
    (@array [$($elems:expr,)*] $next:literal, $($rest:tt)*) => {
        $crate::__dynamic_internal!(@array [$($elems,)* $crate::value::LiteralValue::into_literal($next),] $($rest)*)
    };
    (@array [$($elems:expr,)*] $last:literal) => {
        $crate::__dynamic_internal!(@array [$($elems,)* $crate::value::LiteralValue::into_literal($last)])
    };
    (@array [$($elems:expr,)*] $next:expr, $($rest:tt)*) => {
        $crate::__dynamic_internal!(@array [$($elems,)* $crate::DynamicValue::from($next),] $($rest)*)
    };
    (@array [$($elems:expr,)*] $last:expr) => {
        $crate::__dynamic_internal!(@array [$($elems,)* $crate::DynamicValue::from($last)])
    };
    (@array [$($elems:expr),*] , $($rest:tt)*) => {
        $crate::__dynamic_internal!(@array [$($elems,)*] $($rest)*)
    };

    // Object members are munched into `[$entries]` as (key, value) pairs.
    (@object [$($entries:expr,)*]) => {
        ::std::vec![$($entries,)*]
    };
    (@object [$($entries:expr),*]) => {
        ::std::vec![$($entries),*]
    };
    (@object [$($entries:expr,)*] $key:literal : null $($rest:tt)*) => {
        $crate::__dynamic_internal!(@object [$($entries,)* (::std::string::String::from($key), $crate::DynamicValue::Null)] $($rest)*)
    };
    (@object [$($entries:expr,)*] $key:literal : [$($array:tt)*] $($rest:tt)*) => {
        $crate::__dynamic_internal!(@object [$($entries,)* (::std::string::String::from($key), $crate::__dynamic_internal!([$($array)*]))] $($rest)*)
    };
    (@object [$($entries:expr,)*] $key:literal : {$($object:tt)*} $($rest:tt)*) => {
        $crate::__dynamic_internal!(@object [$($entries,)* (::std::string::String::from($key), $crate::__dynamic_internal!({$($object)*}))] $($rest)*)
    };
    (@object [$($entries:expr,)*] $key:literal : $value:literal, $($rest:tt)*) => {
        $crate::__dynamic_internal!(@object [$($entries,)* (::std::string::String::from($key), $crate::value::LiteralValue::into_literal($value)),] $($rest)*)
    };
    (@object [$($entries:expr,)*] $key:literal : $value:literal) => {
        $crate::__dynamic_internal!(@object [$($entries,)* (::std::string::String::from($key), $crate::value::LiteralValue::into_literal($value))])
    };
    (@object [$($entries:expr,)*] $key:literal : $value:expr, $($rest:tt)*) => {
        $crate::__dynamic_internal!(@object [$($entries,)* (::std::string::String::from($key), $crate::DynamicValue::from($value)),] $($rest)*)
    };
    (@object [$($entries:expr,)*] $key:literal : $value:expr) => {
        $crate::__dynamic_internal!(@object [$($entries,)* (::std::string::String::from($key), $crate::DynamicValue::from($value))])
    };
    (@object [$($entries:expr),*] , $($rest:tt)*) => {
        $crate::__dynamic_internal!(@object [$($entries,)*] $($rest)*)
    };

    (null) => {
        $crate::DynamicValue::Null
    };
    ([]) => {
        $crate::DynamicValue::Array($crate::Array::default())
    };
    ([ $($tt:tt)+ ]) => {
        $crate::DynamicValue::Array($crate::Array::new($crate::__dynamic_internal!(@array [] $($tt)+)))
    };
    ({}) => {
        $crate::DynamicValue::Object($crate::Object::default())
    };
    ({ $($tt:tt)+ }) => {
        $crate::DynamicValue::Object($crate::Object::from_entries($crate::__dynamic_internal!(@object [] $($tt)+)))
    };
    ($value:literal) => {
        $crate::value::LiteralValue::into_literal($value)
    };
    ($other:expr) => {
        $crate::DynamicValue::from($other)
    };
}

#[cfg(test)]
mod tests {
    use crate::{Array, DynamicValue, Object};

    #[test]
    fn scalars() {
        assert_eq!(dynamic!(null), DynamicValue::Null);
        assert_eq!(dynamic!(true), DynamicValue::Bool(true));
        assert_eq!(dynamic!(7), DynamicValue::Int64(7));
        assert_eq!(dynamic!(-7), DynamicValue::Int64(-7));
        assert_eq!(dynamic!(0.25), DynamicValue::Float64(0.25));
        assert_eq!(dynamic!("s"), DynamicValue::String("s".into()));
        assert_eq!(dynamic!((3u16)), DynamicValue::UInt16(3));
    }

    #[test]
    fn empty_containers() {
        assert_eq!(dynamic!([]), DynamicValue::Array(Array::default()));
        assert_eq!(dynamic!({}), DynamicValue::Object(Object::default()));
    }

    #[test]
    fn nested() {
        let id = String::from("inv-1");
        let value = dynamic!({
            "id": id.clone(),
            "keys": ["a", "b",],
            "ext": false,
            "meta": {"depth": [[], {}], "none": null},
            "offset": -1.5,
        });

        let obj = value.as_object().unwrap();
        assert_eq!(obj.get_str("id"), Some("inv-1"));
        assert_eq!(obj.get_array("keys").map(|a| a.len()), Some(2));
        assert_eq!(obj["ext"], DynamicValue::Bool(false));
        assert_eq!(value.pointer("/meta/none"), Some(&DynamicValue::Null));
        assert_eq!(value.pointer("/meta/depth/0"), Some(&dynamic!([])));
        assert_eq!(obj["offset"], DynamicValue::Float64(-1.5));
    }

    #[test]
    fn expressions_keep_width() {
        let small = 4i8;
        let value = dynamic!([small, 1 + 1, -2]);

        assert_eq!(
            value,
            DynamicValue::Array(Array::new(vec![
                DynamicValue::Int8(4),
                DynamicValue::Int32(2),
                DynamicValue::Int64(-2),
            ]))
        );
    }

    #[test]
    fn duplicate_keys_keep_first() {
        assert_eq!(dynamic!({"k": 1, "k": 2}), dynamic!({"k": 1}));
    }
}
