use super::DynamicValue;

/// Safely drops `value` in heap memory.
///
/// This avoids stack overflows with deeply nested values.
pub fn safely(value: DynamicValue) {
    match value {
        DynamicValue::Array(..) | DynamicValue::Object(..) => {}
        _ => return,
    }

    let mut stack = vec![value];
    while let Some(value) = stack.pop() {
        match value {
            DynamicValue::Array(arr) => stack.extend(arr),
            DynamicValue::Object(obj) => stack.extend(obj.into_iter().map(|(_, child)| child)),
            _ => (),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Array, DynamicValue};

    #[test]
    fn deep_nesting_does_not_overflow() {
        let mut value = DynamicValue::Null;
        for _ in 0..200_000 {
            value = DynamicValue::Array(Array::new(vec![value]));
        }

        drop(value);
    }
}
