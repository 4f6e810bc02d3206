//! Property access on objects and arrays.
//!
//! Reads are lenient: missing keys and out-of-range indices yield `nil`.
//! Writes go through a `&mut Value` slot. Objects are shared, so writing
//! into one is seen by every holder; arrays are values, so the write lands
//! in the slot's own copy.

use crate::errors::{index_out_of_bounds, invalid_key, not_an_object, type_mismatch};
use crate::{format_number, EvalError, Value};

/// Largest index an array write may extend to.
pub const MAX_ARRAY_INDEX: u32 = 1 << 24;

/// Object key for a property value: strings as-is, numbers formatted.
pub fn property_key(key: &Value) -> Result<String, EvalError> {
    match key {
        Value::Str(s) => Ok(s.to_string()),
        Value::Number(n) => Ok(format_number(*n)),
        other => Err(invalid_key(other.type_name())),
    }
}

/// Array slot a write targets. Fractional indices truncate.
pub fn array_index(key: &Value) -> Result<usize, EvalError> {
    let Value::Number(n) = key else {
        return Err(type_mismatch("number", key.type_name()));
    };
    let index = n.trunc();
    if index.is_nan() || index < 0.0 || index > f64::from(MAX_ARRAY_INDEX) {
        return Err(index_out_of_bounds(*n));
    }
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "non-negative and bounded by MAX_ARRAY_INDEX"
    )]
    let index = index as usize;
    Ok(index)
}

/// `base.key` / `base[key]`
pub fn read_member(base: &Value, key: &Value) -> Result<Value, EvalError> {
    match base {
        Value::Object(object) => {
            let key = property_key(key)?;
            Ok(object.get(&key).unwrap_or(Value::Nil))
        }
        Value::Array(items) => Ok(element_index(key)
            .and_then(|index| items.get(index))
            .cloned()
            .unwrap_or(Value::Nil)),
        other => Err(not_an_object(other.type_name())),
    }
}

/// Element a read of `key` targets. Negative and non-numeric keys match
/// no element.
fn element_index(key: &Value) -> Option<usize> {
    match key {
        Value::Number(n) if *n >= 0.0 => {
            #[expect(
                clippy::cast_possible_truncation,
                clippy::cast_sign_loss,
                reason = "saturating cast; out-of-range indices match nothing"
            )]
            let index = n.trunc() as usize;
            Some(index)
        }
        _ => None,
    }
}

/// Write `value` at `key` in `target`.
///
/// Objects are updated through their shared handle. Arrays are written in
/// place when `target` is their only holder and copied first otherwise.
/// Array writes past the end fill the gap with `nil`.
pub fn write_member(target: &mut Value, key: &Value, value: Value) -> Result<(), EvalError> {
    match target {
        Value::Object(object) => {
            object.insert(property_key(key)?, value);
            Ok(())
        }
        Value::Array(items) => {
            let index = array_index(key)?;
            let slots = items.make_mut();
            if index >= slots.len() {
                slots.resize(index + 1, Value::Nil);
            }
            slots[index] = value;
            Ok(())
        }
        other => Err(not_an_object(other.type_name())),
    }
}

/// Write `value` at the end of `path` inside `target`.
///
/// For `a.b[1].c = v`, `target` is `a` and `path` is `["b", 1, "c"]`.
/// Every array on the way is written through its slot, so an array held
/// only by its parent is never copied. Intermediate keys resolve like
/// reads: a missing one is `nil`, which cannot be written into.
pub fn write_path(target: &mut Value, path: &[Value], value: Value) -> Result<(), EvalError> {
    let [key, rest @ ..] = path else {
        *target = value;
        return Ok(());
    };
    if rest.is_empty() {
        return write_member(target, key, value);
    }
    match target {
        Value::Object(object) => {
            let key = property_key(key)?;
            let Some(mut child) = object.get(&key) else {
                return Err(not_an_object(Value::Nil.type_name()));
            };
            if !matches!(child, Value::Array(_)) {
                return write_path(&mut child, rest, value);
            }
            // Detach the array while the rest of the path is written so
            // the object's slot is not a second holder.
            object.insert(key.clone(), Value::Nil);
            let written = write_path(&mut child, rest, value);
            object.insert(key, child);
            written
        }
        Value::Array(items) => {
            let Some(index) = element_index(key).filter(|&index| index < items.len()) else {
                return Err(not_an_object(Value::Nil.type_name()));
            };
            write_path(&mut items.make_mut()[index], rest, value)
        }
        other => Err(not_an_object(other.type_name())),
    }
}
