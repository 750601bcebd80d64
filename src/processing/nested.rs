//! Accessors for records holding nested lists and records.
//!
//! A slot counts as empty when it is absent or holds a falsy value (see [`Value::is_truthy`]);
//! empty slots are replaced by a fresh container. A truthy slot of the wrong type is reported as
//! [`RecordError::TypeMismatch`] and left untouched.

use crate::error::{RecordError, RecordResult};
use crate::types::{Record, Value};

/// Append `value` to the list stored at `key`, creating the list if the slot is empty.
pub fn oa_push(record: &mut Record, key: &str, value: impl Into<Value>) -> RecordResult<()> {
    let slot = record.entry_or_insert_with(key, || Value::List(Vec::new()));
    if !slot.is_truthy() {
        tracing::trace!(key, replaced = slot.type_name(), "oa_push: creating list");
        *slot = Value::List(Vec::new());
    }

    if let Some(items) = slot.as_list_mut() {
        items.push(value.into());
        return Ok(());
    }

    let found = slot.type_name();
    tracing::debug!(key, found, "oa_push: slot is not a list");
    Err(RecordError::TypeMismatch {
        key: key.to_string(),
        expected: "list",
        found,
    })
}

/// Set `inner` to `value` in the record stored at `outer`, creating that record if the slot is
/// empty. Returns the previous value at `inner`.
///
/// An explicit null previously stored at `inner` is returned as `Some(Value::Null)`.
pub fn oo_put(
    record: &mut Record,
    outer: &str,
    inner: &str,
    value: impl Into<Value>,
) -> RecordResult<Option<Value>> {
    let slot = record.entry_or_insert_with(outer, || Value::Map(Record::new()));
    if !slot.is_truthy() {
        tracing::trace!(key = outer, replaced = slot.type_name(), "oo_put: creating record");
        *slot = Value::Map(Record::new());
    }

    if let Some(nested) = slot.as_record_mut() {
        return Ok(nested.insert(inner, value));
    }

    let found = slot.type_name();
    tracing::debug!(key = outer, found, "oo_put: slot is not a record");
    Err(RecordError::TypeMismatch {
        key: outer.to_string(),
        expected: "map",
        found,
    })
}

/// Look up `record[outer][inner]`.
///
/// Returns `None` if either level is missing or `outer` does not hold a record.
pub fn oo_get<'a>(record: &'a Record, outer: &str, inner: &str) -> Option<&'a Value> {
    record.get(outer)?.as_record()?.get(inner)
}
