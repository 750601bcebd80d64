//! Key/value inversion for [`crate::types::Record`].

use crate::types::{Record, Value};

/// Returns a new [`Record`] mapping each value's string form to its key.
///
/// Values become keys via their [`std::fmt::Display`] form (`Int64(1)` becomes `"1"`). When two
/// entries share a value, the later entry wins.
pub fn invert(record: &Record) -> Record {
    let mut out = Record::with_capacity(record.len());
    for (k, v) in record.iter() {
        out.insert(v.to_string(), Value::from(k));
    }
    out
}
