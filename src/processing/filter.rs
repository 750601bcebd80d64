//! Predicate filtering for [`crate::types::Record`].

use crate::types::{Record, Value, NULL};

use super::options::TransformOptions;

/// Returns a new [`Record`] containing only entries for which `predicate(key, value, index)`
/// returns `true`.
///
/// Reads [`TransformOptions::init`] and [`TransformOptions::keys`]. A listed key that is absent
/// from `record` is offered to the predicate as null and, if kept, written as null.
pub fn filter<F>(record: &Record, mut predicate: F, opts: &TransformOptions) -> Record
where
    F: FnMut(&str, &Value, usize) -> bool,
{
    let mut out = opts.accumulator();
    for (i, k) in opts.visit_keys(record).into_iter().enumerate() {
        let v = record.get(&k).unwrap_or(&NULL);
        if predicate(k.as_str(), v, i) {
            let v = v.clone();
            out.insert(k, v);
        }
    }
    out
}

/// Default predicate: keeps truthy values (see [`Value::is_truthy`]).
pub fn truthy(_k: &str, v: &Value, _i: usize) -> bool {
    v.is_truthy()
}

/// [`filter()`] with the [`truthy`] predicate.
pub fn filter_truthy(record: &Record, opts: &TransformOptions) -> Record {
    filter(record, truthy, opts)
}
