//! Key subsetting for [`crate::types::Record`].

use crate::types::{Record, Value};

use super::options::TransformOptions;

/// Returns a new [`Record`] holding only `keys`, in the order given.
///
/// Reads [`TransformOptions::init`] and [`TransformOptions::keep_null`]. Null or absent values are
/// skipped unless `keep_null` is set, in which case they are written as null.
pub fn select<S>(record: &Record, keys: &[S], opts: &TransformOptions) -> Record
where
    S: AsRef<str>,
{
    let mut out = opts.accumulator();
    for k in keys {
        let k = k.as_ref();
        match record.get(k) {
            Some(v) if !v.is_null() => {
                out.insert(k, v.clone());
            }
            _ if opts.keep_null => {
                out.insert(k, Value::Null);
            }
            _ => tracing::trace!(key = %k, "select: skipping null or absent value"),
        }
    }
    out
}
