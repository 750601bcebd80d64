//! Keyed mapping for [`crate::types::Record`].

use crate::types::{Record, Value, NULL};

use super::options::TransformOptions;

/// Returns a new [`Record`] by computing a key and a value for every visited entry.
///
/// For the `i`-th visited key `k` with current value `v` (null if `k` is absent):
///
/// - `key_fn(k, v, i)` computes the output key; `None` skips the entry, and `value_fn` is not
///   called for it.
/// - `value_fn(new_key, v, i)` computes the output value. Note it receives the *renamed* key.
/// - Unless [`TransformOptions::keep_null`] is set, entries whose computed value is null are
///   skipped.
///
/// Results are written into [`TransformOptions::init`] (or an empty record); later writes to the
/// same key win. Pass [`same_key`] / [`same_value`] to leave either side unchanged.
pub fn map<K, V>(record: &Record, mut key_fn: K, mut value_fn: V, opts: &TransformOptions) -> Record
where
    K: FnMut(&str, &Value, usize) -> Option<String>,
    V: FnMut(&str, &Value, usize) -> Value,
{
    let mut out = opts.accumulator();
    for (i, k) in opts.visit_keys(record).iter().enumerate() {
        let k = k.as_str();
        let v = record.get(k).unwrap_or(&NULL);
        let Some(new_key) = key_fn(k, v, i) else {
            tracing::trace!(key = %k, index = i, "map: key transform dropped entry");
            continue;
        };
        let new_value = value_fn(new_key.as_str(), v, i);
        if new_value.is_null() && !opts.keep_null {
            tracing::trace!(key = %new_key, index = i, "map: skipping null value");
            continue;
        }
        out.insert(new_key, new_value);
    }
    out
}

/// Identity key transform for [`map()`].
pub fn same_key(k: &str, _v: &Value, _i: usize) -> Option<String> {
    Some(k.to_string())
}

/// Identity value transform for [`map()`].
pub fn same_value(_k: &str, v: &Value, _i: usize) -> Value {
    v.clone()
}

#[cfg(test)]
mod tests {
    use super::{map, same_key, same_value};
    use crate::processing::TransformOptions;
    use crate::types::{Record, Value};

    fn rec(json: &str) -> Record {
        Record::from_json_str(json).unwrap()
    }

    fn val2str(v: &Value) -> String {
        match v {
            Value::Null => "N".to_string(),
            Value::Bool(b) => (if *b { "T" } else { "F" }).to_string(),
            Value::List(items) => format!("[{}]", items.len()),
            Value::Map(r) => format!("{{{}}}", r.len()),
            other => other.to_string(),
        }
    }

    fn kvi(k: &str, v: &Value, i: usize) -> String {
        format!("{k}@{i}.{}", val2str(v))
    }

    fn key_gt(lim: &'static str) -> impl FnMut(&str, &Value, usize) -> Option<String> {
        move |k, _, _| (k > lim).then(|| k.to_string())
    }

    fn value_gt(lim: i64) -> impl FnMut(&str, &Value, usize) -> Value {
        move |_, v, _| match v {
            Value::Int64(n) if *n > lim => v.clone(),
            _ => Value::Null,
        }
    }

    #[test]
    fn map_empty_record() {
        let out = map(&Record::new(), same_key, same_value, &TransformOptions::default());
        assert!(out.is_empty());
    }

    #[test]
    fn map_identity_drops_nulls() {
        let out = map(
            &rec(r#"{"a":3,"b":null,"c":13}"#),
            same_key,
            same_value,
            &TransformOptions::default(),
        );
        assert_eq!(out, rec(r#"{"a":3,"c":13}"#));
    }

    #[test]
    fn map_values_with_key_and_index() {
        let out = map(
            &rec(r#"{"a":3,"b":7,"c":13}"#),
            same_key,
            |k, v, i| Value::from(kvi(k, v, i)),
            &TransformOptions::default(),
        );
        assert_eq!(out, rec(r#"{"a":"a@0.3","b":"b@1.7","c":"c@2.13"}"#));
    }

    #[test]
    fn map_keys_with_value_and_index() {
        let out = map(
            &rec(r#"{"a":3,"b":{"z":[7,8]},"c":13}"#),
            |k, v, i| Some(kvi(k, v, i)),
            same_value,
            &TransformOptions::default(),
        );
        assert_eq!(out, rec(r#"{"a@0.3":3,"b@1.{1}":{"z":[7,8]},"c@2.13":13}"#));
    }

    #[test]
    fn map_writes_into_init_and_honors_key_list() {
        let src = rec(r#"{"a":3,"b":{"z":[7,8]},"c":13}"#);
        let opts = TransformOptions::default().with_init(rec(r#"{"q":9}"#));
        let out = map(&src, |k, v, i| Some(kvi(k, v, i)), same_value, &opts);
        assert_eq!(out, rec(r#"{"q":9,"a@0.3":3,"b@1.{1}":{"z":[7,8]},"c@2.13":13}"#));

        let opts = opts.with_keys(["c"]);
        let out = map(&src, |k, v, i| Some(kvi(k, v, i)), same_value, &opts);
        assert_eq!(out, rec(r#"{"q":9,"c@0.13":13}"#));
    }

    #[test]
    fn map_skips_dropped_keys_and_null_values() {
        let opts = TransformOptions::default().with_init(rec(r#"{"a":1}"#));
        let out = map(&rec(r#"{"b":2,"c":7,"d":2}"#), key_gt("b"), same_value, &opts);
        assert_eq!(out, rec(r#"{"a":1,"c":7,"d":2}"#));

        let src = rec(r#"{"b":3,"c":7,"d":2}"#);
        let out = map(&src, same_key, value_gt(2), &TransformOptions::default());
        assert_eq!(out, rec(r#"{"b":3,"c":7}"#));

        let out = map(&src, key_gt("b"), value_gt(2), &TransformOptions::default());
        assert_eq!(out, rec(r#"{"c":7}"#));
    }

    #[test]
    fn map_keep_null_retains_null_values_but_not_dropped_keys() {
        let src = rec(r#"{"b":3,"c":7,"d":2}"#);
        let opts = TransformOptions::default().keep_null(true);
        let out = map(&src, key_gt("b"), value_gt(2), &opts);
        assert_eq!(out, rec(r#"{"c":7,"d":null}"#));
    }

    #[test]
    fn map_absent_listed_key_is_seen_as_null() {
        let src = rec(r#"{"a":1}"#);
        let opts = TransformOptions::default().with_keys(["a", "missing"]).keep_null(true);
        let out = map(&src, same_key, same_value, &opts);
        assert_eq!(out, rec(r#"{"a":1,"missing":null}"#));
    }

    #[test]
    fn map_renamed_key_collision_last_write_wins() {
        let out = map(
            &rec(r#"{"a":1,"b":2}"#),
            |_, _, _| Some("k".to_string()),
            same_value,
            &TransformOptions::default(),
        );
        assert_eq!(out, rec(r#"{"k":2}"#));
    }

    #[test]
    fn map_value_fn_not_called_for_dropped_keys() {
        let mut seen = Vec::new();
        let out = map(
            &rec(r#"{"a":1,"b":2,"c":3}"#),
            |k, _, _| (k != "b").then(|| k.to_uppercase()),
            |k, v, i| {
                seen.push((k.to_string(), i));
                v.clone()
            },
            &TransformOptions::default(),
        );
        assert_eq!(out, rec(r#"{"A":1,"C":3}"#));
        assert_eq!(seen, vec![("A".to_string(), 0), ("C".to_string(), 2)]);
    }

    #[test]
    fn map_leaves_source_unchanged() {
        let src = rec(r#"{"a":1}"#);
        let _ = map(&src, same_key, |_, _, _| Value::Int64(0), &TransformOptions::default());
        assert_eq!(src, rec(r#"{"a":1}"#));
    }
}
