//! Enumeration helpers: [`len`], [`keys`], [`vals`].

use crate::types::{Record, Value, NULL};

/// Containers whose entries can be counted by [`len`].
pub trait EntryCount {
    fn entry_count(&self) -> usize;
}

impl EntryCount for Record {
    fn entry_count(&self) -> usize {
        self.len()
    }
}

impl EntryCount for [Value] {
    fn entry_count(&self) -> usize {
        self.len()
    }
}

impl EntryCount for Vec<Value> {
    fn entry_count(&self) -> usize {
        self.len()
    }
}

/// Strings count characters, not bytes.
impl EntryCount for str {
    fn entry_count(&self) -> usize {
        self.chars().count()
    }
}

/// Records count entries, lists count items, strings count characters; scalars have none.
impl EntryCount for Value {
    fn entry_count(&self) -> usize {
        match self {
            Value::Map(r) => r.entry_count(),
            Value::List(items) => items.entry_count(),
            Value::Utf8(s) => s.entry_count(),
            Value::Null | Value::Bool(_) | Value::Int64(_) | Value::Float64(_) => 0,
        }
    }
}

/// Number of entries in `container`.
pub fn len<C: EntryCount + ?Sized>(container: &C) -> usize {
    container.entry_count()
}

/// Keys of `record` in insertion order.
pub fn keys(record: &Record) -> Vec<String> {
    record.keys().map(str::to_string).collect()
}

/// Values of `record` for `keys` (default: all keys in insertion order).
///
/// Absent keys yield [`Value::Null`], so the result always has one slot per requested key. When
/// passing `None`, name the key type: `vals(&record, None::<&[&str]>)`.
pub fn vals<S>(record: &Record, keys: Option<&[S]>) -> Vec<Value>
where
    S: AsRef<str>,
{
    match keys {
        Some(keys) => keys
            .iter()
            .map(|k| record.get(k.as_ref()).unwrap_or(&NULL).clone())
            .collect(),
        None => record.values().cloned().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::{keys, len, vals};
    use crate::types::{Record, Value};

    fn rec(json: &str) -> Record {
        Record::from_json_str(json).unwrap()
    }

    #[test]
    fn keys_in_insertion_order() {
        assert!(keys(&rec("{}")).is_empty());
        assert_eq!(keys(&rec(r#"{"a":1,"b":2}"#)), vec!["a", "b"]);
        assert_eq!(keys(&rec(r#"{"b":1,"a":2}"#)), vec!["b", "a"]);
    }

    #[test]
    fn vals_default_and_listed() {
        assert!(vals(&rec("{}"), None::<&[&str]>).is_empty());
        assert_eq!(
            vals(&rec(r#"{"a":1,"b":2,"c":null}"#), None::<&[&str]>),
            vec![Value::Int64(1), Value::Int64(2), Value::Null]
        );
        assert_eq!(
            vals(&rec(r#"{"a":1,"b":2}"#), Some(&["b", "x", "a"][..])),
            vec![Value::Int64(2), Value::Null, Value::Int64(1)]
        );
    }

    #[test]
    fn vals_accepts_owned_keys_from_keys() {
        let r = rec(r#"{"b":2,"a":1}"#);
        let all = keys(&r);
        assert_eq!(
            vals(&r, Some(all.as_slice())),
            vals(&r, None::<&[String]>)
        );
        assert_eq!(
            vals(&r, Some(all.as_slice())),
            vec![Value::Int64(2), Value::Int64(1)]
        );
    }

    #[test]
    fn len_counts_entries() {
        assert_eq!(len(&rec("{}")), 0);
        assert_eq!(len(&rec(r#"{"a":1,"b":2}"#)), 2);
        let list = Value::List(vec![Value::Int64(1), Value::Int64(2), Value::Int64(3)]);
        assert_eq!(len(&list), 3);
        assert_eq!(len(&Value::from("héllo")), 5);
        assert_eq!(len(&Value::Int64(42)), 0);
        assert_eq!(len("ab"), 2);
    }
}
