//! JSON conversion for [`Value`] and [`Record`].
//!
//! Supported inputs for [`Record::from_json_str`]: a single JSON object, e.g. `{"a":1,"b":[2,3]}`.
//! Key order is preserved. Integers that fit in `i64` become [`Value::Int64`]; every other number
//! becomes [`Value::Float64`].

use serde::de::Deserializer;
use serde::ser::{SerializeMap, SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};

use crate::error::{RecordError, RecordResult};
use crate::types::{Record, Value};

impl Record {
    /// Parse a record from a JSON object.
    pub fn from_json_str(input: &str) -> RecordResult<Record> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(RecordError::NotAnObject {
                found: "empty input".to_string(),
            });
        }

        match serde_json::from_str::<serde_json::Value>(trimmed)? {
            serde_json::Value::Object(map) => Ok(record_from_json_map(map)),
            other => Err(RecordError::NotAnObject {
                found: json_type_name(&other).to_string(),
            }),
        }
    }

    /// Render the record as a compact JSON object, keys in insertion order.
    pub fn to_json_string(&self) -> String {
        serde_json::Value::from(Value::Map(self.clone())).to_string()
    }
}

fn record_from_json_map(map: serde_json::Map<String, serde_json::Value>) -> Record {
    let mut out = Record::with_capacity(map.len());
    for (k, v) in map {
        out.insert(k, Value::from(v));
    }
    out
}

fn json_type_name(v: &serde_json::Value) -> &'static str {
    match v {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int64(i),
                None => n.as_f64().map(Value::Float64).unwrap_or(Value::Null),
            },
            serde_json::Value::String(s) => Value::Utf8(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Map(record_from_json_map(map)),
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(v: Value) -> Self {
        match v {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(b),
            Value::Int64(n) => serde_json::Value::from(n),
            // Non-finite floats have no JSON form.
            Value::Float64(x) => serde_json::Number::from_f64(x)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::Utf8(s) => serde_json::Value::String(s),
            Value::List(items) => {
                serde_json::Value::Array(items.into_iter().map(serde_json::Value::from).collect())
            }
            Value::Map(r) => serde_json::Value::Object(
                r.into_iter()
                    .map(|(k, v)| (k, serde_json::Value::from(v)))
                    .collect(),
            ),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int64(n) => serializer.serialize_i64(*n),
            Value::Float64(x) if x.is_finite() => serializer.serialize_f64(*x),
            Value::Float64(_) => serializer.serialize_unit(),
            Value::Utf8(s) => serializer.serialize_str(s),
            Value::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Map(r) => r.serialize(serializer),
        }
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (k, v) in self.iter() {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(Value::from)
    }
}

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::Object(map) => Ok(record_from_json_map(map)),
            other => Err(serde::de::Error::custom(format!(
                "expected a json object, found {}",
                json_type_name(&other)
            ))),
        }
    }
}
