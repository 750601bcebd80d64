//! `record-kit` is a small library of helpers for transforming plain key-value records.
//!
//! A [`types::Record`] is an insertion-ordered mapping from string keys to dynamically typed
//! [`types::Value`]s. The helpers in [`processing`] cut the boilerplate of the usual record chores:
//!
//! - **keyed transforms** returning a new record: [`processing::map()`], [`processing::filter()`],
//!   [`processing::select()`], [`processing::invert()`]
//! - **nested accessors** that mutate in place: [`processing::oa_push()`],
//!   [`processing::oo_put()`], [`processing::oo_get()`]
//! - **enumeration**: [`processing::len()`], [`processing::keys()`], [`processing::vals()`]
//!
//! Absent keys and null values are ordinary data: they are skipped or returned as absent, never
//! reported as errors. The only fallible operations are JSON parsing and the nested writers
//! finding a slot of the wrong type.
//!
//! ## Quick example
//!
//! ```rust
//! use record_kit::processing::{filter, map, oo_get, oo_put, TransformOptions};
//! use record_kit::types::{Record, Value};
//!
//! # fn main() -> Result<(), record_kit::RecordError> {
//! let scores = Record::from_json_str(r#"{"ada":9,"bob":3,"cy":null}"#)?;
//!
//! // Keep scores above 5 (nulls never pass the comparison).
//! let high = filter(
//!     &scores,
//!     |_, v, _| matches!(v, Value::Int64(n) if *n > 5),
//!     &TransformOptions::default(),
//! );
//! assert_eq!(high.to_json_string(), r#"{"ada":9}"#);
//!
//! // Prefix every key; the null entry is dropped because `keep_null` is off.
//! let prefixed = map(
//!     &scores,
//!     |k, _, _| Some(format!("user.{k}")),
//!     |_, v, _| v.clone(),
//!     &TransformOptions::default(),
//! );
//! assert_eq!(prefixed.to_json_string(), r#"{"user.ada":9,"user.bob":3}"#);
//!
//! // Nested put/get.
//! let mut by_team = Record::new();
//! assert_eq!(oo_put(&mut by_team, "red", "ada", 9)?, None);
//! assert_eq!(oo_get(&by_team, "red", "ada"), Some(&Value::Int64(9)));
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`types`]: [`types::Record`] and [`types::Value`]
//! - [`processing`]: the record helpers and [`processing::TransformOptions`]
//! - [`json`]: JSON and `serde` conversions
//! - [`error`]: error types
//!
//! ## Logging
//!
//! Operations emit `tracing` events at `trace` level when they drop or replace data and at `debug`
//! level on type mismatches. The library never installs a subscriber.

pub mod error;
pub mod json;
pub mod processing;
pub mod types;

pub use error::{RecordError, RecordResult};
