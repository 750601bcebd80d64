//! Record transformations.
//!
//! Every function here is stateless and single-pass. The keyed transforms return a fresh
//! [`crate::types::Record`] and leave their input untouched; the nested helpers mutate the record
//! they are given.
//!
//! Currently implemented:
//!
//! - [`map()`]: rename keys and recompute values
//! - [`filter()`] / [`filter_truthy()`]: keep entries matching a predicate
//! - [`select()`]: keep only named keys
//! - [`invert()`]: swap keys and values
//! - [`oa_push()`], [`oo_put()`], [`oo_get()`]: nested list/record accessors
//! - [`len()`], [`keys()`], [`vals()`]: enumeration
//!
//! ## Example: select → map → invert
//!
//! ```rust
//! use record_kit::processing::{invert, map, same_key, select, TransformOptions};
//! use record_kit::types::{Record, Value};
//!
//! let user = Record::from_json_str(r#"{"id":7,"name":"ada","token":"s3cr3t"}"#).unwrap();
//!
//! // Drop the secret.
//! let public = select(&user, &["id", "name"], &TransformOptions::default());
//!
//! // Upper-case string values.
//! let shouted = map(
//!     &public,
//!     same_key,
//!     |_, v, _| match v {
//!         Value::Utf8(s) => Value::Utf8(s.to_uppercase()),
//!         other => other.clone(),
//!     },
//!     &TransformOptions::default(),
//! );
//! assert_eq!(shouted.to_json_string(), r#"{"id":7,"name":"ADA"}"#);
//!
//! let by_value = invert(&shouted);
//! assert_eq!(by_value.get("ADA"), Some(&Value::from("name")));
//! ```

pub mod access;
pub mod filter;
pub mod invert;
pub mod map;
pub mod nested;
pub mod options;
pub mod select;

pub use access::{keys, len, vals, EntryCount};
pub use filter::{filter, filter_truthy, truthy};
pub use invert::invert;
pub use map::{map, same_key, same_value};
pub use nested::{oa_push, oo_get, oo_put};
pub use options::TransformOptions;
pub use select::select;
