//! Options shared by [`super::map()`], [`super::filter()`] and [`super::select()`].

use crate::types::Record;

/// Options controlling a record transformation.
///
/// Use [`Default`] for common cases: start from an empty record, visit the container's own keys in
/// insertion order, and drop null values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransformOptions {
    /// Seed accumulator. If `None`, the result starts empty.
    pub init: Option<Record>,
    /// Explicit key list to visit. If `None`, the container's own keys are visited.
    ///
    /// Read by `map` and `filter`; `select` takes its key list as an argument.
    pub keys: Option<Vec<String>>,
    /// Keep entries whose value is null or absent.
    ///
    /// Read by `map` and `select`.
    pub keep_null: bool,
}

impl TransformOptions {
    /// Seed the result with `init`.
    pub fn with_init(mut self, init: Record) -> Self {
        self.init = Some(init);
        self
    }

    /// Visit exactly `keys`, in order.
    pub fn with_keys<I, K>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        self.keys = Some(keys.into_iter().map(Into::into).collect());
        self
    }

    pub fn keep_null(mut self, keep: bool) -> Self {
        self.keep_null = keep;
        self
    }

    pub(crate) fn accumulator(&self) -> Record {
        self.init.clone().unwrap_or_default()
    }

    pub(crate) fn visit_keys(&self, record: &Record) -> Vec<String> {
        match &self.keys {
            Some(keys) => keys.clone(),
            None => record.keys().map(str::to_string).collect(),
        }
    }
}
