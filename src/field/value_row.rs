use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One candidate value as delivered by the metadata layer
///
/// A row holds the raw value and, optionally, a display value
/// (`[1, "Rustic Paper Wallet"]`). Only the rendered tokens take part in
/// filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValueRow(Vec<Value>);

impl ValueRow {
    pub fn new(values: Vec<Value>) -> Self {
        Self(values)
    }

    /// Single-column row holding a string value
    pub fn text(value: impl Into<String>) -> Self {
        Self(vec![Value::String(value.into())])
    }

    pub fn value(&self) -> Option<&Value> {
        self.0.first()
    }

    pub fn display_value(&self) -> Option<&str> {
        self.0.get(1).and_then(Value::as_str)
    }

    /// String renderings of every non-null column, in order
    pub fn tokens(&self) -> Vec<String> {
        self.0
            .iter()
            .filter_map(|value| match value {
                Value::Null => None,
                Value::String(s) => Some(s.clone()),
                other => Some(other.to_string()),
            })
            .collect()
    }
}

impl From<Vec<Value>> for ValueRow {
    fn from(values: Vec<Value>) -> Self {
        Self(values)
    }
}

#[cfg(test)]
#[path = "value_row_tests.rs"]
mod value_row_tests;
