//! Ordered merging of partial configuration declarations.
//!
//! A build configuration is assembled from any number of fragments, each
//! declaring some subset of the top-level settings. [`resolve`] folds them in
//! declaration order: the last fragment to declare a top-level key wins in
//! full, replacing the earlier value rather than merging into it. Keys that
//! are never redeclared survive from whichever fragment introduced them.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

/// One partial configuration declaration together with a label describing
/// where it came from (a file path, `"cli"`, a test name).
#[derive(Debug, Clone)]
pub struct Fragment {
    origin: String,
    value: Value,
}

impl Fragment {
    pub fn new(origin: impl Into<String>, value: Value) -> Self {
        Self {
            origin: origin.into(),
            value,
        }
    }

    /// Label describing where this fragment was declared.
    pub fn origin(&self) -> &str {
        &self.origin
    }
}

/// A fragment whose value cannot be interpreted as a key/value mapping.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("configuration fragment `{origin}` is not a table of settings (found {found})")]
pub struct MalformedConfigError {
    origin: String,
    found: &'static str,
}

/// The merged top-level settings produced by [`resolve`].
///
/// Values are carried through untouched; range and semantic checks belong to
/// whoever consumes the document, not to the merge.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    entries: BTreeMap<String, Value>,
}

impl Document {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Deserialize the merged document into a typed representation.
    pub fn deserialize<T: DeserializeOwned>(self) -> Result<T, serde_json::Error> {
        serde_json::from_value(self.into_value())
    }

    /// The merged document as a single JSON object.
    pub fn into_value(self) -> Value {
        Value::Object(self.entries.into_iter().collect())
    }
}

/// Merge fragments in declaration order into a single [`Document`].
///
/// Replacement is shallow: a later `networks` table replaces the earlier one
/// wholesale, including subkeys the later fragment never mentioned. An empty
/// sequence of fragments yields an empty document.
pub fn resolve<I>(fragments: I) -> Result<Document, MalformedConfigError>
where
    I: IntoIterator<Item = Fragment>,
{
    let mut entries = BTreeMap::new();

    for fragment in fragments {
        match fragment.value {
            Value::Object(map) => {
                for (key, value) in map {
                    entries.insert(key, value);
                }
            }
            other => {
                return Err(MalformedConfigError {
                    origin: fragment.origin,
                    found: value_kind(&other),
                });
            }
        }
    }

    Ok(Document { entries })
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "a table",
    }
}
