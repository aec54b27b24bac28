use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Snapshot of the form: field name → current string value.
///
/// No field is required and the empty string is a valid value everywhere.
/// Names that no template variant knows about are carried along but never
/// rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormFieldSet {
    fields: BTreeMap<String, String>,
}

impl FormFieldSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a flat JSON object. Numbers and booleans are kept as their
    /// textual form, `null` becomes the empty string.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        let object = match value {
            serde_json::Value::Object(map) => map,
            other => return Err(CoreError::NonStringField(format!("<root>: {other}"))),
        };

        let mut form = Self::new();
        for (name, value) in object {
            let text = match value {
                serde_json::Value::String(s) => s,
                serde_json::Value::Null => String::new(),
                serde_json::Value::Bool(b) => b.to_string(),
                serde_json::Value::Number(n) => n.to_string(),
                _ => return Err(CoreError::NonStringField(name)),
            };
            form.set(name, text);
        }
        Ok(form)
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Raw value of a field; absent fields read as empty.
    pub fn get(&self, name: &str) -> &str {
        self.fields.get(name).map(String::as_str).unwrap_or("")
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for FormFieldSet
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut form = Self::new();
        for (k, v) in iter {
            form.set(k, v);
        }
        form
    }
}
