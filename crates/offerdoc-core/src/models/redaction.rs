use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::form::FormFieldSet;

/// Default in-band token that marks a field as suppressed.
pub const DEFAULT_SUPPRESS_MARKER: &str = "[hide]";

/// How suppressed fields are recognised in raw form values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedactionPolicy {
    /// Substring that flags a field. An empty marker disables redaction.
    pub marker: String,
}

impl Default for RedactionPolicy {
    fn default() -> Self {
        Self {
            marker: DEFAULT_SUPPRESS_MARKER.to_string(),
        }
    }
}

impl RedactionPolicy {
    pub fn new(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
        }
    }

    pub fn resolve(&self, raw: &str) -> FieldValue {
        if self.marker.is_empty() || !raw.contains(&self.marker) {
            return FieldValue {
                display: raw.to_string(),
                redacted: false,
            };
        }
        FieldValue {
            display: raw.replace(&self.marker, ""),
            redacted: true,
        }
    }
}

/// A field value with its redaction state derived once from the raw text.
///
/// Preview shows `display` (the marker removed). Export omits redacted
/// fields entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FieldValue {
    pub display: String,
    pub redacted: bool,
}

impl FieldValue {
    pub fn preview_text(&self) -> &str {
        &self.display
    }

    pub fn export_text(&self) -> &str {
        if self.redacted {
            ""
        } else {
            &self.display
        }
    }
}

/// The form after every field has been run through a [`RedactionPolicy`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedForm {
    values: BTreeMap<String, FieldValue>,
}

impl ResolvedForm {
    pub fn resolve(form: &FormFieldSet, policy: &RedactionPolicy) -> Self {
        let values = form
            .iter()
            .map(|(name, raw)| (name.to_string(), policy.resolve(raw)))
            .collect();
        Self { values }
    }

    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    /// Text shown in the on-screen preview; absent fields are blank.
    pub fn preview(&self, name: &str) -> &str {
        self.values.get(name).map(FieldValue::preview_text).unwrap_or("")
    }

    /// Text written to the exported document; absent and redacted fields are blank.
    pub fn export(&self, name: &str) -> &str {
        self.values.get(name).map(FieldValue::export_text).unwrap_or("")
    }

    pub fn is_redacted(&self, name: &str) -> bool {
        self.values.get(name).is_some_and(|v| v.redacted)
    }
}
