//! Inspection record: the collected form state handed to the renderer.
//!
//! A record is an insertion-ordered mapping from name to [`FieldGroup`].
//! Basic fields are stored as top-level scalars; every other entry is a
//! section of label/value pairs whose values are already display strings.

use crate::schema;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder rendered for missing or empty values.
pub const MISSING_VALUE: &str = "N/A";

/// A top-level scalar value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScalarValue {
    /// Free text
    Text(String),
    /// Integer (model year)
    Integer(i64),
    /// Pre-rendered enumeration choice
    Choice(String),
}

impl ScalarValue {
    /// Whether the value renders as the missing placeholder.
    pub fn is_empty(&self) -> bool {
        match self {
            ScalarValue::Text(s) | ScalarValue::Choice(s) => s.is_empty(),
            ScalarValue::Integer(_) => false,
        }
    }
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarValue::Text(s) | ScalarValue::Choice(s) => f.write_str(s),
            ScalarValue::Integer(i) => write!(f, "{}", i),
        }
    }
}

impl From<&str> for ScalarValue {
    fn from(value: &str) -> Self {
        ScalarValue::Text(value.to_string())
    }
}

impl From<String> for ScalarValue {
    fn from(value: String) -> Self {
        ScalarValue::Text(value)
    }
}

impl From<i64> for ScalarValue {
    fn from(value: i64) -> Self {
        ScalarValue::Integer(value)
    }
}

/// Ordered label → value pairs of one section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Section {
    fields: IndexMap<String, String>,
}

impl Section {
    /// Create an empty section.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with_field(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(label, value);
        self
    }

    /// Insert a field. An existing label keeps its position and takes the new value.
    pub fn insert(&mut self, label: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(label.into(), value.into());
    }

    /// Raw value of a field.
    pub fn get(&self, label: &str) -> Option<&str> {
        self.fields.get(label).map(String::as_str)
    }

    /// Fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the section has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Section {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut section = Section::new();
        for (label, value) in iter {
            section.insert(label, value);
        }
        section
    }
}

/// A top-level record entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldGroup {
    /// A basic field
    Scalar(ScalarValue),
    /// A named section
    Section(Section),
}

/// Collected inspection data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InspectionRecord {
    entries: IndexMap<String, FieldGroup>,
}

impl InspectionRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a top-level scalar.
    pub fn insert_scalar(&mut self, name: impl Into<String>, value: impl Into<ScalarValue>) -> &mut Self {
        self.entries.insert(name.into(), FieldGroup::Scalar(value.into()));
        self
    }

    /// Insert a named section.
    pub fn insert_section(&mut self, name: impl Into<String>, section: Section) -> &mut Self {
        self.entries.insert(name.into(), FieldGroup::Section(section));
        self
    }

    /// Look up a top-level entry.
    pub fn get(&self, name: &str) -> Option<&FieldGroup> {
        self.entries.get(name)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldGroup)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Entries other than the basic fields, in insertion order.
    pub fn sections(&self) -> impl Iterator<Item = (&str, &FieldGroup)> {
        self.iter().filter(|(name, _)| !schema::is_basic_field(name))
    }

    /// Number of top-level entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the record has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Display value of a top-level scalar, or [`MISSING_VALUE`].
    ///
    /// Sections stored under the name also yield the placeholder; the
    /// renderer rejects that shape before asking.
    pub fn scalar_display(&self, name: &str) -> String {
        match self.entries.get(name) {
            Some(FieldGroup::Scalar(value)) if !value.is_empty() => value.to_string(),
            _ => MISSING_VALUE.to_string(),
        }
    }
}

/// Display form of a section value: the value itself, or [`MISSING_VALUE`] when empty.
pub fn display_value(value: &str) -> &str {
    if value.is_empty() {
        MISSING_VALUE
    } else {
        value
    }
}
