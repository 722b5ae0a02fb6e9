//! Column definition model.
//!
//! A [`ColumnSet`] keeps columns in document order. Title indices are
//! positional, so the backing map must never reorder its keys.

use std::num::NonZeroUsize;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{ColumnTitlesError, Result};

/// Attribute consulted for the localized column title.
pub const TITLE_ATTRIBUTE: &str = "title";

/// Attributes describing a single table column.
///
/// Only [`TITLE_ATTRIBUTE`] is interpreted; everything else is kept opaque.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnDefinition {
    attributes: Map<String, Value>,
}

impl ColumnDefinition {
    pub fn new(attributes: Map<String, Value>) -> Self {
        Self { attributes }
    }

    /// Build a definition carrying only a title.
    pub fn titled(title: impl Into<String>) -> Self {
        let mut attributes = Map::new();
        attributes.insert(TITLE_ATTRIBUTE.to_string(), Value::String(title.into()));
        Self { attributes }
    }

    /// Whether the `title` key is present, regardless of its value.
    pub fn has_title(&self) -> bool {
        self.attributes.contains_key(TITLE_ATTRIBUTE)
    }

    /// Raw attribute lookup.
    pub fn attribute(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    /// The column title, if any.
    ///
    /// # Errors
    ///
    /// Returns [`ColumnTitlesError::InvalidTitle`] when the attribute is
    /// present but is not a JSON string. `column` is only used for the error.
    pub fn title(&self, column: &str) -> Result<Option<&str>> {
        match self.attributes.get(TITLE_ATTRIBUTE) {
            None => Ok(None),
            Some(Value::String(title)) => Ok(Some(title.as_str())),
            Some(other) => Err(ColumnTitlesError::InvalidTitle {
                column: column.to_string(),
                found: value_kind(other),
            }),
        }
    }
}

/// Ordered mapping of column identifier to definition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnSet {
    columns: IndexMap<String, ColumnDefinition>,
}

impl ColumnSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a column. Re-inserting an existing identifier replaces its
    /// definition but keeps its original position.
    pub fn insert(&mut self, identifier: impl Into<String>, definition: ColumnDefinition) {
        self.columns.insert(identifier.into(), definition);
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn get(&self, identifier: &str) -> Option<&ColumnDefinition> {
        self.columns.get(identifier)
    }

    /// Iterate columns in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ColumnDefinition)> {
        self.columns
            .iter()
            .map(|(identifier, definition)| (identifier.as_str(), definition))
    }

    /// Collect the titled columns with their 1-based positions.
    ///
    /// Every column advances the position, titled or not.
    ///
    /// # Errors
    ///
    /// Fails on the first column whose title is not a string.
    pub fn titles(&self) -> Result<Vec<TitleEntry>> {
        let mut entries = Vec::new();
        for (offset, (identifier, definition)) in self.iter().enumerate() {
            let Some(title) = definition.title(identifier)? else {
                continue;
            };
            entries.push(TitleEntry {
                index: NonZeroUsize::MIN.saturating_add(offset),
                column: identifier.to_string(),
                title: title.to_string(),
            });
        }
        Ok(entries)
    }
}

impl<K: Into<String>> FromIterator<(K, ColumnDefinition)> for ColumnSet {
    fn from_iter<I: IntoIterator<Item = (K, ColumnDefinition)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (identifier, definition) in iter {
            set.insert(identifier, definition);
        }
        set
    }
}

/// A titled column ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleEntry {
    /// 1-based document position of the column among all columns.
    pub index: NonZeroUsize,
    /// Column identifier the title came from.
    pub column: String,
    /// Title text as decoded from the input.
    pub title: String,
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn definition(value: Value) -> ColumnDefinition {
        serde_json::from_value(value).expect("column definition")
    }

    #[test]
    fn title_absent() {
        let def = definition(json!({"width": 40}));
        assert!(!def.has_title());
        assert_eq!(def.title("size").unwrap(), None);
        assert_eq!(def.attribute("width"), Some(&json!(40)));
    }

    #[test]
    fn title_present() {
        let def = definition(json!({"title": "Name", "type": "text"}));
        assert!(def.has_title());
        assert_eq!(def.title("name").unwrap(), Some("Name"));
    }

    #[test]
    fn null_title_is_rejected() {
        let def = definition(json!({"title": null}));
        assert!(def.has_title());
        let err = def.title("size").unwrap_err();
        assert!(matches!(
            err,
            ColumnTitlesError::InvalidTitle { ref column, found: "null" } if column == "size"
        ));
    }

    #[test]
    fn titles_count_untitled_columns() {
        let set: ColumnSet = [
            ("name", ColumnDefinition::titled("Name")),
            ("size", ColumnDefinition::default()),
            ("ext", ColumnDefinition::titled("Extension")),
        ]
        .into_iter()
        .collect();

        let titles = set.titles().unwrap();
        let indices: Vec<usize> = titles.iter().map(|entry| entry.index.get()).collect();
        assert_eq!(indices, vec![1, 3]);
        assert_eq!(titles[1].column, "ext");
        assert_eq!(titles[1].title, "Extension");
    }

    #[test]
    fn reinsert_keeps_first_position() {
        let mut set = ColumnSet::new();
        set.insert("a", ColumnDefinition::titled("First"));
        set.insert("b", ColumnDefinition::default());
        set.insert("a", ColumnDefinition::titled("Second"));

        assert_eq!(set.len(), 2);
        let titles = set.titles().unwrap();
        assert_eq!(titles.len(), 1);
        assert_eq!(titles[0].index.get(), 1);
        assert_eq!(titles[0].title, "Second");
    }

    #[test]
    fn empty_set_has_no_titles() {
        let set = ColumnSet::new();
        assert!(set.is_empty());
        assert!(set.titles().unwrap().is_empty());
    }
}
