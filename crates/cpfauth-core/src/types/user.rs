//! Read-only view of a directory user record.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single name/value attribute as returned by the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryAttribute {
    /// Attribute name; may be empty in malformed records.
    pub name: String,
    /// Attribute value; absent values are empty.
    pub value: String,
}

impl DirectoryAttribute {
    /// Creates an attribute.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A user record returned by an identity directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryUser {
    /// Directory username.
    pub username: String,
    /// Attributes in directory order.
    pub attributes: Vec<DirectoryAttribute>,
}

impl DirectoryUser {
    /// Creates a user record.
    pub fn new(username: impl Into<String>, attributes: Vec<DirectoryAttribute>) -> Self {
        Self {
            username: username.into(),
            attributes,
        }
    }

    /// Returns the value of the last attribute named `name`.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .rev()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    /// Flattens attributes into a name → value map.
    ///
    /// Attributes with an empty name are dropped; a repeated name keeps the
    /// last value in directory order.
    pub fn attribute_map(&self) -> BTreeMap<String, String> {
        let mut out = BTreeMap::new();
        for attr in &self.attributes {
            if !attr.name.is_empty() {
                out.insert(attr.name.clone(), attr.value.clone());
            }
        }
        out
    }
}
