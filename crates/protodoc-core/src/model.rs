//! Document model produced by walking schema descriptors
//!
//! The records serialize with the key names templates bind to
//! (`file_name`, `message_fields`, `field_type`, ...). Nested messages and
//! enums are flattened into their file's lists, so a [`Message`] never holds
//! child types.
//!
//! Copyright (c) 2025 Protodoc Team
//! Licensed under the BSD-2-Clause license

use crate::sort::{sort_by_name, SortKey};
use serde::{Deserialize, Serialize};

/// One documented schema file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaFile {
    /// Base name of the schema file
    #[serde(rename = "file_name")]
    pub name: String,
    /// Declared package, empty if none
    #[serde(rename = "file_package")]
    pub package: String,
    /// Header documentation block
    #[serde(rename = "file_description")]
    pub description: String,
    /// Messages in pre-order walk order, nested ones included
    #[serde(rename = "file_messages")]
    pub messages: Vec<Message>,
    /// Enums in walk order, nested ones included
    #[serde(rename = "file_enums")]
    pub enums: Vec<Enum>,
}

/// A documented message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    #[serde(rename = "message_name")]
    pub name: String,
    #[serde(rename = "message_description")]
    pub description: String,
    #[serde(rename = "message_has_fields")]
    pub has_fields: bool,
    /// Fields sorted by name
    #[serde(rename = "message_fields")]
    pub fields: Vec<Field>,
}

impl Message {
    /// Create a message node, sorting its fields by name
    pub fn new(name: impl Into<String>, description: impl Into<String>, mut fields: Vec<Field>) -> Self {
        sort_by_name(&mut fields);
        Self {
            name: name.into(),
            description: description.into(),
            has_fields: !fields.is_empty(),
            fields,
        }
    }
}

/// A documented enum
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enum {
    #[serde(rename = "enum_name")]
    pub name: String,
    #[serde(rename = "enum_description")]
    pub description: String,
    /// Values sorted by name
    #[serde(rename = "enum_values")]
    pub values: Vec<EnumValue>,
}

impl Enum {
    /// Create an enum node, sorting its values by name
    pub fn new(name: impl Into<String>, description: impl Into<String>, mut values: Vec<EnumValue>) -> Self {
        sort_by_name(&mut values);
        Self {
            name: name.into(),
            description: description.into(),
            values,
        }
    }
}

/// A documented enum value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumValue {
    #[serde(rename = "value_name")]
    pub name: String,
    #[serde(rename = "value_number")]
    pub number: i32,
    #[serde(rename = "value_description")]
    pub description: String,
}

/// A documented message field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    #[serde(rename = "field_name")]
    pub name: String,
    #[serde(rename = "field_description")]
    pub description: String,
    /// Fully rendered display type, link markup included
    #[serde(rename = "field_type")]
    pub display_type: String,
}

impl SortKey for Field {
    fn sort_key(&self) -> &str {
        &self.name
    }
}

impl SortKey for EnumValue {
    fn sort_key(&self) -> &str {
        &self.name
    }
}

/// All documented files of one run, in host-supplied order
///
/// The tree only grows: files are appended once accepted and never touched
/// again. Serializes as a bare array of files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentTree {
    files: Vec<SchemaFile>,
}

impl DocumentTree {
    /// Create an empty tree
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an accepted file
    pub(crate) fn append(&mut self, file: SchemaFile) {
        self.files.push(file);
    }

    /// Files in acceptance order
    pub fn files(&self) -> &[SchemaFile] {
        &self.files
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }
}
