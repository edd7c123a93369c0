//! Access to protobuf descriptor metadata
//!
//! Comments live in the file's `SourceCodeInfo`, keyed by the path of field
//! numbers and indices leading from the file to the item.
//!
//! Copyright (c) 2025 Protodoc Team
//! Licensed under the BSD-2-Clause license

use crate::comments::{describe, Description, ExclusionPolicy};
use crate::types::{bare_name, Cardinality, FieldKind, ScalarKind};
use prost_types::field_descriptor_proto::{Label, Type};
use prost_types::source_code_info::Location;
use prost_types::{FieldDescriptorProto, FileDescriptorProto};
use std::collections::HashMap;

/// Field numbers used in descriptor paths
pub mod tag {
    /// `FileDescriptorProto.message_type`
    pub const FILE_MESSAGE: i32 = 4;
    /// `FileDescriptorProto.enum_type`
    pub const FILE_ENUM: i32 = 5;
    /// `DescriptorProto.field`
    pub const MESSAGE_FIELD: i32 = 2;
    /// `DescriptorProto.nested_type`
    pub const MESSAGE_NESTED: i32 = 3;
    /// `DescriptorProto.enum_type`
    pub const MESSAGE_ENUM: i32 = 4;
    /// `EnumDescriptorProto.value`
    pub const ENUM_VALUE: i32 = 2;
}

/// Path of a schema item inside its file
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ItemPath(Vec<i32>);

impl ItemPath {
    pub fn root() -> Self {
        Self::default()
    }

    /// Path of the `index`-th element of list `tag` below this item
    pub fn child(&self, tag: i32, index: usize) -> Self {
        let mut path = self.0.clone();
        path.push(tag);
        path.push(index as i32);
        Self(path)
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.0
    }
}

/// Comment lookup for one file
#[derive(Debug, Default)]
pub struct SourceComments<'a> {
    by_path: HashMap<&'a [i32], &'a Location>,
}

impl<'a> SourceComments<'a> {
    pub fn new(file: &'a FileDescriptorProto) -> Self {
        let mut by_path = HashMap::new();
        if let Some(info) = &file.source_code_info {
            for location in &info.location {
                by_path.entry(location.path.as_slice()).or_insert(location);
            }
        }
        Self { by_path }
    }

    /// Raw leading and trailing comments of the item at `path`
    pub fn raw(&self, path: &ItemPath) -> (Option<&'a str>, Option<&'a str>) {
        match self.by_path.get(path.as_slice()) {
            Some(location) => (
                location.leading_comments.as_deref(),
                location.trailing_comments.as_deref(),
            ),
            None => (None, None),
        }
    }

    /// Normalized description of the item at `path`
    pub fn describe(&self, path: &ItemPath, policy: ExclusionPolicy) -> Description {
        let (leading, trailing) = self.raw(path);
        describe(leading, trailing, policy)
    }
}

/// Underlying kind of a field descriptor
pub fn field_kind(field: &FieldDescriptorProto) -> FieldKind {
    let referenced = || bare_name(field.type_name()).to_string();
    let Some(ty) = field.r#type.and_then(|raw| Type::try_from(raw).ok()) else {
        // Unresolved descriptors may leave the type unset but still name it.
        return if field.type_name.is_some() {
            FieldKind::Message(referenced())
        } else {
            FieldKind::Scalar(ScalarKind::Unknown)
        };
    };

    match ty {
        Type::Message => FieldKind::Message(referenced()),
        Type::Group => FieldKind::Group(referenced()),
        Type::Enum => FieldKind::Enum(referenced()),
        Type::Bool => FieldKind::Scalar(ScalarKind::Bool),
        Type::Bytes => FieldKind::Scalar(ScalarKind::Bytes),
        Type::String => FieldKind::Scalar(ScalarKind::String),
        Type::Double => FieldKind::Scalar(ScalarKind::Double),
        Type::Float => FieldKind::Scalar(ScalarKind::Float),
        Type::Int32 => FieldKind::Scalar(ScalarKind::Int32),
        Type::Int64 => FieldKind::Scalar(ScalarKind::Int64),
        Type::Uint32 => FieldKind::Scalar(ScalarKind::Uint32),
        Type::Uint64 => FieldKind::Scalar(ScalarKind::Uint64),
        Type::Sint32 => FieldKind::Scalar(ScalarKind::Sint32),
        Type::Sint64 => FieldKind::Scalar(ScalarKind::Sint64),
        Type::Fixed32 => FieldKind::Scalar(ScalarKind::Fixed32),
        Type::Fixed64 => FieldKind::Scalar(ScalarKind::Fixed64),
        Type::Sfixed32 => FieldKind::Scalar(ScalarKind::Sfixed32),
        Type::Sfixed64 => FieldKind::Scalar(ScalarKind::Sfixed64),
    }
}

/// Cardinality of a field descriptor
pub fn cardinality(field: &FieldDescriptorProto) -> Cardinality {
    match field.label() {
        Label::Optional => Cardinality::Optional,
        Label::Required => Cardinality::Required,
        Label::Repeated => Cardinality::Repeated,
    }
}
