//! Shared builders for descriptor-based tests

#![allow(dead_code)]

use prost_types::field_descriptor_proto::{Label, Type};
use prost_types::source_code_info::Location;
use prost_types::{
    DescriptorProto, EnumDescriptorProto, EnumValueDescriptorProto, FieldDescriptorProto,
    FileDescriptorProto, SourceCodeInfo,
};
use protodoc_core::{Error, Result, SourceReader};
use std::collections::HashMap;

/// In-memory schema sources keyed by descriptor file name
#[derive(Debug, Default, Clone)]
pub struct MemorySources(pub HashMap<String, String>);

impl MemorySources {
    pub fn with(mut self, name: &str, source: &str) -> Self {
        self.0.insert(name.to_string(), source.to_string());
        self
    }
}

impl SourceReader for MemorySources {
    fn read_source(&self, name: &str) -> Result<String> {
        self.0.get(name).cloned().ok_or_else(|| {
            Error::io(name, std::io::Error::new(std::io::ErrorKind::NotFound, "No such file or directory"))
        })
    }
}

pub fn field(name: &str, ty: Type, label: Label) -> FieldDescriptorProto {
    FieldDescriptorProto {
        name: Some(name.to_string()),
        r#type: Some(ty as i32),
        label: Some(label as i32),
        ..Default::default()
    }
}

pub fn reference(name: &str, ty: Type, type_name: &str, label: Label) -> FieldDescriptorProto {
    FieldDescriptorProto {
        type_name: Some(type_name.to_string()),
        ..field(name, ty, label)
    }
}

pub fn message(name: &str, fields: Vec<FieldDescriptorProto>) -> DescriptorProto {
    DescriptorProto {
        name: Some(name.to_string()),
        field: fields,
        ..Default::default()
    }
}

pub fn enumeration(name: &str, values: &[(&str, i32)]) -> EnumDescriptorProto {
    EnumDescriptorProto {
        name: Some(name.to_string()),
        value: values
            .iter()
            .map(|(value, number)| EnumValueDescriptorProto {
                name: Some(value.to_string()),
                number: Some(*number),
                ..Default::default()
            })
            .collect(),
        ..Default::default()
    }
}

/// A schema file with comments attached by descriptor path
pub struct FileBuilder {
    file: FileDescriptorProto,
    locations: Vec<Location>,
}

impl FileBuilder {
    pub fn new(name: &str, package: &str) -> Self {
        Self {
            file: FileDescriptorProto {
                name: Some(name.to_string()),
                package: if package.is_empty() { None } else { Some(package.to_string()) },
                ..Default::default()
            },
            locations: Vec::new(),
        }
    }

    pub fn message(mut self, message: DescriptorProto) -> Self {
        self.file.message_type.push(message);
        self
    }

    pub fn enumeration(mut self, en: EnumDescriptorProto) -> Self {
        self.file.enum_type.push(en);
        self
    }

    /// Attach a leading comment as the host delivers it (delimiters removed)
    pub fn leading(mut self, path: &[i32], comment: &str) -> Self {
        self.locations.push(Location {
            path: path.to_vec(),
            leading_comments: Some(comment.to_string()),
            ..Default::default()
        });
        self
    }

    pub fn trailing(mut self, path: &[i32], comment: &str) -> Self {
        self.locations.push(Location {
            path: path.to_vec(),
            trailing_comments: Some(comment.to_string()),
            ..Default::default()
        });
        self
    }

    pub fn build(mut self) -> FileDescriptorProto {
        self.file.source_code_info = Some(SourceCodeInfo {
            location: self.locations,
        });
        self.file
    }
}
