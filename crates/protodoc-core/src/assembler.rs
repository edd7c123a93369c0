//! Document tree assembly
//!
//! A [`DocumentBuilder`] is the context of one documentation run. The host
//! hands it one schema file at a time; each accepted file is appended to the
//! tree, and [`DocumentBuilder::finish`] hands the tree to rendering once the
//! last file is in.
//!
//! Copyright (c) 2025 Protodoc Team
//! Licensed under the BSD-2-Clause license

use crate::comments::ExclusionPolicy;
use crate::descriptor::{cardinality, field_kind, tag, ItemPath, SourceComments};
use crate::error::Result;
use crate::header::{describe_file, SourceReader};
use crate::model::{DocumentTree, Enum, EnumValue, Field, Message, SchemaFile};
use crate::types::TypeRenderer;
use prost_types::{DescriptorProto, EnumDescriptorProto, FileDescriptorProto};
use std::path::Path;
use tracing::{debug, trace};

/// Settings shared by every file of a run
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    pub exclusion: ExclusionPolicy,
    pub types: TypeRenderer,
}

/// Accumulates the document tree across a run
pub struct DocumentBuilder<R> {
    reader: R,
    options: BuildOptions,
    tree: DocumentTree,
}

impl<R: SourceReader> DocumentBuilder<R> {
    /// Start a run with an empty tree
    pub fn new(reader: R, options: BuildOptions) -> Self {
        Self {
            reader,
            options,
            tree: DocumentTree::new(),
        }
    }

    /// Walk one schema file and append it to the tree.
    ///
    /// Returns `false` when the whole file is excluded. A file whose source
    /// cannot be read fails the run.
    pub fn add_file(&mut self, file: &FileDescriptorProto) -> Result<bool> {
        let header = describe_file(&self.reader, file.name(), self.options.exclusion)?;
        if header.excluded {
            debug!(file = file.name(), "Skipping excluded file");
            return Ok(false);
        }

        let walker = FileWalker {
            comments: SourceComments::new(file),
            options: &self.options,
        };
        let mut messages = Vec::new();
        let mut enums = Vec::new();

        let root = ItemPath::root();
        for (i, message) in file.message_type.iter().enumerate() {
            walker.walk_message(message, root.child(tag::FILE_MESSAGE, i), &mut messages, &mut enums);
        }
        for (i, en) in file.enum_type.iter().enumerate() {
            walker.walk_enum(en, root.child(tag::FILE_ENUM, i), &mut enums);
        }

        debug!(
            file = file.name(),
            messages = messages.len(),
            enums = enums.len(),
            "Added schema file"
        );

        self.tree.append(SchemaFile {
            name: base_name(file.name()).to_string(),
            package: file.package().to_string(),
            description: header.text,
            messages,
            enums,
        });
        Ok(true)
    }

    /// The tree accumulated so far
    pub fn tree(&self) -> &DocumentTree {
        &self.tree
    }

    /// End the run and take the tree
    pub fn finish(self) -> DocumentTree {
        self.tree
    }
}

struct FileWalker<'a> {
    comments: SourceComments<'a>,
    options: &'a BuildOptions,
}

impl FileWalker<'_> {
    /// Pre-order walk: the message itself, then its nested messages, then
    /// its nested enums, all flattened into the file lists.
    fn walk_message(
        &self,
        message: &DescriptorProto,
        path: ItemPath,
        messages: &mut Vec<Message>,
        enums: &mut Vec<Enum>,
    ) {
        let description = self.comments.describe(&path, self.options.exclusion);
        if description.excluded {
            trace!(message = message.name(), "Excluded message");
            return;
        }

        let fields = message
            .field
            .iter()
            .enumerate()
            .filter_map(|(i, field)| {
                let description = self
                    .comments
                    .describe(&path.child(tag::MESSAGE_FIELD, i), self.options.exclusion);
                if description.excluded {
                    trace!(message = message.name(), field = field.name(), "Excluded field");
                    return None;
                }
                Some(Field {
                    name: field.name().to_string(),
                    description: description.text,
                    display_type: self.options.types.render(
                        field.name(),
                        &field_kind(field),
                        cardinality(field),
                    ),
                })
            })
            .collect();

        messages.push(Message::new(message.name(), description.text, fields));

        for (i, nested) in message.nested_type.iter().enumerate() {
            self.walk_message(nested, path.child(tag::MESSAGE_NESTED, i), messages, enums);
        }
        for (i, en) in message.enum_type.iter().enumerate() {
            self.walk_enum(en, path.child(tag::MESSAGE_ENUM, i), enums);
        }
    }

    fn walk_enum(&self, en: &EnumDescriptorProto, path: ItemPath, enums: &mut Vec<Enum>) {
        let description = self.comments.describe(&path, self.options.exclusion);
        if description.excluded {
            trace!(enum_name = en.name(), "Excluded enum");
            return;
        }

        let values = en
            .value
            .iter()
            .enumerate()
            .filter_map(|(i, value)| {
                let description = self
                    .comments
                    .describe(&path.child(tag::ENUM_VALUE, i), self.options.exclusion);
                if description.excluded {
                    trace!(enum_name = en.name(), value = value.name(), "Excluded enum value");
                    return None;
                }
                Some(EnumValue {
                    name: value.name().to_string(),
                    number: value.number(),
                    description: description.text,
                })
            })
            .collect();

        enums.push(Enum::new(en.name(), description.text, values));
    }
}

fn base_name(name: &str) -> &str {
    Path::new(name)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(name)
}
