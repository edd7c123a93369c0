//! Protodoc Core - documentation model builder for protobuf schemas
//!
//! This crate turns protobuf file descriptors into a document tree and
//! renders that tree as JSON or through a template.
//!
//! # Main Components
//!
//! - **Comments**: documentation comment extraction and `@exclude` handling
//! - **Header**: file-level documentation read from the schema source
//! - **Types**: display types for message fields
//! - **Assembler**: the run context that accumulates the document tree
//! - **Render**: raw-tree and templated output with the `p` and `nobr` filters
//!
//! # Example
//!
//! ```no_run
//! use protodoc_core::{render, BuildOptions, DocumentBuilder, FsSourceReader, Parameter};
//! use prost_types::FileDescriptorProto;
//!
//! fn example(files: &[FileDescriptorProto]) -> protodoc_core::Result<String> {
//!     let parameter = Parameter::parse("markdown,README.md")?;
//!     let format = parameter.output_format()?;
//!     let options = BuildOptions { exclusion: parameter.exclusion, ..Default::default() };
//!
//!     let mut builder = DocumentBuilder::new(FsSourceReader::default(), options);
//!     for file in files {
//!         builder.add_file(file)?;
//!     }
//!     render(&builder.finish(), &format)
//! }
//! ```
//!
//! Copyright (c) 2025 Protodoc Team
//! Licensed under the BSD-2-Clause license

pub mod assembler;
pub mod comments;
pub mod descriptor;
pub mod error;
pub mod header;
pub mod model;
pub mod options;
pub mod render;
pub mod sort;
pub mod templates;
pub mod types;

// Re-export main types for convenience
pub use assembler::{BuildOptions, DocumentBuilder};
pub use comments::{Description, ExclusionPolicy};
pub use error::{Error, RenderError, Result};
pub use header::{FsSourceReader, SourceReader};
pub use model::{DocumentTree, Enum, EnumValue, Field, Message, SchemaFile};
pub use options::{usage, OutputFormat, Parameter, TemplateSource};
pub use render::render;
pub use types::{Cardinality, FieldKind, LinkStyle, ScalarKind, TypeRenderer};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
