//! Plugin parameter parsing
//!
//! The host passes a single parameter string of the form
//! `<FORMAT-OR-TEMPLATE>,<OUTPUT-NAME>[,no-exclude]`.
//!
//! Copyright (c) 2025 Protodoc Team
//! Licensed under the BSD-2-Clause license

use crate::comments::ExclusionPolicy;
use crate::error::{Error, Result};
use crate::templates::{builtin_formats, builtin_template};
use std::path::PathBuf;

/// Format token selecting raw-tree output
pub const JSON_FORMAT: &str = "json";
const NO_EXCLUDE: &str = "no-exclude";

/// Parsed plugin parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// Format name or template path, as given
    pub format: String,
    /// Name of the output file handed to the host
    pub output_name: String,
    pub exclusion: ExclusionPolicy,
}

impl Parameter {
    pub fn parse(parameter: &str) -> Result<Self> {
        let tokens: Vec<&str> = parameter.split(',').collect();

        let exclusion = match tokens.as_slice() {
            [_, _] => ExclusionPolicy::Honor,
            [_, _, NO_EXCLUDE] => ExclusionPolicy::Ignore,
            _ => return Err(Error::Usage { usage: usage() }),
        };

        Ok(Self {
            format: tokens[0].to_string(),
            output_name: tokens[1].to_string(),
            exclusion,
        })
    }

    /// Resolve the format token into an output format, reading template
    /// files eagerly
    pub fn output_format(&self) -> Result<OutputFormat> {
        OutputFormat::resolve(&self.format)
    }
}

/// Deterministic usage message listing the built-in formats
pub fn usage() -> String {
    let formats: Vec<&str> = std::iter::once(JSON_FORMAT).chain(builtin_formats()).collect();
    format!(
        "Usage: --doc_out={}|<TEMPLATE_FILENAME>,<OUT_FILENAME>[,no-exclude]:<OUT_DIR>",
        formats.join("|")
    )
}

/// How the document tree becomes output text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputFormat {
    /// Serialize the tree as JSON
    RawTree,
    /// Render the tree through a template
    Templated(TemplateSource),
}

impl OutputFormat {
    pub fn resolve(format: &str) -> Result<Self> {
        if format == JSON_FORMAT {
            return Ok(OutputFormat::RawTree);
        }
        if let Some(source) = builtin_template(format) {
            return Ok(OutputFormat::Templated(TemplateSource {
                name: format.to_string(),
                source: source.to_string(),
                include_dir: None,
            }));
        }
        TemplateSource::from_file(format).map(OutputFormat::Templated)
    }
}

/// A template and where its includes resolve
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSource {
    /// Identity used in error messages
    pub name: String,
    pub source: String,
    /// Directory searched for included templates
    pub include_dir: Option<PathBuf>,
}

impl TemplateSource {
    pub fn from_file(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let source = std::fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
        let include_dir = path
            .parent()
            .map(|dir| if dir.as_os_str().is_empty() { PathBuf::from(".") } else { dir.to_path_buf() });
        Ok(Self {
            name: path.display().to_string(),
            source,
            include_dir,
        })
    }
}
