//! Error types for the protodoc core library
//!
//! Every failure in a documentation run is fatal: the first error aborts the
//! run, the accumulated document tree is discarded and no output is written.
//!
//! Copyright (c) 2025 Protodoc Team
//! Licensed under the BSD-2-Clause license

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for documentation runs
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed plugin parameter; the message is the usage string
    #[error("{usage}")]
    Usage { usage: String },

    /// A schema source or template file could not be read
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The template engine reported a located failure
    #[error(transparent)]
    Render(#[from] RenderError),

    /// Raw-tree output could not be produced
    #[error("failed to build output document")]
    Serialize {
        #[source]
        source: serde_json::Error,
    },

    /// The host referred to a schema file it did not describe
    #[error("Descriptor error: {message}")]
    Descriptor { message: String },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an I/O error for the given path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a descriptor error
    pub fn descriptor(message: impl Into<String>) -> Self {
        Error::Descriptor {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialize { source: err }
    }
}

/// A template rendering failure with its location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderError {
    /// Name of the root template
    pub template: String,
    /// Included sub-template in which the failure occurred, if any
    pub partial: Option<String>,
    /// Offset of the failure within the failing template
    pub offset: usize,
    /// Engine message
    pub message: String,
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.template)?;
        if let Some(partial) = &self.partial {
            write!(f, " in partial {}", partial)?;
        }
        write!(f, ":{}: {}", self.offset, self.message)
    }
}

impl std::error::Error for RenderError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let err = Error::io(
            "protos/missing.proto",
            std::io::Error::new(std::io::ErrorKind::NotFound, "No such file or directory"),
        );
        assert_eq!(
            err.to_string(),
            "protos/missing.proto: No such file or directory"
        );
    }

    #[test]
    fn test_render_error_display() {
        let err = RenderError {
            template: "html".to_string(),
            partial: None,
            offset: 42,
            message: "syntax error: unexpected end of input".to_string(),
        };
        assert_eq!(err.to_string(), "html:42: syntax error: unexpected end of input");

        let err = RenderError {
            partial: Some("footer.jinja".to_string()),
            ..err
        };
        assert_eq!(
            err.to_string(),
            "html in partial footer.jinja:42: syntax error: unexpected end of input"
        );
    }

    #[test]
    fn test_serialize_error_is_generic() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = Error::from(source);
        assert_eq!(err.to_string(), "failed to build output document");
    }

    #[test]
    fn test_render_error_is_transparent() {
        let err = Error::from(RenderError {
            template: "doc.jinja".to_string(),
            partial: None,
            offset: 0,
            message: "boom".to_string(),
        });
        assert_eq!(err.to_string(), "doc.jinja:0: boom");
    }
}
