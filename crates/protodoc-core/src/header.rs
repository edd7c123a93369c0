//! File-level documentation extraction
//!
//! Descriptors carry no file-level comment, so the header block is read from
//! the schema source itself. Only the first non-blank line decides: a run of
//! `///` lines or a `/** ... */` block is the header, anything else means the
//! file has none.
//!
//! Copyright (c) 2025 Protodoc Team
//! Licensed under the BSD-2-Clause license

use crate::comments::{apply_exclusion, Description, ExclusionPolicy};
use crate::error::{Error, Result};
use std::io;
use std::path::PathBuf;

const LINE_DOC: &str = "///";
const BLOCK_DOC_OPEN: &str = "/**";
const BLOCK_DOC_EMPTY: &str = "/***/";
const BLOCK_CLOSE: &str = "*/";

/// Access to schema source text by descriptor file name
pub trait SourceReader {
    fn read_source(&self, name: &str) -> Result<String>;
}

/// Reads schema sources from disk, trying each root in order
#[derive(Debug, Clone, Default)]
pub struct FsSourceReader {
    roots: Vec<PathBuf>,
}

impl FsSourceReader {
    /// Resolve names against `roots`; with no roots, names are resolved
    /// against the working directory.
    pub fn new(roots: Vec<PathBuf>) -> Self {
        Self { roots }
    }

    fn candidates(&self, name: &str) -> Vec<PathBuf> {
        if self.roots.is_empty() {
            vec![PathBuf::from(name)]
        } else {
            self.roots.iter().map(|root| root.join(name)).collect()
        }
    }
}

impl SourceReader for FsSourceReader {
    fn read_source(&self, name: &str) -> Result<String> {
        let mut first_error: Option<(PathBuf, io::Error)> = None;
        for path in self.candidates(name) {
            match std::fs::read_to_string(&path) {
                Ok(source) => {
                    tracing::trace!(path = %path.display(), "Read schema source");
                    return Ok(source);
                }
                Err(e) => {
                    if first_error.is_none() {
                        first_error = Some((path, e));
                    }
                }
            }
        }
        let (path, source) = first_error
            .unwrap_or_else(|| (PathBuf::from(name), io::Error::from(io::ErrorKind::NotFound)));
        Err(Error::io(path, source))
    }
}

/// Read `name` through `reader` and extract its header description
pub fn describe_file<R: SourceReader + ?Sized>(
    reader: &R,
    name: &str,
    policy: ExclusionPolicy,
) -> Result<Description> {
    let source = reader.read_source(name)?;
    Ok(parse_header(&source, policy))
}

/// Extract the header description from schema source text
pub fn parse_header(source: &str, policy: ExclusionPolicy) -> Description {
    let mut lines = source.lines().map(str::trim).skip_while(|line| line.is_empty());

    let text = match lines.next() {
        Some(first) if first.starts_with(LINE_DOC) => line_doc_block(first, lines),
        Some(first) if first.starts_with(BLOCK_DOC_OPEN) && !first.starts_with(BLOCK_DOC_EMPTY) => {
            block_doc(first, lines)
        }
        _ => String::new(),
    };

    apply_exclusion(text.trim(), policy)
}

fn line_doc_block<'a>(first: &'a str, rest: impl Iterator<Item = &'a str>) -> String {
    std::iter::once(first)
        .chain(rest)
        .map_while(|line| line.strip_prefix(LINE_DOC))
        .map(|line| line.strip_prefix(' ').unwrap_or(line))
        .collect::<Vec<_>>()
        .join("\n")
}

fn block_doc<'a>(first: &'a str, rest: impl Iterator<Item = &'a str>) -> String {
    // Keep the opening `*` so the first line goes through the same prefix
    // stripping as the lines after it.
    let first = &first[BLOCK_DOC_OPEN.len() - 1..];
    let mut out = Vec::new();
    for line in std::iter::once(first).chain(rest) {
        if let Some(end) = line.find(BLOCK_CLOSE) {
            let content = &line[..end];
            let start = if line.starts_with(BLOCK_CLOSE) { 0 } else { star_prefix_len(line) };
            out.push(content.get(start..).unwrap_or(""));
            break;
        }
        out.push(&line[star_prefix_len(line)..]);
    }
    out.join("\n")
}

/// Length of a leading `*` or `* ` prefix
fn star_prefix_len(line: &str) -> usize {
    if line.starts_with("* ") {
        2
    } else if line.starts_with('*') {
        1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(source: &str) -> String {
        parse_header(source, ExclusionPolicy::Honor).text
    }

    #[test]
    fn test_line_doc_header() {
        assert_eq!(
            header("/// Line one\n/// Line two\n\nsyntax = \"proto3\";\n"),
            "Line one\nLine two"
        );
    }

    #[test]
    fn test_leading_blank_lines_skipped() {
        assert_eq!(header("\n\n   \n///Tight\n///  Two spaces\nmessage A {}"), "Tight\n Two spaces");
    }

    #[test]
    fn test_line_doc_stops_at_first_plain_line() {
        assert_eq!(header("/// One\n// plain\n/// Not part\n"), "One");
    }

    #[test]
    fn test_line_doc_running_to_end_of_file() {
        assert_eq!(header("/// Only line"), "Only line");
    }

    #[test]
    fn test_block_doc_header() {
        let source = "/**\n * Title line.\n *\n * Second paragraph.\n */\nsyntax = \"proto3\";\n";
        assert_eq!(header(source), "Title line.\n\nSecond paragraph.");
    }

    #[test]
    fn test_block_doc_content_on_opening_line() {
        assert_eq!(header("/** Opening text\n * more\n */"), "Opening text\nmore");
    }

    #[test]
    fn test_single_line_block() {
        assert_eq!(header("/** Just this */\nmessage A {}"), "Just this");
    }

    #[test]
    fn test_block_closing_line_with_text() {
        assert_eq!(header("/**\n * body\n * tail */"), "body\ntail");
    }

    #[test]
    fn test_unterminated_block_takes_rest_of_file() {
        assert_eq!(header("/** start\n * middle"), "start\nmiddle");
    }

    #[test]
    fn test_empty_block_form_is_not_a_header() {
        assert_eq!(header("/***/\n/// later\n"), "");
    }

    #[test]
    fn test_no_header() {
        assert_eq!(header("syntax = \"proto3\";\n/// too late\n"), "");
        assert_eq!(header("// ordinary comment\n"), "");
        assert_eq!(header(""), "");
    }

    #[test]
    fn test_file_exclusion() {
        let d = parse_header("/// @exclude Internal file\n", ExclusionPolicy::Honor);
        assert!(d.excluded);
        assert_eq!(d.text, "Internal file");

        let d = parse_header("/// @exclude Internal file\n", ExclusionPolicy::Ignore);
        assert!(!d.excluded);
    }

    #[test]
    fn test_fs_reader_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let reader = FsSourceReader::new(vec![dir.path().to_path_buf()]);
        let err = describe_file(&reader, "nope.proto", ExclusionPolicy::Honor).unwrap_err();
        match err {
            Error::Io { path, .. } => assert_eq!(path, dir.path().join("nope.proto")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_fs_reader_searches_roots_in_order() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        std::fs::write(second.path().join("a.proto"), "/// From second\n").unwrap();

        let reader = FsSourceReader::new(vec![first.path().to_path_buf(), second.path().to_path_buf()]);
        let d = describe_file(&reader, "a.proto", ExclusionPolicy::Honor).unwrap();
        assert_eq!(d.text, "From second");
    }
}
