//! Source map - file registry for diagnostic rendering.
//!
//! The [`SourceMap`] owns the text of every loaded source file and answers
//! position queries (line text, snippet extraction) when diagnostics are
//! rendered.

use crate::error::{SourceMapError, SourceMapResult};
use crate::span::{FileId, Span};

/// A single registered source file.
#[derive(Debug)]
pub struct SourceFile {
    /// Display name (usually the path the driver was given).
    pub name: String,
    /// Complete file contents.
    pub src: String,
    /// Byte offset of the start of each line.
    line_starts: Vec<usize>,
}

impl SourceFile {
    fn new(name: String, src: String) -> Self {
        let mut line_starts = vec![0];
        for (i, b) in src.bytes().enumerate() {
            if b == b'\n' {
                line_starts.push(i + 1);
            }
        }
        Self {
            name,
            src,
            line_starts,
        }
    }

    /// Returns the 1-based line number containing `offset`.
    pub fn line_of(&self, offset: usize) -> u32 {
        match self.line_starts.binary_search(&offset) {
            Ok(idx) => idx as u32 + 1,
            Err(idx) => idx as u32,
        }
    }

    /// Returns the text of the given 1-based line, without its newline.
    pub fn line_text(&self, line: u32) -> SourceMapResult<&str> {
        let idx = line.checked_sub(1).ok_or(SourceMapError::InvalidLineNumber {
            line: line as usize,
            max_lines: self.line_starts.len(),
        })? as usize;
        let start = *self
            .line_starts
            .get(idx)
            .ok_or(SourceMapError::InvalidLineNumber {
                line: line as usize,
                max_lines: self.line_starts.len(),
            })?;
        let end = self
            .line_starts
            .get(idx + 1)
            .map_or(self.src.len(), |&next| next);
        Ok(self.src[start..end].trim_end_matches(['\n', '\r']))
    }
}

/// Registry of all source files known to a compilation session.
#[derive(Debug, Default)]
pub struct SourceMap {
    files: Vec<SourceFile>,
}

impl SourceMap {
    /// Creates an empty source map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a file and returns its id.
    pub fn add_file(&mut self, name: impl Into<String>, src: impl Into<String>) -> FileId {
        let id = FileId(self.files.len());
        self.files.push(SourceFile::new(name.into(), src.into()));
        id
    }

    /// Looks up a registered file.
    pub fn file(&self, id: FileId) -> SourceMapResult<&SourceFile> {
        self.files
            .get(id.index())
            .ok_or_else(|| SourceMapError::FileNotFound(format!("file id {}", id.index())))
    }

    /// Extracts the source text covered by `span`.
    pub fn snippet(&self, span: Span) -> SourceMapResult<&str> {
        let file = self.file(span.file_id)?;
        if span.start > span.end {
            return Err(SourceMapError::InvalidSpan {
                start: span.start,
                end: span.end,
            });
        }
        if span.end > file.src.len() {
            return Err(SourceMapError::SpanOutOfBounds {
                file_len: file.src.len(),
                span_start: span.start,
                span_end: span.end,
            });
        }
        Ok(&file.src[span.start..span.end])
    }
}
