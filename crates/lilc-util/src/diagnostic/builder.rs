//! Fluent builder for diagnostics.
//!
//! The builder is the recommended construction path for diagnostics:
//!
//! ```
//! use lilc_util::diagnostic::{DiagnosticBuilder, Handler};
//! use lilc_util::span::Span;
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("type mismatch")
//!     .span(Span::DUMMY)
//!     .note("expected `int`")
//!     .help("insert a cast")
//!     .emit(&handler);
//! ```

use crate::span::Span;

use super::{Diagnostic, Handler, Level};

/// Builder for [`Diagnostic`] values.
#[derive(Debug)]
pub struct DiagnosticBuilder {
    level: Level,
    message: String,
    span: Span,
    notes: Vec<String>,
    helps: Vec<String>,
}

impl DiagnosticBuilder {
    /// Creates a builder with the given level and message.
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            span: Span::DUMMY,
            notes: Vec::new(),
            helps: Vec::new(),
        }
    }

    /// Creates an error builder.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    /// Creates a warning builder.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Level::Warning, message)
    }

    /// Sets the primary span.
    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Attaches a note.
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Attaches a help suggestion.
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    /// Finalizes into a [`Diagnostic`].
    pub fn build(self) -> Diagnostic {
        Diagnostic {
            level: self.level,
            message: self.message,
            span: self.span,
            notes: self.notes,
            helps: self.helps,
        }
    }

    /// Builds and emits on the handler.
    pub fn emit(self, handler: &Handler) {
        handler.emit(self.build());
    }
}
