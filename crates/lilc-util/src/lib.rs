//! lilc-util - Shared infrastructure for the lilang compiler front-end.
//!
//! This crate carries the concerns every phase needs but no phase owns:
//!
//! - [`span`]: source positions ([`Span`], [`FileId`]) and the
//!   [`SourceMap`] used to render diagnostics against file contents.
//! - [`symbol`]: the global string interner behind [`Symbol`] handles.
//! - [`diagnostic`]: the accumulating [`Handler`] and the fluent
//!   [`DiagnosticBuilder`]. Phases report user errors exclusively through
//!   this module; they never return `Err` or panic for bad input.
//! - [`index_vec`]: typed indices ([`Idx`], [`IndexVec`],
//!   [`define_idx!`](crate::define_idx)) for id-keyed tables.

pub mod diagnostic;
pub mod error;
pub mod index_vec;
pub mod span;
pub mod symbol;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, Handler, Level};
pub use error::{SourceMapError, SourceMapResult};
pub use index_vec::{Idx, IndexVec};
pub use span::{FileId, SourceFile, SourceMap, Span};
pub use symbol::Symbol;

// Re-export commonly used hashers
pub use rustc_hash::FxHashMap;
pub use rustc_hash::FxHashSet;
