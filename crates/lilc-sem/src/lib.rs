//! lilc-sem - Semantic analyzer and type checker for lilang.
//!
//! The analyzer walks the AST once, maintaining lexically nested scopes
//! (see [`scope`]) and computing an [`Obj`] - value category plus type -
//! for every expression node. It enforces:
//!
//! - name resolution (undeclared identifiers, redeclaration, duplicate
//!   parameters),
//! - type matching and implicit int/float conversion under assignment,
//! - addressability of `&` operands and assignability of assignment
//!   targets,
//! - call classification (cast vs. function call) and tuple-return arity
//!   rules, including unpacking a multi-return call into declarations,
//!   assignments, arguments, and returns,
//! - bool conditions on `if`/`while`/`for` and loop nesting for
//!   `break`/`continue`.
//!
//! Analysis never aborts: failed expressions carry the invalid sentinel,
//! and every check short-circuits on it so a single mistake is reported
//! once.
//!
//! # Example
//!
//! ```
//! use lilc_lex::tokenize;
//! use lilc_par::parse;
//! use lilc_sem::analyze;
//! use lilc_util::Handler;
//!
//! let handler = Handler::new();
//! let tokens = tokenize("fn add(int x, int y)(int) { return x + y; }", &handler);
//! let file = parse(tokens, &handler);
//! let analysis = analyze(&file, &handler);
//!
//! assert!(!handler.has_errors());
//! assert!(!analysis.objs.is_empty());
//! ```

mod analysis;
pub mod obj;
pub mod scope;
pub mod types;

pub use analysis::{analyze, Analysis, Analyzer};
pub use obj::{Obj, ObjKind, ObjRef};
pub use scope::{Rib, RibId, RibKind, ScopeTree};
pub use types::{Type, TypeRef};

#[cfg(test)]
mod edge_cases;
