//! lilc-lex - Lexical analyzer for lilang.
//!
//! The lexer is a deterministic state machine run in a single pass over
//! the source bytes. The machine is direct-coded rather than table-driven:
//! each lexing helper owns the states of one token family (numbers of all
//! bases, floats, strings and their escapes, identifiers, comments), and
//! the dispatch loop in [`Lexer::next_token`] is the start state.
//!
//! # Contract
//!
//! [`tokenize`] turns source text into a token vector that always ends with
//! the [`TokenKind::Eof`] sentinel carrying the final position. Lexical
//! errors go to the [`Handler`]; tokenization never aborts - on an error
//! the machine consumes the offending byte and resumes in the start state.
//!
//! Token lexemes are literal slices of the source (string literals keep
//! their quotes, comments keep the `//`), so concatenating lexemes and the
//! skipped whitespace reproduces the input exactly.
//!
//! # Example
//!
//! ```
//! use lilc_lex::{tokenize, TokenKind};
//! use lilc_util::Handler;
//!
//! let handler = Handler::new();
//! let tokens = tokenize("let x = 42;", &handler);
//!
//! assert!(!handler.has_errors());
//! assert_eq!(tokens.first().unwrap().kind, TokenKind::Let);
//! assert_eq!(tokens.last().unwrap().kind, TokenKind::Eof);
//! ```

pub mod cursor;
mod lexer;
pub mod token;

pub use lexer::Lexer;
pub use token::{escape_string, unescape_string, Token, TokenKind, LOWEST_PRECEDENCE};

use lilc_util::Handler;

/// Tokenizes `source`, reporting lexical errors on `handler`.
///
/// The returned vector is never empty: its last element is always the
/// end-of-file sentinel.
pub fn tokenize(source: &str, handler: &Handler) -> Vec<Token> {
    let mut lexer = Lexer::new(source, handler);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token();
        let at_end = token.kind == TokenKind::Eof;
        tokens.push(token);
        if at_end {
            return tokens;
        }
    }
}

#[cfg(test)]
mod edge_cases;
