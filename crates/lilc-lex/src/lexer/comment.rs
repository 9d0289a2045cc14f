//! Line comment lexing and whitespace skipping.
//!
//! Unlike most lexers, comments are not discarded here: each `//` comment
//! becomes a [`TokenKind::Comment`] token and the parser skips them. That
//! keeps the token stream a faithful cover of the source text.

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Skips whitespace characters (space, tab, carriage return, newline).
    pub(crate) fn skip_whitespace(&mut self) {
        while matches!(self.cursor.current_char(), ' ' | '\t' | '\r' | '\n') {
            self.cursor.advance();
        }
    }

    /// Lexes a line comment.
    ///
    /// The cursor sits past the leading `//`; the comment runs to the next
    /// newline (exclusive) or end of input. The newline itself is left for
    /// the whitespace skipper so line accounting stays in one place.
    pub(crate) fn lex_line_comment(&mut self) -> Token {
        while !self.cursor.is_at_end() && self.cursor.current_char() != '\n' {
            self.cursor.advance();
        }
        self.make_token(TokenKind::Comment)
    }
}
