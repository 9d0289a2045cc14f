//! Identifier and keyword lexing.

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an identifier or keyword.
    ///
    /// Identifiers start with an ASCII letter, followed by letters, digits,
    /// or underscores. The finished lexeme is checked against the keyword
    /// table.
    pub(crate) fn lex_identifier(&mut self) -> Token {
        while is_ident_continue(self.cursor.current_char()) {
            self.cursor.advance();
        }

        let text = self.cursor.slice_from(self.token_start);
        let kind = TokenKind::keyword_from_str(text).unwrap_or(TokenKind::Ident);
        self.make_token(kind)
    }
}

/// Characters allowed after the first character of an identifier.
fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
