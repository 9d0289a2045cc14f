//! String literal lexing.
//!
//! Strings open and close on `"`. Escapes are limited to `\n`, `\t`, `\\`,
//! `\"`, and backslash-newline (line continuation). The lexeme keeps the
//! surrounding quotes and the raw escape text; expansion is deferred to
//! [`crate::token::unescape_string`].

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a string literal starting at the opening quote.
    ///
    /// Returns `None` after reporting an unterminated string, a bare
    /// newline, or an unsupported escape; scanning resumes past the
    /// offending byte.
    pub(crate) fn lex_string(&mut self) -> Option<Token> {
        self.cursor.advance(); // opening quote

        loop {
            if self.cursor.is_at_end() {
                self.report_error("unterminated string literal".to_string());
                return None;
            }

            match self.cursor.current_char() {
                '"' => {
                    self.cursor.advance();
                    return Some(self.make_token(TokenKind::Str));
                }
                '\n' => {
                    self.report_error(
                        "string literal must not contain a bare newline".to_string(),
                    );
                    self.cursor.advance();
                    return None;
                }
                '\\' => {
                    self.cursor.advance();
                    if self.cursor.is_at_end() {
                        self.report_error("unterminated string literal".to_string());
                        return None;
                    }
                    match self.cursor.current_char() {
                        'n' | 't' | '\\' | '"' | '\n' => self.cursor.advance(),
                        c => {
                            self.report_error(format!(
                                "unsupported escape character '{}' in string literal",
                                c
                            ));
                            self.cursor.advance();
                            return None;
                        }
                    }
                }
                _ => self.cursor.advance(),
            }
        }
    }
}
