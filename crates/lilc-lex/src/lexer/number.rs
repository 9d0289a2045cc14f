//! Number literal lexing.
//!
//! Handles decimal, hexadecimal (`0x`), octal (`0o`), binary (`0b`), and
//! floating-point forms. No numeric value is computed here; the lexeme
//! carries the literal text and later phases only care about the kind.

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a number literal starting at an ASCII digit.
    ///
    /// # Number Formats
    ///
    /// - Decimal: `42`, `123`, `0`
    /// - Hexadecimal: `0xFF` (at least one digit after the marker)
    /// - Octal: `0o777`
    /// - Binary: `0b1010`
    /// - Float: `3.14`, `0.5`, and the trailing-dot form `1.`
    ///
    /// Returns `None` after reporting a malformed literal; the offending
    /// byte has been consumed and the caller resumes scanning.
    pub(crate) fn lex_number(&mut self) -> Option<Token> {
        if self.cursor.current_char() == '0' {
            self.cursor.advance();
            match self.cursor.current_char() {
                'x' | 'X' => {
                    self.cursor.advance();
                    return self.lex_radix_digits(16, "invalid hex number");
                }
                'o' | 'O' => {
                    self.cursor.advance();
                    return self.lex_radix_digits(8, "invalid octal number");
                }
                'b' | 'B' => {
                    self.cursor.advance();
                    return self.lex_radix_digits(2, "invalid binary number");
                }
                '.' => {
                    self.cursor.advance();
                    return Some(self.lex_fraction());
                }
                c if c.is_ascii_digit() => {
                    // fall through to the decimal scan below
                }
                _ => return Some(self.make_token(TokenKind::Number)),
            }
        }

        while self.cursor.current_char().is_ascii_digit() {
            self.cursor.advance();
        }

        if self.cursor.current_char() == '.' {
            self.cursor.advance();
            return Some(self.lex_fraction());
        }

        Some(self.make_token(TokenKind::Number))
    }

    /// Scans the fractional digits after the dot. An empty fractional part
    /// is permitted, so `1.` is a valid float.
    fn lex_fraction(&mut self) -> Token {
        while self.cursor.current_char().is_ascii_digit() {
            self.cursor.advance();
        }
        self.make_token(TokenKind::Float)
    }

    /// Scans the digits of a based literal; the cursor sits past the base
    /// marker. At least one digit is required.
    fn lex_radix_digits(&mut self, base: u32, error: &str) -> Option<Token> {
        if self.cursor.is_at_end() || !self.cursor.current_char().is_digit(base) {
            self.report_error(error.to_string());
            if !self.cursor.is_at_end() {
                self.cursor.advance();
            }
            return None;
        }

        while self.cursor.current_char().is_digit(base) {
            self.cursor.advance();
        }

        Some(self.make_token(TokenKind::Number))
    }
}
