//! Operator and punctuation lexing.
//!
//! Multi-character operators are recognized with one byte of lookahead via
//! `Cursor::match_char`.

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes `+` or `+=`.
    pub(crate) fn lex_plus(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            self.make_token(TokenKind::AddAssign)
        } else {
            self.make_token(TokenKind::Add)
        }
    }

    /// Lexes `-` or `-=`.
    pub(crate) fn lex_minus(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            self.make_token(TokenKind::SubAssign)
        } else {
            self.make_token(TokenKind::Sub)
        }
    }

    /// Lexes `*` or `*=`.
    pub(crate) fn lex_star(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            self.make_token(TokenKind::MulAssign)
        } else {
            self.make_token(TokenKind::Mul)
        }
    }

    /// Lexes `/`, `/=`, or a `//` comment.
    pub(crate) fn lex_slash(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('/') {
            self.lex_line_comment()
        } else if self.cursor.match_char('=') {
            self.make_token(TokenKind::DivAssign)
        } else {
            self.make_token(TokenKind::Div)
        }
    }

    /// Lexes `=` or `==`.
    pub(crate) fn lex_equals(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            self.make_token(TokenKind::EqEq)
        } else {
            self.make_token(TokenKind::Assign)
        }
    }

    /// Lexes `!` or `!=`.
    pub(crate) fn lex_bang(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            self.make_token(TokenKind::NotEq)
        } else {
            self.make_token(TokenKind::LogicNot)
        }
    }

    /// Lexes `<` or `<=`.
    pub(crate) fn lex_less(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            self.make_token(TokenKind::LtEq)
        } else {
            self.make_token(TokenKind::Lt)
        }
    }

    /// Lexes `>` or `>=`.
    pub(crate) fn lex_greater(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            self.make_token(TokenKind::GtEq)
        } else {
            self.make_token(TokenKind::Gt)
        }
    }

    /// Lexes `&`, `&&`, or `&=`.
    pub(crate) fn lex_ampersand(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('&') {
            self.make_token(TokenKind::LogicAnd)
        } else if self.cursor.match_char('=') {
            self.make_token(TokenKind::AndAssign)
        } else {
            self.make_token(TokenKind::BitAnd)
        }
    }

    /// Lexes `|`, `||`, or `|=`.
    pub(crate) fn lex_pipe(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('|') {
            self.make_token(TokenKind::LogicOr)
        } else if self.cursor.match_char('=') {
            self.make_token(TokenKind::OrAssign)
        } else {
            self.make_token(TokenKind::BitOr)
        }
    }

    /// Lexes `^` or `^=`.
    pub(crate) fn lex_caret(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            self.make_token(TokenKind::XorAssign)
        } else {
            self.make_token(TokenKind::BitXor)
        }
    }

    /// Lexes `:=`. A bare `:` has no meaning in the language and is a
    /// lexical error.
    pub(crate) fn lex_colon(&mut self) -> Option<Token> {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            Some(self.make_token(TokenKind::ShortAssign))
        } else {
            self.report_error("unexpected character ':'".to_string());
            None
        }
    }
}
