//! Core lexer implementation.
//!
//! This module contains the main Lexer struct and its dispatch loop, the
//! start state of the scanning state machine. The other states live as
//! direct-coded control flow in the helper that owns each token family.

use lilc_util::{DiagnosticBuilder, Handler, Span, Symbol};

use crate::cursor::Cursor;
use crate::token::{Token, TokenKind};

/// Lexer for lilang source text.
///
/// The lexer transforms source code into a stream of tokens, tracking
/// line/column positions and reporting lexical errors on its handler.
/// It never aborts: on an error it consumes the offending byte and resumes
/// scanning in the start state.
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Diagnostic sink for lexical errors.
    handler: &'a Handler,

    /// Starting byte offset of the current token.
    pub(crate) token_start: usize,

    /// Line where the current token starts (1-based).
    token_start_line: u32,

    /// Column where the current token starts (1-based).
    token_start_column: u32,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer over `source`.
    pub fn new(source: &'a str, handler: &'a Handler) -> Self {
        Self {
            cursor: Cursor::new(source),
            handler,
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
        }
    }

    /// Returns the next token, or the Eof sentinel at end of input.
    ///
    /// Errors are reported on the handler; after an error the offending
    /// byte has been consumed and scanning continues, so this function
    /// always terminates with a token.
    pub fn next_token(&mut self) -> Token {
        loop {
            self.skip_whitespace();
            self.begin_token();

            if self.cursor.is_at_end() {
                return self.make_token(TokenKind::Eof);
            }

            let token = match self.cursor.current_char() {
                '{' => Some(self.single_char(TokenKind::LBrace)),
                '}' => Some(self.single_char(TokenKind::RBrace)),
                '[' => Some(self.single_char(TokenKind::LBracket)),
                ']' => Some(self.single_char(TokenKind::RBracket)),
                '(' => Some(self.single_char(TokenKind::LParen)),
                ')' => Some(self.single_char(TokenKind::RParen)),
                ',' => Some(self.single_char(TokenKind::Comma)),
                ';' => Some(self.single_char(TokenKind::Semi)),
                '+' => Some(self.lex_plus()),
                '-' => Some(self.lex_minus()),
                '*' => Some(self.lex_star()),
                '/' => Some(self.lex_slash()),
                '%' => Some(self.single_char(TokenKind::Rem)),
                '=' => Some(self.lex_equals()),
                '!' => Some(self.lex_bang()),
                '<' => Some(self.lex_less()),
                '>' => Some(self.lex_greater()),
                '&' => Some(self.lex_ampersand()),
                '|' => Some(self.lex_pipe()),
                '^' => Some(self.lex_caret()),
                ':' => self.lex_colon(),
                '"' => self.lex_string(),
                c if c.is_ascii_alphabetic() => Some(self.lex_identifier()),
                c if c.is_ascii_digit() => self.lex_number(),
                c => {
                    self.report_error(format!("unexpected character '{}'", c));
                    self.cursor.advance();
                    None
                }
            };

            if let Some(token) = token {
                return token;
            }
        }
    }

    /// Records the start position of the token about to be scanned.
    fn begin_token(&mut self) {
        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();
    }

    /// Builds a token whose lexeme runs from the recorded start to the
    /// current cursor position.
    pub(crate) fn make_token(&self, kind: TokenKind) -> Token {
        let text = self.cursor.slice_from(self.token_start);
        let span = Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
            self.token_start_column,
        );
        Token::new(kind, Symbol::intern(text), span)
    }

    /// Consumes one character and builds the corresponding token.
    pub(crate) fn single_char(&mut self, kind: TokenKind) -> Token {
        self.cursor.advance();
        self.make_token(kind)
    }

    /// Reports a lexical error spanning the current token so far.
    pub(crate) fn report_error(&mut self, message: String) {
        let span = Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
            self.token_start_column,
        );
        DiagnosticBuilder::error(message).span(span).emit(self.handler);
    }
}

/// Iterates tokens up to (and excluding) the Eof sentinel.
impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.kind == TokenKind::Eof {
            None
        } else {
            Some(token)
        }
    }
}
