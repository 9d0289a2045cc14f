//! lilc-par - Recursive-descent parser for lilang.
//!
//! The parser consumes the token stream strictly left to right with one
//! token of lookahead, skipping comment tokens transparently, and builds
//! the AST defined in [`ast`]. Expressions use precedence climbing (see
//! [`expr`] for the table); statements and declarations are plain
//! recursive descent.
//!
//! # Error recovery
//!
//! Parsing never aborts. On an unexpected token the parser emits a
//! diagnostic and resynchronizes in panic mode against one of two
//! follow-sets:
//!
//! - expression-follow: `)` `,` `;` `]`
//! - statement-follow: `}` `;`
//!
//! [`Parser::expect`] records a mismatch but always advances one token, so
//! the parser provably terminates and the AST is complete (with `Bad`
//! placeholder nodes where recovery discarded input).
//!
//! # Example
//!
//! ```
//! use lilc_lex::tokenize;
//! use lilc_par::parse;
//! use lilc_util::Handler;
//!
//! let handler = Handler::new();
//! let tokens = tokenize("let x = 1 + 2 * 3;", &handler);
//! let file = parse(tokens, &handler);
//!
//! assert!(!handler.has_errors());
//! assert_eq!(file.decls.len(), 1);
//! ```

pub mod ast;
mod decl;
mod expr;
mod stmt;
mod types;

use lilc_lex::{Token, TokenKind};
use lilc_util::{DiagnosticBuilder, Handler, Span, Symbol};

use ast::{Decl, ExprId, File};

/// Safe resynchronization points after a failed expression.
const EXPRESSION_FOLLOW: &[TokenKind] = &[
    TokenKind::RParen,
    TokenKind::Comma,
    TokenKind::Semi,
    TokenKind::RBracket,
];

/// Safe resynchronization points after a failed statement.
const STATEMENT_FOLLOW: &[TokenKind] = &[TokenKind::RBrace, TokenKind::Semi];

/// Parses a token stream into a [`File`], reporting syntax errors on
/// `handler`.
pub fn parse(tokens: Vec<Token>, handler: &Handler) -> File {
    Parser::new(tokens, handler).parse_file()
}

/// Recursive descent parser.
pub struct Parser<'a> {
    /// Token stream from the lexer, ending with the Eof sentinel.
    tokens: Vec<Token>,

    /// Current position in the token stream.
    position: usize,

    /// Span of the most recently consumed token, for node span endpoints.
    prev_span: Span,

    /// Diagnostic sink for syntax errors.
    handler: &'a Handler,

    /// Next expression id to hand out.
    next_expr_id: u32,
}

impl<'a> Parser<'a> {
    /// Creates a parser over `tokens`.
    ///
    /// The stream is expected to end with the Eof sentinel; one is
    /// synthesized if missing so lookahead never runs off the end.
    pub fn new(tokens: Vec<Token>, handler: &'a Handler) -> Self {
        let mut tokens = tokens;
        if tokens.last().map_or(true, |t| t.kind != TokenKind::Eof) {
            let span = tokens.last().map_or(Span::DUMMY, |t| t.span);
            tokens.push(Token::new(TokenKind::Eof, Symbol::intern(""), span));
        }
        let mut parser = Self {
            tokens,
            position: 0,
            prev_span: Span::DUMMY,
            handler,
            next_expr_id: 0,
        };
        parser.skip_comments();
        parser
    }

    /// Parses a whole file: a sequence of `let` and `fn` declarations.
    pub fn parse_file(&mut self) -> File {
        let mut decls = Vec::new();
        while self.kind() != TokenKind::Eof {
            match self.kind() {
                TokenKind::Let => decls.push(Decl::Var(self.parse_var_decl())),
                TokenKind::Fn => decls.push(Decl::Func(self.parse_func_decl())),
                _ => {
                    self.expect_error("declaration");
                    self.exhaust(STATEMENT_FOLLOW);
                    // consume the follow token itself so the loop advances
                    if self.kind() != TokenKind::Eof {
                        self.advance();
                    }
                }
            }
        }
        File { decls }
    }

    // ========================================================================
    // Token cursor helpers
    // ========================================================================

    pub(crate) fn current(&self) -> &Token {
        &self.tokens[self.position]
    }

    pub(crate) fn kind(&self) -> TokenKind {
        self.current().kind
    }

    pub(crate) fn current_span(&self) -> Span {
        self.current().span
    }

    /// Advances past the current token (and any comments). No-op at Eof.
    pub(crate) fn advance(&mut self) {
        if self.kind() != TokenKind::Eof {
            self.prev_span = self.current_span();
            self.position += 1;
            self.skip_comments();
        }
    }

    fn skip_comments(&mut self) {
        while self.kind() == TokenKind::Comment {
            self.position += 1;
        }
    }

    /// Consumes the current token if it has the given kind.
    pub(crate) fn match_token(&mut self, kind: TokenKind) -> bool {
        if self.kind() == kind {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Checks the current token against `kind`, recording an error on
    /// mismatch, and advances one token either way. Returns the span of
    /// the token that was inspected.
    ///
    /// Unconditional advance is what guarantees termination.
    pub(crate) fn expect(&mut self, kind: TokenKind) -> Span {
        let span = self.current_span();
        if self.kind() != kind {
            self.error(format!(
                "{} expected, found {}",
                kind.describe(),
                self.current().describe_found()
            ));
        }
        self.advance();
        span
    }

    // ========================================================================
    // Error reporting and recovery
    // ========================================================================

    pub(crate) fn error(&self, message: String) {
        DiagnosticBuilder::error(message)
            .span(self.current_span())
            .emit(self.handler);
    }

    /// Emits "`what` expected, found ..." at the current token.
    pub(crate) fn expect_error(&self, what: &str) {
        self.error(format!(
            "{} expected, found {}",
            what,
            self.current().describe_found()
        ));
    }

    /// Panic-mode recovery: consumes tokens until the next member of
    /// `follow` or end of file.
    pub(crate) fn exhaust(&mut self, follow: &[TokenKind]) {
        while self.kind() != TokenKind::Eof && !follow.contains(&self.kind()) {
            self.advance();
        }
    }

    // ========================================================================
    // Node construction helpers
    // ========================================================================

    pub(crate) fn fresh_id(&mut self) -> ExprId {
        let id = ExprId(self.next_expr_id);
        self.next_expr_id += 1;
        id
    }

    /// Span from `start` through the last consumed token.
    pub(crate) fn span_from(&self, start: Span) -> Span {
        Span::new(
            start.start,
            self.prev_span.end.max(start.end),
            start.line,
            start.column,
        )
    }
}
