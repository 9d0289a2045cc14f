//! Type expression parsing.
//!
//! Type forms:
//! - `ident` - a type name
//! - `*T` - pointer
//! - `[]T` - array
//! - `fn (params) results` - function type
//!
//! Types are ordinary expressions in this grammar; the semantic analyzer
//! decides what actually denotes a type.

use lilc_lex::TokenKind;
use lilc_util::{Span, Symbol};

use crate::ast::*;
use crate::Parser;

impl<'a> Parser<'a> {
    /// Parses a type, emitting "type expected" on failure. Unlike
    /// expression recovery this consumes nothing; the caller's follow
    /// token is usually right here.
    pub(crate) fn parse_type(&mut self) -> Expr {
        match self.try_parse_type() {
            Some(ty) => ty,
            None => {
                let span = self.current_span();
                self.expect_error("type");
                Expr::Bad(BadExpr {
                    id: self.fresh_id(),
                    span,
                })
            }
        }
    }

    /// Parses a type if the current token can start one.
    pub(crate) fn try_parse_type(&mut self) -> Option<Expr> {
        match self.kind() {
            TokenKind::Mul => Some(self.parse_pointer_type()),
            TokenKind::LBracket => Some(self.parse_array_type()),
            TokenKind::Ident => Some(self.parse_ident_expr()),
            TokenKind::Fn => Some(self.parse_func_type_expr()),
            _ => None,
        }
    }

    /// `*T` (and `**T`, and so on).
    fn parse_pointer_type(&mut self) -> Expr {
        let start = self.expect(TokenKind::Mul);
        let base = self.parse_type();
        let span = self.span_from(start);
        Expr::Star(StarExpr {
            id: self.fresh_id(),
            operand: Box::new(base),
            span,
        })
    }

    /// `[]T`
    fn parse_array_type(&mut self) -> Expr {
        let start = self.expect(TokenKind::LBracket);
        self.expect(TokenKind::RBracket);
        let elem = self.parse_type();
        let span = self.span_from(start);
        Expr::Array(ArrayTypeExpr {
            id: self.fresh_id(),
            elem: Box::new(elem),
            span,
        })
    }

    /// `fn (params) results` in type position.
    fn parse_func_type_expr(&mut self) -> Expr {
        let start = self.expect(TokenKind::Fn);
        Expr::FuncType(self.parse_signature(start))
    }

    /// Parameter list and result list of a function signature; `fn_span`
    /// is the span of the already-consumed `fn` keyword (or of the
    /// declaration name for `fn name(...)` declarations).
    pub(crate) fn parse_signature(&mut self, fn_span: Span) -> FuncTypeExpr {
        let params = self.parse_params();
        let results = self.parse_results();
        FuncTypeExpr {
            id: self.fresh_id(),
            params,
            results,
            span: self.span_from(fn_span),
        }
    }

    /// `( field {, field} )` - possibly empty.
    fn parse_params(&mut self) -> Vec<Field> {
        let mut params = Vec::new();
        self.expect(TokenKind::LParen);
        if self.kind() != TokenKind::RParen {
            loop {
                params.push(self.parse_field());
                if !self.match_token(TokenKind::Comma) {
                    break;
                }
            }
        }
        self.expect(TokenKind::RParen);
        params
    }

    /// `type identifier` or bare `type`; anonymous parameters get the
    /// name `_`.
    fn parse_field(&mut self) -> Field {
        let start = self.current_span();
        let ty = self.parse_type();
        let name = if self.kind() == TokenKind::Ident {
            let name = self.current().lexeme;
            self.advance();
            name
        } else {
            Symbol::intern("_")
        };
        Field {
            name,
            ty,
            span: self.span_from(start),
        }
    }

    /// Result list: a single bare type, a parenthesized list, or nothing.
    fn parse_results(&mut self) -> Vec<Expr> {
        let mut results = Vec::new();
        if self.kind() == TokenKind::LParen {
            self.advance();
            if self.kind() != TokenKind::RParen {
                loop {
                    results.push(self.parse_type());
                    if !self.match_token(TokenKind::Comma) {
                        break;
                    }
                }
            }
            self.expect(TokenKind::RParen);
        } else if let Some(ty) = self.try_parse_type() {
            results.push(ty);
        }
        results
    }
}
