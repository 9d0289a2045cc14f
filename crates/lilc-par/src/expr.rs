//! Expression parsing via precedence climbing.
//!
//! # Operator precedence (lowest to highest)
//!
//! | Level | Operators |
//! |-------|-----------|
//! | 1 | `\|\|` |
//! | 2 | `&&` |
//! | 3 | `==`, `!=`, `<`, `>`, `<=`, `>=` |
//! | 4 | `+`, `-`, `\|`, `^` |
//! | 5 | `&`, `*`, `/`, `%` |
//!
//! All binary operators are left-associative: `parse_binary` recurses with
//! `cur_prec + 1`, so an operator of equal precedence on the right cannot
//! join the right-hand subtree. Unary `+ - & * ^ ! |` bind tighter than
//! any binary operator.

use lilc_lex::{TokenKind, LOWEST_PRECEDENCE};

use crate::ast::*;
use crate::{Parser, EXPRESSION_FOLLOW};

impl<'a> Parser<'a> {
    /// Main expression entry point.
    pub(crate) fn parse_expr(&mut self) -> Expr {
        self.parse_binary(LOWEST_PRECEDENCE)
    }

    /// `expression {, expression}`
    pub(crate) fn parse_expr_list(&mut self) -> Vec<Expr> {
        let mut list = vec![self.parse_expr()];
        while self.match_token(TokenKind::Comma) {
            list.push(self.parse_expr());
        }
        list
    }

    /// Precedence climbing: collects a left operand, then folds in binary
    /// operators whose precedence is at least `min_prec`, recursing with
    /// `cur_prec + 1` to keep the tree left-associative.
    fn parse_binary(&mut self, min_prec: u8) -> Expr {
        let mut left = self.parse_unary();
        loop {
            let prec = self.kind().precedence();
            if prec < min_prec {
                return left;
            }
            let op = self.kind();
            self.expect(op);
            let right = self.parse_binary(prec + 1);
            let span = left.span().to(right.span());
            left = Expr::Binary(BinaryExpr {
                id: self.fresh_id(),
                op,
                left: Box::new(left),
                right: Box::new(right),
                span,
            });
        }
    }

    /// Unary prefix operators. Prefix `*` always becomes a [`StarExpr`];
    /// whether it is a pointer-type constructor or a dereference is decided
    /// during semantic analysis.
    fn parse_unary(&mut self) -> Expr {
        match self.kind() {
            TokenKind::Add
            | TokenKind::Sub
            | TokenKind::BitAnd
            | TokenKind::BitOr
            | TokenKind::BitXor
            | TokenKind::LogicNot => {
                let start = self.current_span();
                let op = self.kind();
                self.advance();
                let operand = self.parse_unary();
                let span = self.span_from(start);
                Expr::Unary(UnaryExpr {
                    id: self.fresh_id(),
                    op,
                    operand: Box::new(operand),
                    span,
                })
            }
            TokenKind::Mul => {
                let start = self.current_span();
                self.advance();
                let operand = self.parse_unary();
                let span = self.span_from(start);
                Expr::Star(StarExpr {
                    id: self.fresh_id(),
                    operand: Box::new(operand),
                    span,
                })
            }
            _ => self.parse_primary(),
        }
    }

    /// `Operand (Call | Index)*`
    fn parse_primary(&mut self) -> Expr {
        let mut expr = self.parse_operand();
        loop {
            match self.kind() {
                TokenKind::LParen => expr = self.parse_call(expr),
                TokenKind::LBracket => expr = self.parse_index(expr),
                _ => return expr,
            }
        }
    }

    /// `callee(arg, ...)` - call, cast, or conversion.
    fn parse_call(&mut self, callee: Expr) -> Expr {
        let start = callee.span();
        self.expect(TokenKind::LParen);
        let mut args = Vec::new();
        if self.kind() != TokenKind::RParen {
            args.push(self.parse_expr());
            while self.match_token(TokenKind::Comma) {
                args.push(self.parse_expr());
            }
        }
        self.expect(TokenKind::RParen);
        Expr::Call(CallExpr {
            id: self.fresh_id(),
            callee: Box::new(callee),
            args,
            span: self.span_from(start),
        })
    }

    /// `operand[index]`
    fn parse_index(&mut self, operand: Expr) -> Expr {
        let start = operand.span();
        self.expect(TokenKind::LBracket);
        let index = self.parse_expr();
        self.expect(TokenKind::RBracket);
        Expr::Index(IndexExpr {
            id: self.fresh_id(),
            operand: Box::new(operand),
            index: Box::new(index),
            span: self.span_from(start),
        })
    }

    /// Operand: identifier, parenthesized expression, literal, function
    /// literal/type, or a type expression (for cast-style calls like
    /// `*int(p)` or `[]int(x)`).
    fn parse_operand(&mut self) -> Expr {
        match self.kind() {
            TokenKind::Ident => self.parse_ident_expr(),
            TokenKind::LParen => {
                let start = self.current_span();
                self.advance();
                let inner = self.parse_expr();
                self.expect(TokenKind::RParen);
                Expr::Paren(ParenExpr {
                    id: self.fresh_id(),
                    inner: Box::new(inner),
                    span: self.span_from(start),
                })
            }
            TokenKind::Number | TokenKind::Float | TokenKind::Str => self.parse_basic_lit(),
            TokenKind::Fn => self.parse_func_lit_or_type(),
            _ => {
                if let Some(ty) = self.try_parse_type() {
                    return ty;
                }
                let start = self.current_span();
                self.expect_error("operand");
                self.exhaust(EXPRESSION_FOLLOW);
                Expr::Bad(BadExpr {
                    id: self.fresh_id(),
                    span: self.span_from(start),
                })
            }
        }
    }

    /// Identifier in expression position. Callers guarantee the current
    /// token is an identifier.
    pub(crate) fn parse_ident_expr(&mut self) -> Expr {
        let name = self.parse_name();
        Expr::Ident(name)
    }

    /// Identifier as a name (declaration left-hand sides, function names).
    ///
    /// On a mismatch this reports, consumes one token, and yields the
    /// placeholder name `_`, which no scope will bind.
    pub(crate) fn parse_name(&mut self) -> Ident {
        if self.kind() != TokenKind::Ident {
            let span = self.current_span();
            self.expect_error("identifier");
            self.advance();
            return Ident {
                id: self.fresh_id(),
                name: lilc_util::Symbol::intern("_"),
                span,
            };
        }
        let token = *self.current();
        self.advance();
        Ident {
            id: self.fresh_id(),
            name: token.lexeme,
            span: token.span,
        }
    }

    /// `identifier {, identifier}`
    pub(crate) fn parse_name_list(&mut self) -> Vec<Ident> {
        let mut list = vec![self.parse_name()];
        while self.match_token(TokenKind::Comma) {
            list.push(self.parse_name());
        }
        list
    }

    /// Number, float, or string literal.
    fn parse_basic_lit(&mut self) -> Expr {
        let token = *self.current();
        self.advance();
        Expr::Basic(BasicLit {
            id: self.fresh_id(),
            kind: token.kind,
            value: token.lexeme,
            span: token.span,
        })
    }

    /// `fn` signature, then a function literal if `{` follows, otherwise a
    /// function type expression (which permits the cast-style call
    /// `fn(...)(...)(x)`).
    pub(crate) fn parse_func_lit_or_type(&mut self) -> Expr {
        let start = self.expect(TokenKind::Fn);
        let ty = self.parse_signature(start);
        if self.kind() == TokenKind::LBrace {
            let body = self.parse_block();
            let span = self.span_from(start);
            Expr::FuncLit(FuncLit {
                id: self.fresh_id(),
                name: None,
                ty,
                body,
                span,
            })
        } else {
            Expr::FuncType(ty)
        }
    }
}
