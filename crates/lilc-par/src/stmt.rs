//! Statement parsing.
//!
//! Dispatch is on the leading token; anything that can start an expression
//! falls through to [`Parser::parse_simple_stmt`]. A token that can start
//! neither is a "statement expected" error followed by panic-mode recovery
//! to the statement follow-set.

use lilc_lex::TokenKind;

use crate::ast::*;
use crate::{Parser, STATEMENT_FOLLOW};

impl<'a> Parser<'a> {
    /// Parses one statement.
    pub(crate) fn parse_stmt(&mut self) -> Stmt {
        match self.kind() {
            TokenKind::If => self.parse_if_stmt(),
            TokenKind::While => self.parse_while_stmt(),
            TokenKind::For => self.parse_for_stmt(),
            TokenKind::Return => self.parse_return_stmt(),
            TokenKind::LBrace => Stmt::Block(self.parse_block()),
            TokenKind::Let => {
                let decl = self.parse_var_decl();
                Stmt::Decl(DeclStmt {
                    span: decl.span,
                    decl: Decl::Var(decl),
                })
            }
            TokenKind::Semi => {
                let span = self.current_span();
                self.advance();
                Stmt::Empty(EmptyStmt { span })
            }
            TokenKind::Break => {
                let start = self.current_span();
                self.advance();
                self.expect(TokenKind::Semi);
                Stmt::Break(BreakStmt {
                    span: self.span_from(start),
                })
            }
            TokenKind::Continue => {
                let start = self.current_span();
                self.advance();
                self.expect(TokenKind::Semi);
                Stmt::Continue(ContinueStmt {
                    span: self.span_from(start),
                })
            }
            kind if kind.starts_expr() => self.parse_simple_stmt(true),
            _ => {
                let start = self.current_span();
                self.expect_error("statement");
                self.exhaust(STATEMENT_FOLLOW);
                Stmt::Bad(BadStmt {
                    span: self.span_from(start),
                })
            }
        }
    }

    /// Expression statement or assignment.
    ///
    /// `consume_semi` is false only for the post clause of a `for`
    /// statement, whose terminator is `)`.
    pub(crate) fn parse_simple_stmt(&mut self, consume_semi: bool) -> Stmt {
        let start = self.current_span();
        let mut lhs = self.parse_expr_list();

        if self.kind().is_assign_op() {
            let op = self.kind();
            self.advance();
            let rhs = self.parse_expr_list();
            if consume_semi {
                self.expect(TokenKind::Semi);
            }
            return Stmt::Assign(AssignStmt {
                lhs,
                op,
                rhs,
                span: self.span_from(start),
            });
        }

        if lhs.len() > 1 {
            self.expect_error("one expression");
            return Stmt::Bad(BadStmt {
                span: self.span_from(start),
            });
        }

        if consume_semi {
            self.expect(TokenKind::Semi);
        }
        let expr = lhs.remove(0);
        Stmt::Expr(ExprStmt {
            expr,
            span: self.span_from(start),
        })
    }

    /// `if (cond) block [else (if-stmt | block)]`
    fn parse_if_stmt(&mut self) -> Stmt {
        let start = self.expect(TokenKind::If);
        self.expect(TokenKind::LParen);
        let cond = self.parse_expr();
        self.expect(TokenKind::RParen);
        let then_block = self.parse_block();
        let else_branch = if self.match_token(TokenKind::Else) {
            let branch = if self.kind() == TokenKind::If {
                self.parse_if_stmt()
            } else {
                Stmt::Block(self.parse_block())
            };
            Some(Box::new(branch))
        } else {
            None
        };
        Stmt::If(IfStmt {
            cond,
            then_block,
            else_branch,
            span: self.span_from(start),
        })
    }

    /// `while (cond) block`
    fn parse_while_stmt(&mut self) -> Stmt {
        let start = self.expect(TokenKind::While);
        self.expect(TokenKind::LParen);
        let cond = self.parse_expr();
        self.expect(TokenKind::RParen);
        let body = self.parse_block();
        Stmt::While(WhileStmt {
            cond,
            body,
            span: self.span_from(start),
        })
    }

    /// `for (init; cond; post) block`. The init clause is a `let`
    /// declaration or a simple statement; init and post may be empty.
    fn parse_for_stmt(&mut self) -> Stmt {
        let start = self.expect(TokenKind::For);
        self.expect(TokenKind::LParen);

        let init = match self.kind() {
            TokenKind::Let => {
                let decl = self.parse_var_decl();
                Stmt::Decl(DeclStmt {
                    span: decl.span,
                    decl: Decl::Var(decl),
                })
            }
            TokenKind::Semi => {
                let span = self.current_span();
                self.advance();
                Stmt::Empty(EmptyStmt { span })
            }
            _ => self.parse_simple_stmt(true),
        };

        let cond = self.parse_expr();
        self.expect(TokenKind::Semi);

        let post = if self.kind() == TokenKind::RParen {
            Stmt::Empty(EmptyStmt {
                span: self.current_span(),
            })
        } else {
            self.parse_simple_stmt(false)
        };
        self.expect(TokenKind::RParen);

        let body = self.parse_block();
        Stmt::For(ForStmt {
            init: Box::new(init),
            cond,
            post: Box::new(post),
            body,
            span: self.span_from(start),
        })
    }

    /// `return [expr {, expr}];`
    fn parse_return_stmt(&mut self) -> Stmt {
        let start = self.expect(TokenKind::Return);
        let vals = if self.kind() == TokenKind::Semi {
            Vec::new()
        } else {
            self.parse_expr_list()
        };
        self.expect(TokenKind::Semi);
        Stmt::Ret(RetStmt {
            vals,
            span: self.span_from(start),
        })
    }

    /// `{ stmt* }`
    pub(crate) fn parse_block(&mut self) -> Block {
        let start = self.expect(TokenKind::LBrace);
        let mut stmts = Vec::new();
        while self.kind() != TokenKind::RBrace && self.kind() != TokenKind::Eof {
            stmts.push(self.parse_stmt());
        }
        self.expect(TokenKind::RBrace);
        Block {
            stmts,
            span: self.span_from(start),
        }
    }
}
