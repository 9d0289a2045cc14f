//! Declaration parsing: `let` variable declarations and `fn` function
//! declarations.

use lilc_lex::TokenKind;

use crate::ast::*;
use crate::Parser;

impl<'a> Parser<'a> {
    /// `let x, y, z type;` or `let x, y, z = e1, e2, e3;`
    ///
    /// Exactly one of the two tails appears; a missing tail reports "type
    /// expected" through [`Parser::parse_type`].
    pub(crate) fn parse_var_decl(&mut self) -> VarDecl {
        let start = self.expect(TokenKind::Let);
        let names = self.parse_name_list();

        if self.match_token(TokenKind::Assign) {
            let vals = self.parse_expr_list();
            self.expect(TokenKind::Semi);
            VarDecl {
                names,
                ty: None,
                vals,
                span: self.span_from(start),
            }
        } else {
            let ty = self.parse_type();
            self.expect(TokenKind::Semi);
            VarDecl {
                names,
                ty: Some(Box::new(ty)),
                vals: Vec::new(),
                span: self.span_from(start),
            }
        }
    }

    /// `fn name (params) results block`
    pub(crate) fn parse_func_decl(&mut self) -> FuncDecl {
        let start = self.expect(TokenKind::Fn);
        let name = self.parse_name();
        let ty = self.parse_signature(start);
        let body = self.parse_block();
        let span = self.span_from(start);
        let lit = FuncLit {
            id: self.fresh_id(),
            name: Some(name),
            ty,
            body,
            span,
        };
        FuncDecl { lit, span }
    }
}
