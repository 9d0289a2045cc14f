//! The semantic analyzer.
//!
//! A single walk over the AST, dispatching by node kind. Every expression
//! node receives an [`ObjRef`] in the [`Analysis`] side table; failed
//! expressions receive the invalid sentinel, and later checks
//! short-circuit on it so one mistake produces one diagnostic.

use lilc_lex::TokenKind;
use lilc_par::ast;
use lilc_util::{DiagnosticBuilder, FxHashMap, Handler, Span, Symbol};

use crate::obj::{Obj, ObjKind, ObjRef};
use crate::scope::{RibKind, ScopeTree};
use crate::types::{Type, TypeRef};

/// Result of analyzing a file: the per-expression descriptor table.
pub struct Analysis {
    /// Obj of every expression node, keyed by the parser-assigned id.
    pub objs: FxHashMap<ast::ExprId, ObjRef>,
}

impl Analysis {
    /// Descriptor of an expression, if it was analyzed.
    pub fn obj(&self, id: ast::ExprId) -> Option<&ObjRef> {
        self.objs.get(&id)
    }
}

/// Analyzes `file`, reporting semantic errors on `handler`.
pub fn analyze(file: &ast::File, handler: &Handler) -> Analysis {
    Analyzer::new(handler).analyze_file(file)
}

/// Walks the AST maintaining the scope tree and the obj table.
pub struct Analyzer<'a> {
    /// Lexically nested symbol scopes.
    scopes: ScopeTree,

    /// Per-expression descriptors, filled in as nodes are visited.
    objs: FxHashMap<ast::ExprId, ObjRef>,

    /// Diagnostic sink for semantic errors.
    handler: &'a Handler,

    /// Result types of the enclosing function literals, innermost last.
    fn_results: Vec<Vec<TypeRef>>,
}

impl<'a> Analyzer<'a> {
    /// Creates an analyzer whose universe scope binds the built-in type
    /// names.
    pub fn new(handler: &'a Handler) -> Self {
        let mut scopes = ScopeTree::new();
        scopes.bind(Symbol::intern("int"), Obj::new(ObjKind::Type, Type::int()));
        scopes.bind(
            Symbol::intern("float"),
            Obj::new(ObjKind::Type, Type::float()),
        );
        scopes.bind(
            Symbol::intern("string"),
            Obj::new(ObjKind::Type, Type::string()),
        );
        scopes.bind(
            Symbol::intern("bool"),
            Obj::new(ObjKind::Type, Type::bool()),
        );
        Self {
            scopes,
            objs: FxHashMap::default(),
            handler,
            fn_results: Vec::new(),
        }
    }

    /// Analyzes a whole file: its declarations in order, inside a file
    /// scope under the universe scope.
    pub fn analyze_file(mut self, file: &ast::File) -> Analysis {
        self.scopes.enter(RibKind::File);
        for decl in &file.decls {
            self.analyze_decl(decl);
        }
        self.scopes.exit();
        Analysis { objs: self.objs }
    }

    fn error(&self, message: String, span: Span) {
        DiagnosticBuilder::error(message).span(span).emit(self.handler);
    }

    // ========================================================================
    // Expressions
    // ========================================================================

    /// Analyzes an expression and records its descriptor.
    fn analyze_expr(&mut self, expr: &ast::Expr) -> ObjRef {
        let obj = match expr {
            ast::Expr::Ident(e) => self.analyze_ident(e),
            ast::Expr::Basic(e) => self.analyze_basic_lit(e),
            ast::Expr::Unary(e) => self.analyze_unary(e),
            ast::Expr::Binary(e) => self.analyze_binary(e),
            ast::Expr::Paren(e) => self.analyze_expr(&e.inner),
            ast::Expr::Call(e) => self.analyze_call(e),
            ast::Expr::Index(e) => self.analyze_index(e),
            ast::Expr::Star(e) => self.analyze_star(e),
            ast::Expr::Array(e) => self.analyze_array_type(e),
            ast::Expr::FuncType(e) => self.analyze_func_type(e),
            ast::Expr::FuncLit(e) => self.analyze_func_lit(e),
            ast::Expr::Bad(_) => Obj::invalid(),
        };
        self.objs.insert(expr.id(), obj.clone());
        obj
    }

    /// Identifier reference: inherits the Obj bound in the nearest scope.
    fn analyze_ident(&mut self, ident: &ast::Ident) -> ObjRef {
        match self.scopes.resolve(ident.name) {
            Some(obj) => obj,
            None => {
                self.error(format!("{} is not declared", ident.name), ident.span);
                Obj::invalid()
            }
        }
    }

    fn analyze_basic_lit(&mut self, lit: &ast::BasicLit) -> ObjRef {
        let ty = match lit.kind {
            TokenKind::Number => Type::int(),
            TokenKind::Float => Type::float(),
            TokenKind::Str => Type::string(),
            _ => Type::invalid(),
        };
        Obj::new(ObjKind::Value, ty)
    }

    fn analyze_unary(&mut self, unary: &ast::UnaryExpr) -> ObjRef {
        let operand = self.analyze_expr(&unary.operand);
        if operand.is_invalid() {
            return Obj::invalid();
        }
        match unary.op {
            TokenKind::Add | TokenKind::Sub | TokenKind::BitXor | TokenKind::BitOr => {
                if *operand.ty == Type::Int {
                    Obj::new(ObjKind::Value, Type::int())
                } else {
                    self.error(
                        format!(
                            "operator {} expects an int operand, found {}",
                            unary.op, operand.ty
                        ),
                        unary.span,
                    );
                    Obj::invalid()
                }
            }
            TokenKind::LogicNot => {
                if *operand.ty == Type::Bool {
                    Obj::new(ObjKind::Value, Type::bool())
                } else {
                    self.error(
                        format!(
                            "operator '!' expects a bool operand, found {}",
                            operand.ty
                        ),
                        unary.span,
                    );
                    Obj::invalid()
                }
            }
            TokenKind::BitAnd => {
                if operand.addressable() {
                    Obj::new(ObjKind::Value, Type::pointer_to(operand.ty.clone()))
                } else {
                    self.error(
                        "operand of '&' is not addressable".to_string(),
                        unary.span,
                    );
                    Obj::invalid()
                }
            }
            _ => Obj::invalid(),
        }
    }

    fn analyze_binary(&mut self, binary: &ast::BinaryExpr) -> ObjRef {
        let left = self.analyze_expr(&binary.left);
        let right = self.analyze_expr(&binary.right);
        if left.is_invalid() || right.is_invalid() {
            return Obj::invalid();
        }
        match binary.op {
            TokenKind::LogicAnd | TokenKind::LogicOr => {
                if *left.ty == Type::Bool && *right.ty == Type::Bool {
                    Obj::new(ObjKind::Value, Type::bool())
                } else {
                    self.error(
                        format!(
                            "operator {} expects bool operands, found {} and {}",
                            binary.op, left.ty, right.ty
                        ),
                        binary.span,
                    );
                    Obj::invalid()
                }
            }
            TokenKind::EqEq
            | TokenKind::NotEq
            | TokenKind::Lt
            | TokenKind::Gt
            | TokenKind::LtEq
            | TokenKind::GtEq => {
                if !Type::assignable(&left.ty, &right.ty) {
                    self.error(
                        format!("cannot compare {} with {}", left.ty, right.ty),
                        binary.span,
                    );
                    Obj::invalid()
                } else if !left.ty.is_comparable() {
                    self.error(
                        format!("type {} is not comparable", left.ty),
                        binary.span,
                    );
                    Obj::invalid()
                } else {
                    Obj::new(ObjKind::Value, Type::bool())
                }
            }
            TokenKind::Add | TokenKind::Sub | TokenKind::Mul | TokenKind::Div => {
                if left.ty.is_numeric() && right.ty.is_numeric() {
                    // int op int stays int; a float operand widens the result
                    let ty = if *left.ty == Type::Int && *right.ty == Type::Int {
                        Type::int()
                    } else {
                        Type::float()
                    };
                    Obj::new(ObjKind::Value, ty)
                } else {
                    self.error(
                        format!(
                            "operator {} expects numeric operands, found {} and {}",
                            binary.op, left.ty, right.ty
                        ),
                        binary.span,
                    );
                    Obj::invalid()
                }
            }
            TokenKind::BitAnd | TokenKind::BitOr | TokenKind::BitXor | TokenKind::Rem => {
                if *left.ty == Type::Int && *right.ty == Type::Int {
                    Obj::new(ObjKind::Value, Type::int())
                } else {
                    self.error(
                        format!(
                            "operator {} expects int operands, found {} and {}",
                            binary.op, left.ty, right.ty
                        ),
                        binary.span,
                    );
                    Obj::invalid()
                }
            }
            _ => Obj::invalid(),
        }
    }

    /// Prefix `*`: pointer-type constructor when the operand denotes a
    /// type, dereference when the operand is pointer-typed.
    fn analyze_star(&mut self, star: &ast::StarExpr) -> ObjRef {
        let operand = self.analyze_expr(&star.operand);
        if operand.is_invalid() {
            return Obj::invalid();
        }
        if operand.kind == ObjKind::Type {
            return Obj::new(ObjKind::Type, Type::pointer_to(operand.ty.clone()));
        }
        if let Type::Pointer(base) = &*operand.ty {
            return Obj::new(ObjKind::IndirectPointer, base.clone());
        }
        self.error(
            format!("cannot dereference non-pointer type {}", operand.ty),
            star.span,
        );
        Obj::invalid()
    }

    fn analyze_array_type(&mut self, array: &ast::ArrayTypeExpr) -> ObjRef {
        let elem = self.analyze_expr(&array.elem);
        if elem.is_invalid() {
            return Obj::invalid();
        }
        if elem.kind == ObjKind::Type {
            Obj::new(ObjKind::Type, Type::array_of(elem.ty.clone()))
        } else {
            self.error("array element must be a type".to_string(), array.span);
            Obj::invalid()
        }
    }

    fn analyze_func_type(&mut self, ft: &ast::FuncTypeExpr) -> ObjRef {
        let ty = self.func_type_of(ft);
        Obj::new(ObjKind::Type, ty)
    }

    /// Builds the function type denoted by a signature, analyzing the
    /// parameter and result type expressions along the way.
    fn func_type_of(&mut self, ft: &ast::FuncTypeExpr) -> TypeRef {
        let params = ft
            .params
            .iter()
            .map(|field| self.type_of(&field.ty))
            .collect();
        let results = ft.results.iter().map(|e| self.type_of(e)).collect();
        Type::func(params, results)
    }

    /// Analyzes an expression that must denote a type.
    fn type_of(&mut self, expr: &ast::Expr) -> TypeRef {
        let obj = self.analyze_expr(expr);
        if obj.is_invalid() {
            return Type::invalid();
        }
        if obj.kind == ObjKind::Type {
            obj.ty.clone()
        } else {
            self.error("type expected".to_string(), expr.span());
            Type::invalid()
        }
    }

    fn analyze_index(&mut self, index: &ast::IndexExpr) -> ObjRef {
        let operand = self.analyze_expr(&index.operand);
        let idx = self.analyze_expr(&index.index);
        if operand.is_invalid() || idx.is_invalid() {
            return Obj::invalid();
        }
        let Type::Array(elem) = &*operand.ty else {
            self.error(
                format!("cannot index non-array type {}", operand.ty),
                index.span,
            );
            return Obj::invalid();
        };
        if *idx.ty != Type::Int {
            self.error(
                format!("array index must be int, found {}", idx.ty),
                index.index.span(),
            );
            return Obj::invalid();
        }
        Obj::new(ObjKind::IndexValue, elem.clone())
    }

    /// Call expression: a cast when the callee denotes a type, otherwise
    /// an ordinary call of a function-valued callee.
    fn analyze_call(&mut self, call: &ast::CallExpr) -> ObjRef {
        let callee = self.analyze_expr(&call.callee);
        let args: Vec<ObjRef> = call.args.iter().map(|a| self.analyze_expr(a)).collect();
        if callee.is_invalid() {
            return Obj::invalid();
        }
        match callee.kind {
            ObjKind::Type => self.analyze_cast(call, &callee, &args),
            ObjKind::Func => self.analyze_fn_call(call, &callee, &args),
            ObjKind::Var if matches!(&*callee.ty, Type::Fn { .. }) => {
                self.analyze_fn_call(call, &callee, &args)
            }
            _ => {
                self.error("expression is not callable".to_string(), call.span);
                Obj::invalid()
            }
        }
    }

    /// `type(expr)`: exactly one argument, castable to the target type.
    fn analyze_cast(&mut self, call: &ast::CallExpr, callee: &ObjRef, args: &[ObjRef]) -> ObjRef {
        if args.len() != 1 {
            self.error(
                format!(
                    "cast to {} expects exactly one argument, found {}",
                    callee.ty,
                    args.len()
                ),
                call.span,
            );
            return Obj::invalid();
        }
        let arg = &args[0];
        if arg.is_invalid() {
            return Obj::invalid();
        }
        if Type::castable(&arg.ty, &callee.ty) {
            Obj::new(ObjKind::Value, callee.ty.clone())
        } else {
            self.error(
                format!("cannot cast {} to {}", arg.ty, callee.ty),
                call.span,
            );
            Obj::invalid()
        }
    }

    fn analyze_fn_call(
        &mut self,
        call: &ast::CallExpr,
        callee: &ObjRef,
        args: &[ObjRef],
    ) -> ObjRef {
        let Type::Fn { params, results } = &*callee.ty else {
            self.error("expression is not callable".to_string(), call.span);
            return Obj::invalid();
        };

        // A single tuple-typed argument of matching arity is the result of
        // a multi-return call piped straight through.
        let arg_tys: Vec<TypeRef> = if args.len() == 1 {
            match &*args[0].ty {
                Type::Tuple(parts) if parts.len() == params.len() => parts.clone(),
                _ => vec![args[0].ty.clone()],
            }
        } else {
            args.iter().map(|a| a.ty.clone()).collect()
        };

        if arg_tys.len() != params.len() {
            self.error(
                format!(
                    "{} arguments expected, found {}",
                    params.len(),
                    arg_tys.len()
                ),
                call.span,
            );
            return Obj::invalid();
        }

        for (i, (arg_ty, param_ty)) in arg_tys.iter().zip(params.iter()).enumerate() {
            if arg_ty.is_invalid() {
                continue;
            }
            if !Type::assignable(arg_ty, param_ty) {
                let span = call.args.get(i).map_or(call.span, |a| a.span());
                self.error(
                    format!("cannot use {} as {} in argument", arg_ty, param_ty),
                    span,
                );
            }
        }

        let result_ty = match results.len() {
            0 => Type::tuple(Vec::new()),
            1 => results[0].clone(),
            _ => Type::tuple(results.clone()),
        };
        Obj::new(ObjKind::Value, result_ty)
    }

    /// Function literal: signature type, then the body under a fresh
    /// function scope with the parameters bound.
    fn analyze_func_lit(&mut self, lit: &ast::FuncLit) -> ObjRef {
        let fn_ty = self.func_type_of(&lit.ty);
        self.objs
            .insert(lit.ty.id, Obj::new(ObjKind::Type, fn_ty.clone()));

        let obj = Obj::new(ObjKind::Func, fn_ty.clone());

        // A named literal (from a fn declaration) binds its name in the
        // enclosing scope before the body so recursion resolves.
        if let Some(name) = &lit.name {
            if name.name.as_str() != "_" {
                if self.scopes.declared_in_current(name.name) {
                    self.error(format!("{} redeclared", name.name), name.span);
                } else {
                    self.scopes.bind(name.name, obj.clone());
                }
            }
            self.objs.insert(name.id, obj.clone());
        }

        let (params, results) = match &*fn_ty {
            Type::Fn { params, results } => (params.clone(), results.clone()),
            _ => (Vec::new(), Vec::new()),
        };

        self.scopes.enter(RibKind::Function);
        for (field, param_ty) in lit.ty.params.iter().zip(params.iter()) {
            if field.name.as_str() == "_" {
                continue;
            }
            if self.scopes.declared_in_current(field.name) {
                self.error(format!("duplicate parameter {}", field.name), field.span);
                continue;
            }
            self.scopes
                .bind(field.name, Obj::new(ObjKind::Var, param_ty.clone()));
        }
        self.fn_results.push(results);
        self.analyze_block(&lit.body, RibKind::Block);
        self.fn_results.pop();
        self.scopes.exit();

        obj
    }

    // ========================================================================
    // Declarations
    // ========================================================================

    fn analyze_decl(&mut self, decl: &ast::Decl) {
        match decl {
            ast::Decl::Var(v) => self.analyze_var_decl(v),
            ast::Decl::Func(f) => {
                self.analyze_func_lit(&f.lit);
            }
        }
    }

    fn analyze_var_decl(&mut self, decl: &ast::VarDecl) {
        if let Some(ty_expr) = &decl.ty {
            let ty = self.type_of(ty_expr);
            for name in &decl.names {
                self.bind_var(name, ty.clone());
            }
            return;
        }

        let vals: Vec<ObjRef> = decl.vals.iter().map(|e| self.analyze_expr(e)).collect();
        let tys = self.destructure(decl.names.len(), &vals, decl.span);
        for (name, ty) in decl.names.iter().zip(tys) {
            self.bind_var(name, ty);
        }
    }

    /// Binds a declared name as a variable, rejecting redeclaration in the
    /// same scope. The placeholder name `_` (from parse recovery and
    /// anonymous fields) binds nothing.
    fn bind_var(&mut self, name: &ast::Ident, ty: TypeRef) {
        if name.name.as_str() == "_" {
            self.objs.insert(name.id, Obj::invalid());
            return;
        }
        let obj = Obj::new(ObjKind::Var, ty);
        if self.scopes.declared_in_current(name.name) {
            self.error(format!("{} redeclared", name.name), name.span);
        } else {
            self.scopes.bind(name.name, obj.clone());
        }
        self.objs.insert(name.id, obj);
    }

    /// Matches `count` binding slots against the analyzed right-hand
    /// sides, returning one type per slot.
    ///
    /// - Counts equal: pairwise. A tuple-typed value fills a single slot
    ///   only when its arity is exactly one.
    /// - Counts differ: the right-hand side must be a single expression
    ///   whose tuple type has exactly `count` components (unpacking).
    fn destructure(&mut self, count: usize, vals: &[ObjRef], span: Span) -> Vec<TypeRef> {
        if vals.len() == count {
            return vals
                .iter()
                .map(|obj| match &*obj.ty {
                    Type::Tuple(parts) if parts.len() == 1 => parts[0].clone(),
                    Type::Tuple(_) => {
                        if !obj.is_invalid() {
                            self.error(
                                "multi-value expression in single-value context".to_string(),
                                span,
                            );
                        }
                        Type::invalid()
                    }
                    _ => obj.ty.clone(),
                })
                .collect();
        }

        if vals.len() == 1 {
            if let Type::Tuple(parts) = &*vals[0].ty {
                if parts.len() == count {
                    return parts.clone();
                }
            }
        }

        if !vals.iter().any(|v| v.is_invalid()) {
            self.error(
                format!("assignment count mismatch: {} = {}", count, vals.len()),
                span,
            );
        }
        vec![Type::invalid(); count]
    }

    // ========================================================================
    // Statements
    // ========================================================================

    fn analyze_block(&mut self, block: &ast::Block, kind: RibKind) {
        self.scopes.enter(kind);
        for stmt in &block.stmts {
            self.analyze_stmt(stmt);
        }
        self.scopes.exit();
    }

    fn analyze_stmt(&mut self, stmt: &ast::Stmt) {
        match stmt {
            ast::Stmt::Block(b) => self.analyze_block(b, RibKind::Block),
            ast::Stmt::If(s) => {
                self.check_condition(&s.cond);
                self.analyze_block(&s.then_block, RibKind::Block);
                if let Some(else_branch) = &s.else_branch {
                    self.analyze_stmt(else_branch);
                }
            }
            ast::Stmt::While(s) => {
                self.check_condition(&s.cond);
                self.analyze_block(&s.body, RibKind::Loop);
            }
            ast::Stmt::For(s) => {
                // the whole statement gets a scope so the init binding is
                // visible to cond, post, and body
                self.scopes.enter(RibKind::Block);
                self.analyze_stmt(&s.init);
                self.check_condition(&s.cond);
                self.analyze_stmt(&s.post);
                self.analyze_block(&s.body, RibKind::Loop);
                self.scopes.exit();
            }
            ast::Stmt::Ret(s) => self.analyze_return(s),
            ast::Stmt::Assign(s) => self.analyze_assign(s),
            ast::Stmt::Expr(s) => {
                self.analyze_expr(&s.expr);
            }
            ast::Stmt::Decl(s) => self.analyze_decl(&s.decl),
            ast::Stmt::Break(s) => {
                if !self.scopes.in_loop() {
                    self.error("break outside of loop".to_string(), s.span);
                }
            }
            ast::Stmt::Continue(s) => {
                if !self.scopes.in_loop() {
                    self.error("continue outside of loop".to_string(), s.span);
                }
            }
            ast::Stmt::Empty(_) | ast::Stmt::Bad(_) => {}
        }
    }

    /// Conditions of `if`/`while`/`for` must be bool.
    fn check_condition(&mut self, cond: &ast::Expr) {
        let obj = self.analyze_expr(cond);
        if !obj.is_invalid() && *obj.ty != Type::Bool {
            self.error(
                format!("condition must be bool, found {}", obj.ty),
                cond.span(),
            );
        }
    }

    /// Return values are checked against the enclosing signature: arity
    /// (with single-tuple pass-through) and per-position assignability.
    fn analyze_return(&mut self, ret: &ast::RetStmt) {
        let vals: Vec<ObjRef> = ret.vals.iter().map(|e| self.analyze_expr(e)).collect();
        let Some(results) = self.fn_results.last().cloned() else {
            return;
        };

        let val_tys: Vec<TypeRef> = if vals.len() == 1 && results.len() != 1 {
            match &*vals[0].ty {
                Type::Tuple(parts) if parts.len() == results.len() => parts.clone(),
                _ => vec![vals[0].ty.clone()],
            }
        } else {
            vals.iter().map(|v| v.ty.clone()).collect()
        };

        if val_tys.len() != results.len() {
            if !val_tys.iter().any(|t| t.is_invalid()) {
                self.error(
                    format!(
                        "{} return values expected, found {}",
                        results.len(),
                        val_tys.len()
                    ),
                    ret.span,
                );
            }
            return;
        }

        for (i, (val_ty, result_ty)) in val_tys.iter().zip(results.iter()).enumerate() {
            if val_ty.is_invalid() {
                continue;
            }
            if !Type::assignable(val_ty, result_ty) {
                let span = ret.vals.get(i).map_or(ret.span, |v| v.span());
                self.error(
                    format!("cannot use {} as {} in return", val_ty, result_ty),
                    span,
                );
            }
        }
    }

    fn analyze_assign(&mut self, assign: &ast::AssignStmt) {
        match assign.op {
            TokenKind::Assign => self.analyze_plain_assign(assign),
            TokenKind::ShortAssign => self.analyze_short_assign(assign),
            _ => self.analyze_compound_assign(assign),
        }
    }

    /// `lhs, ... = rhs, ...;`
    fn analyze_plain_assign(&mut self, assign: &ast::AssignStmt) {
        let lhs_objs: Vec<ObjRef> = assign.lhs.iter().map(|e| self.analyze_expr(e)).collect();
        for (expr, obj) in assign.lhs.iter().zip(lhs_objs.iter()) {
            if !obj.is_invalid() && !obj.assignable() {
                self.error(
                    "left side of assignment is not assignable".to_string(),
                    expr.span(),
                );
            }
        }

        let rhs_objs: Vec<ObjRef> = assign.rhs.iter().map(|e| self.analyze_expr(e)).collect();
        let rhs_tys = self.destructure(assign.lhs.len(), &rhs_objs, assign.span);

        for (i, (lhs_obj, rhs_ty)) in lhs_objs.iter().zip(rhs_tys.iter()).enumerate() {
            if lhs_obj.is_invalid() || rhs_ty.is_invalid() {
                continue;
            }
            if !Type::assignable(rhs_ty, &lhs_obj.ty) {
                let span = if assign.rhs.len() == assign.lhs.len() {
                    assign.rhs[i].span()
                } else {
                    assign.span
                };
                self.error(
                    format!("cannot use {} as {} in assignment", rhs_ty, lhs_obj.ty),
                    span,
                );
            }
        }
    }

    /// `name, ... := rhs, ...;` declares new variables in the current
    /// scope with the initialized-declaration logic.
    fn analyze_short_assign(&mut self, assign: &ast::AssignStmt) {
        let rhs_objs: Vec<ObjRef> = assign.rhs.iter().map(|e| self.analyze_expr(e)).collect();
        let rhs_tys = self.destructure(assign.lhs.len(), &rhs_objs, assign.span);

        for (expr, ty) in assign.lhs.iter().zip(rhs_tys) {
            match expr {
                ast::Expr::Ident(name) => {
                    self.bind_var(name, ty);
                    // bind_var records the obj for the name node
                }
                other => {
                    self.analyze_expr(other);
                    self.error(
                        "identifier expected on left side of ':='".to_string(),
                        other.span(),
                    );
                }
            }
        }
    }

    /// Compound assignment: one slot on each side, assignable target, and
    /// the operand rules of the underlying binary operator.
    fn analyze_compound_assign(&mut self, assign: &ast::AssignStmt) {
        for expr in assign.lhs.iter().skip(1).chain(assign.rhs.iter().skip(1)) {
            self.analyze_expr(expr);
        }
        if assign.lhs.len() != 1 || assign.rhs.len() != 1 {
            self.error(
                format!(
                    "operator {} expects one expression on each side",
                    assign.op
                ),
                assign.span,
            );
        }
        let (Some(lhs), Some(rhs)) = (assign.lhs.first(), assign.rhs.first()) else {
            return;
        };
        let left = self.analyze_expr(lhs);
        let right = self.analyze_expr(rhs);
        if left.is_invalid() || right.is_invalid() {
            return;
        }
        if !left.assignable() {
            self.error(
                "left side of assignment is not assignable".to_string(),
                lhs.span(),
            );
            return;
        }
        match assign.op {
            TokenKind::AddAssign
            | TokenKind::SubAssign
            | TokenKind::MulAssign
            | TokenKind::DivAssign => {
                if !left.ty.is_numeric() || !right.ty.is_numeric() {
                    self.error(
                        format!(
                            "operator {} expects numeric operands, found {} and {}",
                            assign.op, left.ty, right.ty
                        ),
                        assign.span,
                    );
                }
            }
            TokenKind::AndAssign | TokenKind::OrAssign | TokenKind::XorAssign => {
                if *left.ty != Type::Int || *right.ty != Type::Int {
                    self.error(
                        format!(
                            "operator {} expects int operands, found {} and {}",
                            assign.op, left.ty, right.ty
                        ),
                        assign.span,
                    );
                }
            }
            _ => {}
        }
    }
}
