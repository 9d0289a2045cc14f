//! AST node definitions.
//!
//! Three disjoint node families - expressions, statements, declarations -
//! plus [`File`] as the root and [`Field`] for parameter-list bindings.
//! The tree owns its children outright; there are no back edges.
//!
//! Every expression node carries a parser-assigned [`ExprId`]. Semantic
//! analysis keys its per-expression `Obj` table on those ids instead of
//! mutating the tree.

use lilc_lex::TokenKind;
use lilc_util::{define_idx, Span, Symbol};

define_idx!(
    /// Identity of an expression node, unique within one parse.
    pub ExprId
);

/// AST root - a source file is a list of top-level declarations.
#[derive(Debug, Clone, Default)]
pub struct File {
    pub decls: Vec<Decl>,
}

// ============================================================================
// DECLARATIONS
// ============================================================================

/// Top-level (or statement-level) declaration.
#[derive(Debug, Clone)]
pub enum Decl {
    /// `let` variable declaration
    Var(VarDecl),
    /// `fn` function declaration
    Func(FuncDecl),
}

impl Decl {
    pub fn span(&self) -> Span {
        match self {
            Decl::Var(d) => d.span,
            Decl::Func(d) => d.span,
        }
    }
}

/// Variable declaration.
///
/// Exactly one of `ty`/`vals` is populated:
/// - `let x, y int;` carries a type and no values
/// - `let x, y = 1, 2;` carries values and no type
#[derive(Debug, Clone)]
pub struct VarDecl {
    pub names: Vec<Ident>,
    pub ty: Option<Box<Expr>>,
    pub vals: Vec<Expr>,
    pub span: Span,
}

/// Function declaration: a named function literal.
#[derive(Debug, Clone)]
pub struct FuncDecl {
    /// The literal; `lit.name` is present for declarations.
    pub lit: FuncLit,
    pub span: Span,
}

/// A binding in a parameter list: `int x` or just `int` (anonymous,
/// named `_`).
#[derive(Debug, Clone)]
pub struct Field {
    pub name: Symbol,
    pub ty: Expr,
    pub span: Span,
}

// ============================================================================
// EXPRESSIONS
// ============================================================================

/// Expression node.
#[derive(Debug, Clone)]
pub enum Expr {
    Ident(Ident),
    Basic(BasicLit),
    Unary(UnaryExpr),
    Binary(BinaryExpr),
    Paren(ParenExpr),
    Call(CallExpr),
    Index(IndexExpr),
    /// Prefix `*`: pointer-type constructor or dereference; semantic
    /// analysis decides which from the operand's value category.
    Star(StarExpr),
    /// `[]T` array type expression
    Array(ArrayTypeExpr),
    /// `fn (...) (...)` function type expression
    FuncType(FuncTypeExpr),
    /// `fn (...) (...) { ... }` function literal
    FuncLit(FuncLit),
    /// Placeholder produced by error recovery
    Bad(BadExpr),
}

impl Expr {
    pub fn id(&self) -> ExprId {
        match self {
            Expr::Ident(e) => e.id,
            Expr::Basic(e) => e.id,
            Expr::Unary(e) => e.id,
            Expr::Binary(e) => e.id,
            Expr::Paren(e) => e.id,
            Expr::Call(e) => e.id,
            Expr::Index(e) => e.id,
            Expr::Star(e) => e.id,
            Expr::Array(e) => e.id,
            Expr::FuncType(e) => e.id,
            Expr::FuncLit(e) => e.id,
            Expr::Bad(e) => e.id,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            Expr::Ident(e) => e.span,
            Expr::Basic(e) => e.span,
            Expr::Unary(e) => e.span,
            Expr::Binary(e) => e.span,
            Expr::Paren(e) => e.span,
            Expr::Call(e) => e.span,
            Expr::Index(e) => e.span,
            Expr::Star(e) => e.span,
            Expr::Array(e) => e.span,
            Expr::FuncType(e) => e.span,
            Expr::FuncLit(e) => e.span,
            Expr::Bad(e) => e.span,
        }
    }
}

/// Identifier reference (or binding occurrence in declarations).
#[derive(Debug, Clone)]
pub struct Ident {
    pub id: ExprId,
    pub name: Symbol,
    pub span: Span,
}

/// Literal: number, float, or string. `kind` is the literal token kind;
/// `value` is the raw lexeme.
#[derive(Debug, Clone)]
pub struct BasicLit {
    pub id: ExprId,
    pub kind: TokenKind,
    pub value: Symbol,
    pub span: Span,
}

/// `op expr`
#[derive(Debug, Clone)]
pub struct UnaryExpr {
    pub id: ExprId,
    pub op: TokenKind,
    pub operand: Box<Expr>,
    pub span: Span,
}

/// `expr op expr`
#[derive(Debug, Clone)]
pub struct BinaryExpr {
    pub id: ExprId,
    pub op: TokenKind,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
    pub span: Span,
}

/// `(expr)`
#[derive(Debug, Clone)]
pub struct ParenExpr {
    pub id: ExprId,
    pub inner: Box<Expr>,
    pub span: Span,
}

/// `callee(arg, ...)` - call, cast, or conversion; classified semantically.
#[derive(Debug, Clone)]
pub struct CallExpr {
    pub id: ExprId,
    pub callee: Box<Expr>,
    pub args: Vec<Expr>,
    pub span: Span,
}

/// `operand[index]`
#[derive(Debug, Clone)]
pub struct IndexExpr {
    pub id: ExprId,
    pub operand: Box<Expr>,
    pub index: Box<Expr>,
    pub span: Span,
}

/// `*operand`
#[derive(Debug, Clone)]
pub struct StarExpr {
    pub id: ExprId,
    pub operand: Box<Expr>,
    pub span: Span,
}

/// `[]elem`
#[derive(Debug, Clone)]
pub struct ArrayTypeExpr {
    pub id: ExprId,
    pub elem: Box<Expr>,
    pub span: Span,
}

/// `fn (params) results`
#[derive(Debug, Clone)]
pub struct FuncTypeExpr {
    pub id: ExprId,
    pub params: Vec<Field>,
    /// Result type expressions; empty for no return values.
    pub results: Vec<Expr>,
    pub span: Span,
}

/// Function literal; `name` is present when it comes from a `fn`
/// declaration.
#[derive(Debug, Clone)]
pub struct FuncLit {
    pub id: ExprId,
    pub name: Option<Ident>,
    pub ty: FuncTypeExpr,
    pub body: Block,
    pub span: Span,
}

/// Placeholder for an expression that failed to parse.
#[derive(Debug, Clone)]
pub struct BadExpr {
    pub id: ExprId,
    pub span: Span,
}

// ============================================================================
// STATEMENTS
// ============================================================================

/// Statement node.
#[derive(Debug, Clone)]
pub enum Stmt {
    Block(Block),
    If(IfStmt),
    While(WhileStmt),
    For(ForStmt),
    Ret(RetStmt),
    Assign(AssignStmt),
    Expr(ExprStmt),
    Decl(DeclStmt),
    Empty(EmptyStmt),
    Break(BreakStmt),
    Continue(ContinueStmt),
    Bad(BadStmt),
}

impl Stmt {
    pub fn span(&self) -> Span {
        match self {
            Stmt::Block(s) => s.span,
            Stmt::If(s) => s.span,
            Stmt::While(s) => s.span,
            Stmt::For(s) => s.span,
            Stmt::Ret(s) => s.span,
            Stmt::Assign(s) => s.span,
            Stmt::Expr(s) => s.span,
            Stmt::Decl(s) => s.span,
            Stmt::Empty(s) => s.span,
            Stmt::Break(s) => s.span,
            Stmt::Continue(s) => s.span,
            Stmt::Bad(s) => s.span,
        }
    }
}

/// `{ stmts }`
#[derive(Debug, Clone)]
pub struct Block {
    pub stmts: Vec<Stmt>,
    pub span: Span,
}

/// `if (cond) { ... } else ...`; the else branch is another `IfStmt` or a
/// `Block`.
#[derive(Debug, Clone)]
pub struct IfStmt {
    pub cond: Expr,
    pub then_block: Block,
    pub else_branch: Option<Box<Stmt>>,
    pub span: Span,
}

/// `while (cond) { ... }`
#[derive(Debug, Clone)]
pub struct WhileStmt {
    pub cond: Expr,
    pub body: Block,
    pub span: Span,
}

/// `for (init; cond; post) { ... }`
#[derive(Debug, Clone)]
pub struct ForStmt {
    pub init: Box<Stmt>,
    pub cond: Expr,
    pub post: Box<Stmt>,
    pub body: Block,
    pub span: Span,
}

/// `return exprs;`
#[derive(Debug, Clone)]
pub struct RetStmt {
    pub vals: Vec<Expr>,
    pub span: Span,
}

/// `lhs op rhs;` where op is `=`, a compound assignment, or `:=`.
#[derive(Debug, Clone)]
pub struct AssignStmt {
    pub lhs: Vec<Expr>,
    pub op: TokenKind,
    pub rhs: Vec<Expr>,
    pub span: Span,
}

/// Bare expression statement.
#[derive(Debug, Clone)]
pub struct ExprStmt {
    pub expr: Expr,
    pub span: Span,
}

/// Declaration in statement position.
#[derive(Debug, Clone)]
pub struct DeclStmt {
    pub decl: Decl,
    pub span: Span,
}

/// Lone `;`
#[derive(Debug, Clone)]
pub struct EmptyStmt {
    pub span: Span,
}

/// `break;`
#[derive(Debug, Clone)]
pub struct BreakStmt {
    pub span: Span,
}

/// `continue;`
#[derive(Debug, Clone)]
pub struct ContinueStmt {
    pub span: Span,
}

/// Placeholder for a statement that failed to parse.
#[derive(Debug, Clone)]
pub struct BadStmt {
    pub span: Span,
}

// ============================================================================
// TRAVERSAL
// ============================================================================

/// Calls `f` once for every expression node in the file, parents before
/// children. Identifier binding occurrences in declarations and function
/// names are included; anonymous parameter names are not expressions and
/// are skipped.
pub fn walk_exprs(file: &File, f: &mut impl FnMut(&Expr)) {
    for decl in &file.decls {
        walk_decl(decl, f);
    }
}

fn walk_decl(decl: &Decl, f: &mut impl FnMut(&Expr)) {
    match decl {
        Decl::Var(v) => {
            for name in &v.names {
                walk_ident(name, f);
            }
            if let Some(ty) = &v.ty {
                walk_expr(ty, f);
            }
            for val in &v.vals {
                walk_expr(val, f);
            }
        }
        Decl::Func(d) => walk_func_lit(&d.lit, f),
    }
}

fn walk_ident(ident: &Ident, f: &mut impl FnMut(&Expr)) {
    // Binding occurrences are expression nodes too; hand the callback a
    // transient Expr wrapper so one callback type covers the whole tree.
    let expr = Expr::Ident(ident.clone());
    f(&expr);
}

fn walk_func_lit(lit: &FuncLit, f: &mut impl FnMut(&Expr)) {
    if let Some(name) = &lit.name {
        walk_ident(name, f);
    }
    walk_func_type(&lit.ty, f);
    walk_block(&lit.body, f);
}

fn walk_func_type(ty: &FuncTypeExpr, f: &mut impl FnMut(&Expr)) {
    for field in &ty.params {
        walk_expr(&field.ty, f);
    }
    for result in &ty.results {
        walk_expr(result, f);
    }
}

fn walk_expr(expr: &Expr, f: &mut impl FnMut(&Expr)) {
    f(expr);
    match expr {
        Expr::Ident(_) | Expr::Basic(_) | Expr::Bad(_) => {}
        Expr::Unary(e) => walk_expr(&e.operand, f),
        Expr::Binary(e) => {
            walk_expr(&e.left, f);
            walk_expr(&e.right, f);
        }
        Expr::Paren(e) => walk_expr(&e.inner, f),
        Expr::Call(e) => {
            walk_expr(&e.callee, f);
            for arg in &e.args {
                walk_expr(arg, f);
            }
        }
        Expr::Index(e) => {
            walk_expr(&e.operand, f);
            walk_expr(&e.index, f);
        }
        Expr::Star(e) => walk_expr(&e.operand, f),
        Expr::Array(e) => walk_expr(&e.elem, f),
        Expr::FuncType(e) => walk_func_type(e, f),
        Expr::FuncLit(e) => walk_func_lit(e, f),
    }
}

fn walk_block(block: &Block, f: &mut impl FnMut(&Expr)) {
    for stmt in &block.stmts {
        walk_stmt(stmt, f);
    }
}

fn walk_stmt(stmt: &Stmt, f: &mut impl FnMut(&Expr)) {
    match stmt {
        Stmt::Block(b) => walk_block(b, f),
        Stmt::If(s) => {
            walk_expr(&s.cond, f);
            walk_block(&s.then_block, f);
            if let Some(else_branch) = &s.else_branch {
                walk_stmt(else_branch, f);
            }
        }
        Stmt::While(s) => {
            walk_expr(&s.cond, f);
            walk_block(&s.body, f);
        }
        Stmt::For(s) => {
            walk_stmt(&s.init, f);
            walk_expr(&s.cond, f);
            walk_stmt(&s.post, f);
            walk_block(&s.body, f);
        }
        Stmt::Ret(s) => {
            for val in &s.vals {
                walk_expr(val, f);
            }
        }
        Stmt::Assign(s) => {
            for e in &s.lhs {
                walk_expr(e, f);
            }
            for e in &s.rhs {
                walk_expr(e, f);
            }
        }
        Stmt::Expr(s) => walk_expr(&s.expr, f),
        Stmt::Decl(s) => walk_decl(&s.decl, f),
        Stmt::Empty(_) | Stmt::Break(_) | Stmt::Continue(_) | Stmt::Bad(_) => {}
    }
}
