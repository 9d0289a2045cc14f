//! Semantic analysis tests: scope discipline, typing rules, tuple
//! unpacking, and error accumulation.

use lilc_lex::tokenize;
use lilc_par::ast::{walk_exprs, Decl, Expr};
use lilc_par::parse;
use lilc_util::Handler;

use crate::analysis::{analyze, Analysis};
use crate::obj::ObjKind;
use crate::types::Type;

fn check(source: &str) -> (lilc_par::ast::File, Analysis, Handler) {
    let handler = Handler::new();
    let tokens = tokenize(source, &handler);
    let file = parse(tokens, &handler);
    assert!(
        !handler.has_errors(),
        "source must lex and parse cleanly: {:?}",
        handler.diagnostics()
    );
    let sem_handler = Handler::new();
    let analysis = analyze(&file, &sem_handler);
    (file, analysis, sem_handler)
}

fn check_ok(source: &str) -> (lilc_par::ast::File, Analysis) {
    let (file, analysis, handler) = check(source);
    assert!(
        !handler.has_errors(),
        "unexpected semantic errors: {:?}",
        handler.diagnostics()
    );
    (file, analysis)
}

fn error_messages(source: &str) -> Vec<String> {
    let (_, _, handler) = check(source);
    handler
        .diagnostics()
        .into_iter()
        .map(|d| d.message)
        .collect()
}

fn first_decl_obj(file: &lilc_par::ast::File, analysis: &Analysis) -> crate::obj::ObjRef {
    match &file.decls[0] {
        Decl::Var(v) => analysis.obj(v.names[0].id).expect("name has an obj").clone(),
        Decl::Func(f) => analysis
            .obj(f.lit.name.as_ref().unwrap().id)
            .expect("fn name has an obj")
            .clone(),
    }
}

// ============================================================================
// Declarations and scoping
// ============================================================================

#[test]
fn test_literal_declaration_types() {
    let (file, analysis) = check_ok("let x = 1 + 2 * 3;");
    let obj = first_decl_obj(&file, &analysis);
    assert_eq!(obj.kind, ObjKind::Var);
    assert_eq!(*obj.ty, Type::Int);
}

#[test]
fn test_float_and_string_literals() {
    let (file, analysis) = check_ok("let x = 1.5;");
    assert_eq!(*first_decl_obj(&file, &analysis).ty, Type::Float);

    let (file, analysis) = check_ok("let s = \"hello\";");
    assert_eq!(*first_decl_obj(&file, &analysis).ty, Type::String);
}

#[test]
fn test_typed_declaration() {
    let (file, analysis) = check_ok("let x, y float;");
    let obj = first_decl_obj(&file, &analysis);
    assert_eq!(obj.kind, ObjKind::Var);
    assert_eq!(*obj.ty, Type::Float);
}

#[test]
fn test_pointer_array_declaration() {
    let (file, analysis) = check_ok("let p *int;");
    assert_eq!(
        first_decl_obj(&file, &analysis).ty.to_string(),
        "*int"
    );

    let (file, analysis) = check_ok("let xs [][]string;");
    assert_eq!(
        first_decl_obj(&file, &analysis).ty.to_string(),
        "[][]string"
    );
}

#[test]
fn test_undeclared_identifier() {
    let messages = error_messages("let x = y;");
    assert_eq!(messages, vec!["y is not declared"]);
}

#[test]
fn test_redeclaration_rejected() {
    let messages = error_messages("let x = 1; let x = 2;");
    assert_eq!(messages, vec!["x redeclared"]);
}

#[test]
fn test_shadowing_in_inner_scope_ok() {
    check_ok("fn f()() { let x = 1; { let x = 2.0; x; } x; }");
}

#[test]
fn test_block_scope_expires() {
    let messages = error_messages("fn f()() { { let x = 1; } x; }");
    assert_eq!(messages, vec!["x is not declared"]);
}

#[test]
fn test_sequential_visibility() {
    // a later top-level declaration is not visible earlier
    let messages = error_messages("let a = b; let b = 1;");
    assert_eq!(messages, vec!["b is not declared"]);
}

#[test]
fn test_builtin_types_bound() {
    check_ok("let a int; let b float; let c string; let d bool;");
}

// ============================================================================
// Operators
// ============================================================================

#[test]
fn test_arithmetic_widening() {
    let (file, analysis) = check_ok("let x = 1 + 2.0;");
    assert_eq!(*first_decl_obj(&file, &analysis).ty, Type::Float);

    let (file, analysis) = check_ok("let x = 1 * 2;");
    assert_eq!(*first_decl_obj(&file, &analysis).ty, Type::Int);
}

#[test]
fn test_arithmetic_rejects_strings() {
    let messages = error_messages("let x = \"a\" + \"b\";");
    assert_eq!(messages.len(), 1);
    assert!(messages[0].contains("numeric operands"));
}

#[test]
fn test_bitwise_requires_int() {
    check_ok("let x = 6 & 3 | 1 ^ 2 % 5;");
    let messages = error_messages("let x = 1.5 % 2;");
    assert_eq!(messages.len(), 1);
    assert!(messages[0].contains("int operands"));
}

#[test]
fn test_comparison_produces_bool() {
    let (file, analysis) = check_ok("let b = 1 < 2;");
    assert_eq!(*first_decl_obj(&file, &analysis).ty, Type::Bool);
}

#[test]
fn test_comparison_mixed_numeric_ok() {
    check_ok("let b = 1 < 2.5;");
}

#[test]
fn test_comparison_incompatible() {
    let messages = error_messages("let b = 1 == \"one\";");
    assert_eq!(messages, vec!["cannot compare int with string"]);
}

#[test]
fn test_strings_not_comparable() {
    let messages = error_messages("let b = \"a\" < \"b\";");
    assert_eq!(messages, vec!["type string is not comparable"]);
}

#[test]
fn test_logical_operators() {
    check_ok("let b = 1 < 2 && !(3 < 4) || 5 < 6;");
    let messages = error_messages("let b = 1 && 2;");
    assert_eq!(messages.len(), 1);
    assert!(messages[0].contains("bool operands"));
}

#[test]
fn test_unary_int_operators() {
    check_ok("let x = -1; let y = +2; let z = ^3; let w = |4;");
    let messages = error_messages("let x = -\"s\";");
    assert_eq!(messages.len(), 1);
    assert!(messages[0].contains("int operand"));
}

#[test]
fn test_address_of_variable() {
    let (file, analysis) = check_ok("fn f()() { let x = 1; let p = &x; }");
    // find p's obj: second decl stmt
    let Decl::Func(func) = &file.decls[0] else {
        panic!()
    };
    let lilc_par::ast::Stmt::Decl(d) = &func.lit.body.stmts[1] else {
        panic!()
    };
    let Decl::Var(v) = &d.decl else { panic!() };
    let obj = analysis.obj(v.names[0].id).unwrap();
    assert_eq!(obj.ty.to_string(), "*int");
}

#[test]
fn test_address_of_literal_rejected() {
    let messages = error_messages("let p = &1;");
    assert_eq!(messages, vec!["operand of '&' is not addressable"]);
}

#[test]
fn test_deref_of_pointer() {
    check_ok("fn f(*int p)() { *p = 3; let v = *p + 1; }");
}

#[test]
fn test_deref_non_pointer_rejected() {
    let messages = error_messages("fn f()() { let x = 1; let y = *x; }");
    assert_eq!(messages, vec!["cannot dereference non-pointer type int"]);
}

#[test]
fn test_star_is_pointer_type_on_types() {
    // same syntax, type operand: pointer type constructor
    check_ok("let p *int; let q = &p;");
}

// ============================================================================
// Indexing
// ============================================================================

#[test]
fn test_index_array() {
    check_ok("fn f([]int xs)(int) { return xs[0]; }");
}

#[test]
fn test_index_is_assignable() {
    check_ok("fn f([]int xs)() { xs[1] = 5; }");
}

#[test]
fn test_index_non_array() {
    let messages = error_messages("fn f(int x)() { let y = x[0]; }");
    assert_eq!(messages, vec!["cannot index non-array type int"]);
}

#[test]
fn test_index_must_be_int() {
    let messages = error_messages("fn f([]int xs)() { let y = xs[1.5]; }");
    assert_eq!(messages, vec!["array index must be int, found float"]);
}

// ============================================================================
// Calls, casts, tuples
// ============================================================================

#[test]
fn test_call_and_return() {
    let (file, analysis) = check_ok(
        "fn add(int x, int y)(int) { return x + y; }\nlet result = add(1, 2);",
    );
    match &file.decls[1] {
        Decl::Var(v) => {
            let obj = analysis.obj(v.names[0].id).unwrap();
            assert_eq!(obj.kind, ObjKind::Var);
            assert_eq!(*obj.ty, Type::Int);
        }
        other => panic!("expected var decl, got {:?}", other),
    }
}

#[test]
fn test_call_arity_mismatch() {
    let messages = error_messages("fn f(int x)() {}\nlet r = f(1, 2);");
    assert!(messages
        .iter()
        .any(|m| m.contains("1 arguments expected, found 2")));
}

#[test]
fn test_call_argument_type_mismatch() {
    let messages = error_messages("fn f(*int p)() {}\nfn g()() { f(1); }");
    assert_eq!(messages, vec!["cannot use int as *int in argument"]);
}

#[test]
fn test_call_implicit_numeric_argument() {
    check_ok("fn f(float x)(float) { return x; }\nlet r = f(1);");
}

#[test]
fn test_call_non_function() {
    let messages = error_messages("let x = 1; let y = x(2);");
    assert_eq!(messages, vec!["expression is not callable"]);
}

#[test]
fn test_tuple_unpack_declaration() {
    let (file, analysis) = check_ok(
        "fn swap(int a, int b)(int, int) { return b, a; }\nlet p, q = swap(10, 20);",
    );
    match &file.decls[1] {
        Decl::Var(v) => {
            for name in &v.names {
                let obj = analysis.obj(name.id).unwrap();
                assert_eq!(*obj.ty, Type::Int);
                assert_eq!(obj.kind, ObjKind::Var);
            }
        }
        other => panic!("expected var decl, got {:?}", other),
    }
}

#[test]
fn test_tuple_unpack_assignment() {
    check_ok(
        "fn two()(int, int) { return 1, 2; }\n\
         fn f()() { let a = 0; let b = 0; a, b = two(); }",
    );
}

#[test]
fn test_tuple_passthrough_call() {
    check_ok(
        "fn two()(int, int) { return 1, 2; }\n\
         fn add(int x, int y)(int) { return x + y; }\n\
         let r = add(two());",
    );
}

#[test]
fn test_tuple_passthrough_return() {
    check_ok(
        "fn two()(int, int) { return 1, 2; }\n\
         fn three()(int, int) { return two(); }",
    );
}

#[test]
fn test_tuple_in_single_value_context() {
    let messages = error_messages("fn two()(int, int) { return 1, 2; }\nlet x = two();");
    assert_eq!(messages, vec!["multi-value expression in single-value context"]);
}

#[test]
fn test_count_mismatch() {
    let messages = error_messages("let a, b = 1;");
    assert_eq!(messages, vec!["assignment count mismatch: 2 = 1"]);
}

#[test]
fn test_cast_int_float() {
    let (file, analysis) = check_ok("let x = int(1.5);");
    assert_eq!(*first_decl_obj(&file, &analysis).ty, Type::Int);
    check_ok("let y = float(3);");
}

#[test]
fn test_cast_arity() {
    let messages = error_messages("let x = int(1, 2);");
    assert!(messages[0].contains("exactly one argument"));
}

#[test]
fn test_bad_cast() {
    let messages = error_messages("let x = int(\"1\");");
    assert_eq!(messages, vec!["cannot cast string to int"]);
}

#[test]
fn test_func_type_cast() {
    // cast-style call on a function type: fn(int)(int)(h)
    check_ok("fn h(int x)(int) { return x; }\nlet g = fn(int)(int)(h);");
}

#[test]
fn test_zero_return_call_unusable() {
    let messages = error_messages("fn f()() {}\nlet x = f();");
    assert_eq!(messages, vec!["multi-value expression in single-value context"]);
}

// ============================================================================
// Function literals and parameters
// ============================================================================

#[test]
fn test_func_lit_variable_is_callable() {
    check_ok("let f = fn(int x)(int) { return x; };\nlet y = f(3);");
}

#[test]
fn test_duplicate_parameter() {
    let messages = error_messages("fn f(int x, float x)() {}");
    assert_eq!(messages, vec!["duplicate parameter x"]);
}

#[test]
fn test_anonymous_parameters_not_bound() {
    check_ok("fn f(int, float)() {}");
}

#[test]
fn test_recursion_resolves() {
    check_ok("fn fib(int n)(int) { if (n < 2) { return n; } return fib(n - 1) + fib(n - 2); }");
}

#[test]
fn test_function_redeclaration() {
    let messages = error_messages("fn f()() {}\nfn f()() {}");
    assert_eq!(messages, vec!["f redeclared"]);
}

#[test]
fn test_return_type_mismatch() {
    let messages = error_messages("fn f()(int) { return \"s\"; }");
    assert_eq!(messages, vec!["cannot use string as int in return"]);
}

#[test]
fn test_return_arity_mismatch() {
    let messages = error_messages("fn f()(int, int) { return 1; }");
    assert_eq!(messages, vec!["2 return values expected, found 1"]);
}

#[test]
fn test_return_implicit_conversion() {
    check_ok("fn f()(float) { return 1; }");
}

// ============================================================================
// Statements
// ============================================================================

#[test]
fn test_if_condition_must_be_bool() {
    let messages = error_messages("fn f()() { if (1) { } }");
    assert_eq!(messages, vec!["condition must be bool, found int"]);
}

#[test]
fn test_while_for_conditions() {
    check_ok("fn f()() { while (1 < 2) { } for (let i = 0; i < 3; i += 1) { } }");
    let messages = error_messages("fn f()() { while (\"s\") { } }");
    assert_eq!(messages, vec!["condition must be bool, found string"]);
}

#[test]
fn test_for_init_scope() {
    // the init binding is visible inside the loop and gone after it
    let messages =
        error_messages("fn f()() { for (let i = 0; i < 3; i += 1) { let j = i; } i; }");
    assert_eq!(messages, vec!["i is not declared"]);
}

#[test]
fn test_break_continue_in_loop() {
    check_ok("fn f()() { while (1 < 2) { if (2 < 3) { break; } continue; } }");
}

#[test]
fn test_break_outside_loop() {
    let messages = error_messages("fn f()() { break; }");
    assert_eq!(messages, vec!["break outside of loop"]);
}

#[test]
fn test_continue_not_inherited_by_nested_fn() {
    let messages =
        error_messages("fn f()() { while (1 < 2) { let g = fn()() { continue; }; } }");
    assert_eq!(messages, vec!["continue outside of loop"]);
}

#[test]
fn test_assignment_to_value_rejected() {
    let messages = error_messages("fn f()() { 1 = 2; }");
    assert_eq!(messages, vec!["left side of assignment is not assignable"]);
}

#[test]
fn test_assignment_implicit_conversion() {
    check_ok("fn f()() { let x int; x = 1.5; }");
}

#[test]
fn test_assignment_type_mismatch() {
    let messages = error_messages("fn f()() { let x int; x = \"s\"; }");
    assert_eq!(messages, vec!["cannot use string as int in assignment"]);
}

#[test]
fn test_compound_assignment_rules() {
    check_ok("fn f()() { let x = 1; x += 2; x *= 3; x &= 1; }");
    let messages = error_messages("fn f()() { let x = 1; x &= 1.5; }");
    assert_eq!(messages.len(), 1);
    assert!(messages[0].contains("int operands"));
}

#[test]
fn test_short_assign_declares() {
    check_ok("fn f()() { x := 1; let y = x + 1; }");
}

#[test]
fn test_short_assign_requires_identifier() {
    let messages = error_messages("fn f()() { let x = 1; x + 1 := 2; }");
    assert!(messages
        .iter()
        .any(|m| m.contains("identifier expected on left side of ':='")));
}

#[test]
fn test_short_assign_tuple_unpack() {
    check_ok("fn two()(int, int) { return 1, 2; }\nfn f()() { a, b := two(); let c = a + b; }");
}

// ============================================================================
// Coverage and error accumulation
// ============================================================================

#[test]
fn test_every_expr_has_an_obj() {
    let (file, analysis) = check_ok(
        "let g = 10;\n\
         fn fib(int n)(int) {\n\
             if (n < 2) { return n; }\n\
             return fib(n - 1) + fib(n - 2);\n\
         }\n\
         fn main()() {\n\
             let xs []int;\n\
             for (let i = 0; i < g; i += 1) { xs[i] = fib(i); }\n\
             let f = fn(float v)(float) { return v * 2.0; };\n\
             let r = f(1.5);\n\
         }\n",
    );
    let mut missing = Vec::new();
    walk_exprs(&file, &mut |e: &Expr| {
        if analysis.obj(e.id()).is_none() {
            missing.push(e.id());
        }
    });
    assert!(missing.is_empty(), "exprs without obj: {:?}", missing);
}

#[test]
fn test_errors_accumulate_without_aborting() {
    let (_, _, handler) = check(
        "let a = missing1;\n\
         let b = missing2 + missing3;\n\
         fn f()(int) { return \"s\"; }\n",
    );
    // one per undeclared name, one for the bad return
    assert_eq!(handler.error_count(), 4);
}

#[test]
fn test_invalid_suppresses_cascades() {
    // y is undeclared; the dependent expressions must not re-report
    let messages = error_messages("let x = (y + 1) * 2;");
    assert_eq!(messages, vec!["y is not declared"]);
}

#[test]
fn test_ident_objs_alias_binding() {
    let (file, analysis) = check_ok("fn f()() { let x = 1; x; x; }");
    let Decl::Func(func) = &file.decls[0] else {
        panic!()
    };
    let stmts = &func.lit.body.stmts;
    let decl_id = match &stmts[0] {
        lilc_par::ast::Stmt::Decl(d) => match &d.decl {
            Decl::Var(v) => v.names[0].id,
            other => panic!("expected var, got {:?}", other),
        },
        other => panic!("expected decl, got {:?}", other),
    };
    let use1 = match &stmts[1] {
        lilc_par::ast::Stmt::Expr(e) => e.expr.id(),
        other => panic!("expected expr stmt, got {:?}", other),
    };
    let use2 = match &stmts[2] {
        lilc_par::ast::Stmt::Expr(e) => e.expr.id(),
        other => panic!("expected expr stmt, got {:?}", other),
    };
    let bound = analysis.obj(decl_id).unwrap();
    assert!(std::rc::Rc::ptr_eq(bound, analysis.obj(use1).unwrap()));
    assert!(std::rc::Rc::ptr_eq(bound, analysis.obj(use2).unwrap()));
}
