//! Edge case tests for lilc-lex.

use crate::token::TokenKind;
use crate::tokenize;
use lilc_util::Handler;

fn lex_kinds(source: &str) -> Vec<TokenKind> {
    let handler = Handler::new();
    tokenize(source, &handler)
        .into_iter()
        .map(|t| t.kind)
        .collect()
}

#[test]
fn test_empty_source() {
    let handler = Handler::new();
    let tokens = tokenize("", &handler);
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Eof);
    assert!(!handler.has_errors());
}

#[test]
fn test_whitespace_only() {
    assert_eq!(lex_kinds("  \t\r\n  "), vec![TokenKind::Eof]);
}

#[test]
fn test_eof_position() {
    let handler = Handler::new();
    let tokens = tokenize("ab\ncd", &handler);
    let eof = tokens.last().unwrap();
    assert_eq!(eof.kind, TokenKind::Eof);
    assert_eq!(eof.span.line, 2);
    assert_eq!(eof.span.column, 3);
    assert_eq!(eof.span.start, 5);
}

#[test]
fn test_long_identifier() {
    let name = "a".repeat(10_000);
    let handler = Handler::new();
    let tokens = tokenize(&name, &handler);
    assert_eq!(tokens[0].kind, TokenKind::Ident);
    assert_eq!(tokens[0].text().len(), 10_000);
}

#[test]
fn test_compound_source() {
    let source = "\
let x = 1;
let tmp = 0;
for (let y = 1; y < 4; y += 1)
{
    tmp += x * y; // note
}
";
    let handler = Handler::new();
    let tokens = tokenize(source, &handler);
    assert!(!handler.has_errors());
    assert!(tokens.iter().any(|t| t.kind == TokenKind::For));
    assert!(tokens.iter().any(|t| t.kind == TokenKind::AddAssign));
    assert!(tokens.iter().any(|t| t.kind == TokenKind::Comment));
    assert_eq!(tokens.last().unwrap().kind, TokenKind::Eof);
}

#[test]
fn test_row_column_tracking() {
    let handler = Handler::new();
    let tokens = tokenize("a\n  b", &handler);
    assert_eq!((tokens[0].span.line, tokens[0].span.column), (1, 1));
    assert_eq!((tokens[1].span.line, tokens[1].span.column), (2, 3));
}

#[test]
fn test_error_positions() {
    let handler = Handler::new();
    tokenize("let @ = 1;", &handler);
    let diags = handler.diagnostics();
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].message, "unexpected character '@'");
    assert_eq!(diags[0].span.line, 1);
    assert_eq!(diags[0].span.column, 5);
}

#[test]
fn test_error_recovery_continues() {
    // Every error resumes lexing; all valid tokens still come through.
    let handler = Handler::new();
    let tokens = tokenize("@ let # x", &handler);
    assert_eq!(handler.error_count(), 2);
    let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(kinds, vec![TokenKind::Let, TokenKind::Ident, TokenKind::Eof]);
}

#[test]
fn test_non_ascii_outside_string_is_error() {
    let handler = Handler::new();
    tokenize("let é = 1;", &handler);
    assert_eq!(handler.error_count(), 1);
}

#[test]
fn test_nested_delimiters() {
    let kinds = lex_kinds("((()))");
    assert_eq!(
        kinds.iter().filter(|k| **k == TokenKind::LParen).count(),
        3
    );
    assert_eq!(
        kinds.iter().filter(|k| **k == TokenKind::RParen).count(),
        3
    );
}

#[test]
fn test_consecutive_comments() {
    let handler = Handler::new();
    let tokens = tokenize("//one\n//two\n//three", &handler);
    assert_eq!(
        tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Comment)
            .count(),
        3
    );
}

#[test]
fn test_lexemes_are_source_slices() {
    let source = "let x = 0xFF + \"s\\n\"; // c";
    let handler = Handler::new();
    for token in tokenize(source, &handler) {
        assert_eq!(token.text(), &source[token.span.start..token.span.end]);
    }
}
