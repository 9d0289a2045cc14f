//! lilc-drv - Compiler driver.
//!
//! The driver is the entry point and orchestrator of the front-end
//! pipeline:
//!
//! ```text
//! source file (.li)
//!        |
//!        v
//!   [lilc-lex]  -> token stream      (--emit-tokens)
//!        |
//!        v
//!   [lilc-par]  -> AST               (--emit-ast)
//!        |
//!        v
//!   [lilc-sem]  -> per-expression Objs + semantic errors
//! ```
//!
//! Each phase gets its own diagnostic handler so the driver can report
//! lexical, syntax, and semantic errors separately. Every phase always
//! runs: the pipeline is best-effort and a failed phase only makes the
//! later ones noisier, never impossible.
//!
//! Driver-level failures (missing file, bad usage) are `anyhow` errors
//! and exit code 2; a compile with diagnostics exits 1; a clean compile
//! exits 0.

use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use lilc_lex::tokenize;
use lilc_par::parse;
use lilc_sem::analyze;
use lilc_util::{Diagnostic, FileId, Handler, SourceMap};

/// Command-line usage, printed on bad invocations.
pub const USAGE: &str = "usage: lilc [--emit-tokens] [--emit-ast] <file.li>";

/// Driver configuration parsed from command-line arguments.
#[derive(Debug, Clone)]
pub struct Config {
    /// Source file to compile.
    pub input: PathBuf,
    /// Dump the token stream after lexing.
    pub emit_tokens: bool,
    /// Dump the AST after parsing.
    pub emit_ast: bool,
}

impl Config {
    /// Parses configuration from an argument iterator (without the
    /// program name).
    pub fn from_args(args: impl IntoIterator<Item = String>) -> Result<Config> {
        let mut input = None;
        let mut emit_tokens = false;
        let mut emit_ast = false;

        for arg in args {
            match arg.as_str() {
                "--emit-tokens" => emit_tokens = true,
                "--emit-ast" => emit_ast = true,
                flag if flag.starts_with('-') => {
                    bail!("unknown option '{}'\n{}", flag, USAGE);
                }
                path => {
                    if input.replace(PathBuf::from(path)).is_some() {
                        bail!("more than one input file\n{}", USAGE);
                    }
                }
            }
        }

        let Some(input) = input else {
            bail!("no input file\n{}", USAGE);
        };
        Ok(Config {
            input,
            emit_tokens,
            emit_ast,
        })
    }
}

/// Error counts of one pipeline run.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompileOutcome {
    pub lex_errors: usize,
    pub parse_errors: usize,
    pub sem_errors: usize,
}

impl CompileOutcome {
    /// A compile succeeds when all three error lists are empty.
    pub fn success(&self) -> bool {
        self.lex_errors == 0 && self.parse_errors == 0 && self.sem_errors == 0
    }
}

/// One compilation session: configuration plus the source map used for
/// diagnostic rendering.
pub struct Session {
    config: Config,
    source_map: SourceMap,
}

impl Session {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            source_map: SourceMap::new(),
        }
    }

    /// Reads the input file and runs the pipeline, printing emitted dumps
    /// to stdout and diagnostics to stderr.
    pub fn run(&mut self) -> Result<CompileOutcome> {
        let path = self.config.input.clone();
        let source = std::fs::read_to_string(&path)
            .with_context(|| format!("cannot read {}", path.display()))?;
        let name = path.display().to_string();
        Ok(self.compile(&name, &source))
    }

    /// Runs lex -> parse -> analyze over in-memory source.
    pub fn compile(&mut self, name: &str, source: &str) -> CompileOutcome {
        let file_id = self.source_map.add_file(name, source);

        let lex_handler = Handler::new();
        let tokens = tokenize(source, &lex_handler);
        if self.config.emit_tokens {
            for token in &tokens {
                println!(
                    "{}:{}\t{:?}\t{}",
                    token.span.line,
                    token.span.column,
                    token.kind,
                    token.text()
                );
            }
        }

        let parse_handler = Handler::new();
        let file = parse(tokens, &parse_handler);
        if self.config.emit_ast {
            println!("{:#?}", file);
        }

        let sem_handler = Handler::new();
        let _analysis = analyze(&file, &sem_handler);

        self.report(&lex_handler, file_id);
        self.report(&parse_handler, file_id);
        self.report(&sem_handler, file_id);

        CompileOutcome {
            lex_errors: lex_handler.error_count(),
            parse_errors: parse_handler.error_count(),
            sem_errors: sem_handler.error_count(),
        }
    }

    fn report(&self, handler: &Handler, file_id: FileId) {
        for diagnostic in handler.diagnostics() {
            eprint!("{}", self.render(&diagnostic, file_id));
        }
    }

    /// Renders one diagnostic with a source snippet:
    ///
    /// ```text
    /// error: x is not declared
    ///  --> demo.li:3:9
    ///   |
    /// 3 | let a = x;
    ///   |         ^
    /// ```
    fn render(&self, diagnostic: &Diagnostic, file_id: FileId) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}: {}", diagnostic.level, diagnostic.message);

        let Ok(file) = self.source_map.file(file_id) else {
            return out;
        };
        let line = diagnostic.span.line;
        let column = diagnostic.span.column;
        let _ = writeln!(out, " --> {}:{}:{}", file.name, line, column);

        if let Ok(text) = file.line_text(line) {
            let gutter = line.to_string();
            let pad = " ".repeat(gutter.len());
            let _ = writeln!(out, "{} |", pad);
            let _ = writeln!(out, "{} | {}", gutter, text);
            let caret_pad = " ".repeat(column.saturating_sub(1) as usize);
            let _ = writeln!(out, "{} | {}^", pad, caret_pad);
        }

        for note in &diagnostic.notes {
            let _ = writeln!(out, " note: {}", note);
        }
        for help in &diagnostic.helps {
            let _ = writeln!(out, " help: {}", help);
        }
        out
    }
}

/// Convenience for tests and the binary: builds a session and runs it.
pub fn run_compiler(config: Config) -> Result<CompileOutcome> {
    Session::new(config).run()
}
