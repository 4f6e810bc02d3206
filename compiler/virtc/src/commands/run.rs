//! The `run` and `eval` commands: parse and evaluate Virt source.

use virt_eval::{Environment, EvalError, InterpreterBuilder, Value, DEFAULT_MAX_CALL_DEPTH};
use virt_ir::StringInterner;
use virt_parse::ParseError;

use super::{location, read_file};
use crate::natives;

/// Options shared by `run` and `eval`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    pub max_call_depth: usize,
}

impl Default for RunOptions {
    fn default() -> Self {
        RunOptions {
            max_call_depth: DEFAULT_MAX_CALL_DEPTH,
        }
    }
}

impl RunOptions {
    /// Parse `--max-call-depth=N`; other arguments are left to the caller.
    pub fn parse(args: &[String]) -> Result<Self, String> {
        let mut options = RunOptions::default();
        for arg in args {
            if let Some(depth) = arg.strip_prefix("--max-call-depth=") {
                options.max_call_depth = depth
                    .parse()
                    .map_err(|_| format!("invalid value for --max-call-depth: '{depth}'"))?;
            } else if arg.starts_with("--") {
                return Err(format!("unknown option '{arg}'"));
            }
        }
        Ok(options)
    }
}

/// Why a script did not produce a value.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("syntax error: {0}")]
    Parse(#[from] ParseError),
    #[error("runtime error: {0}")]
    Runtime(#[from] EvalError),
}

impl RunError {
    pub fn span(&self) -> Option<virt_ir::Span> {
        match self {
            RunError::Parse(err) => Some(err.span()),
            RunError::Runtime(err) => err.span,
        }
    }
}

/// Parse and evaluate `source` in a fresh global environment with the
/// host natives installed.
pub fn run_source(source: &str, options: &RunOptions) -> Result<Value, RunError> {
    let interner = StringInterner::new();
    let program = virt_parse::parse(source, &interner)?;

    let env = Environment::global(&interner);
    natives::register(&env, &interner);

    let mut interpreter = InterpreterBuilder::new(&interner)
        .max_call_depth(options.max_call_depth)
        .build();
    tracing::debug!(statements = program.body.len(), "evaluating program");
    Ok(interpreter.evaluate(&program, &env)?)
}

/// Run a source file, printing its result unless it is `nil`.
pub fn run_file(path: &str, options: &RunOptions) {
    let source = read_file(path);
    report(path, &source, run_source(&source, options));
}

/// Evaluate inline source from the command line.
pub fn eval_inline(source: &str, options: &RunOptions) {
    report("<eval>", source, run_source(source, options));
}

fn report(path: &str, source: &str, result: Result<Value, RunError>) {
    match result {
        Ok(Value::Nil) => {}
        Ok(value) => println!("{value}"),
        Err(err) => {
            eprintln!("{err}");
            if let Some(at) = location(path, source, err.span()) {
                eprintln!("  --> {at}");
            }
            std::process::exit(1);
        }
    }
}
