//! End-to-end evaluator tests: source text in, values out.
//!
//! Each test parses real source with `virt_parse` and evaluates it in a
//! fresh global environment.

mod arithmetic_tests;
mod declaration_tests;
mod property_tests;

use rustc_hash::FxHashMap;
use virt_ir::StringInterner;

use crate::{evaluate, Environment, EvalError, EvalErrorKind, Value};

fn run(source: &str) -> Result<Value, EvalError> {
    let interner = StringInterner::new();
    let program = match virt_parse::parse(source, &interner) {
        Ok(program) => program,
        Err(err) => panic!("failed to parse {source:?}: {err}"),
    };
    let env = Environment::global(&interner);
    evaluate(&program, &env, &interner)
}

/// Evaluate `source`, panicking on a runtime error.
fn eval(source: &str) -> Value {
    match run(source) {
        Ok(value) => value,
        Err(err) => panic!("runtime error in {source:?}: {err}"),
    }
}

/// Evaluate `source`, which must fail, and return the error kind.
fn eval_err(source: &str) -> EvalErrorKind {
    match run(source) {
        Ok(value) => panic!("expected {source:?} to fail, got {value:?}"),
        Err(err) => err.kind,
    }
}

fn num(n: f64) -> Value {
    Value::Number(n)
}

fn string(s: &str) -> Value {
    Value::string(s)
}

fn array(items: Vec<Value>) -> Value {
    Value::array(items)
}

fn object(entries: &[(&str, Value)]) -> Value {
    Value::object(
        entries
            .iter()
            .map(|(k, v)| ((*k).to_string(), v.clone()))
            .collect::<FxHashMap<_, _>>(),
    )
}
