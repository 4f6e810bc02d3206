use virt_eval::{EvalErrorKind, Value};
use virt_ir::{Span, StringInterner};

use super::*;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_string()).collect()
}

mod options {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults() {
        assert_eq!(
            RunOptions::parse(&args(&[])),
            Ok(RunOptions {
                max_call_depth: virt_eval::DEFAULT_MAX_CALL_DEPTH
            })
        );
    }

    #[test]
    fn max_call_depth_flag() {
        assert_eq!(
            RunOptions::parse(&args(&["--max-call-depth=32"])).map(|o| o.max_call_depth),
            Ok(32)
        );
    }

    #[test]
    fn rejects_bad_values_and_unknown_flags() {
        assert!(RunOptions::parse(&args(&["--max-call-depth=lots"])).is_err());
        assert!(RunOptions::parse(&args(&["--verbose"])).is_err());
    }
}

mod running {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn evaluates_with_natives_installed() {
        let result = run_source("print('hello', 1 + 1)\n3", &RunOptions::default());
        assert!(matches!(result, Ok(Value::Number(n)) if (n - 3.0).abs() < f64::EPSILON));
    }

    #[test]
    fn honours_call_depth_option() {
        let options = RunOptions { max_call_depth: 4 };
        let result = run_source("fn f(n) { if n == 0 { 0 } else { f(n - 1) } }\nf(10)", &options);
        let Err(RunError::Runtime(err)) = result else {
            panic!("expected a runtime error, got {result:?}");
        };
        assert_eq!(err.kind, EvalErrorKind::StackOverflow { limit: 4 });
    }

    #[test]
    fn runtime_errors_render_with_prefix() {
        let result = run_source("let x = 1\nx + missing", &RunOptions::default());
        let Err(err) = result else {
            panic!("expected an error");
        };
        assert_eq!(
            err.to_string(),
            "runtime error: cannot resolve variable `missing`"
        );
        assert_eq!(
            location("main.virt", "let x = 1\nx + missing", err.span()),
            Some("main.virt:2:5".to_string())
        );
    }

    #[test]
    fn syntax_errors_are_reported_separately() {
        let result = run_source("let = 1", &RunOptions::default());
        assert!(matches!(result, Err(RunError::Parse(_))));
    }
}

#[test]
fn location_without_span() {
    assert_eq!(location("f", "src", None), None);
    assert_eq!(
        location("f", "a\nbc", Some(Span::new(3, 4))),
        Some("f:2:2".to_string())
    );
}

#[test]
fn debug_rendering() {
    let interner = StringInterner::new();
    let tokens = match virt_lexer::lex("let x = 'hi'", &interner) {
        Ok(tokens) => tokens,
        Err(err) => panic!("lex failed: {err}"),
    };
    let rendered: Vec<String> = tokens
        .iter()
        .map(|token| render_token(token, &interner))
        .collect();
    assert_eq!(rendered[1], "Ident(x) @ 4..5");
    assert_eq!(rendered[3], "Str(\"hi\") @ 8..12");

    let program = match virt_parse::parse("fn add(a, b) { a + b }\nconst k = 1", &interner) {
        Ok(program) => program,
        Err(err) => panic!("parse failed: {err}"),
    };
    let described: Vec<String> = program
        .body
        .iter()
        .map(|stmt| describe_stmt(&stmt.kind, &interner))
        .collect();
    assert_eq!(described, vec!["fn add(a, b)", "const k"]);
}
