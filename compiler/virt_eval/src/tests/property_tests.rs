//! Property tests over generated programs.

use proptest::prelude::*;

use super::{num, run};
use crate::{format_number, Value};

proptest! {
    #[test]
    fn numeric_literals_evaluate_exactly(int in 0u32..1_000_000, frac in 0u32..1000) {
        let source = format!("{int}.{frac:03}");
        let expected: f64 = source.parse().unwrap_or(f64::NAN);
        prop_assert_eq!(run(&source), Ok(num(expected)));
    }

    #[test]
    fn integer_literals_round_trip_through_display(n in 0u64..(1u64 << 40)) {
        let source = n.to_string();
        let value = run(&source);
        prop_assert_eq!(value.map(|v| v.to_string()), Ok(source));
    }

    #[test]
    fn object_literal_keys_match_declaration(
        entries in prop::collection::btree_map("[a-z][a-z0-9_]{0,6}", 0u32..100, 0..8)
    ) {
        let body = entries
            .iter()
            .map(|(key, value)| format!("'{key}': {value}"))
            .collect::<Vec<_>>()
            .join(", ");
        let value = run(&format!("{{{body}}}"));
        let Ok(Value::Object(object)) = value else {
            return Err(TestCaseError::fail(format!("expected object, got {value:?}")));
        };
        let expected: Vec<(String, Value)> = entries
            .iter()
            .map(|(key, value)| (key.clone(), num(f64::from(*value))))
            .collect();
        prop_assert_eq!(object.entries(), expected);
    }

    #[test]
    fn pure_expressions_are_idempotent(a in 0u32..1000, b in 1u32..1000, c in 0u32..1000) {
        let expr = format!("(x + {a}) * {b} % ({c} + 1) - x / {b}");
        let source = format!("let x = {c}\nlet first = {expr}\nlet second = {expr}\nfirst == second");
        prop_assert_eq!(run(&source), Ok(Value::Bool(true)));
    }

    #[test]
    fn number_keys_match_string_keys(n in 0u32..10_000) {
        let key = format_number(f64::from(n));
        let source = format!("let o = {{}}\no[{n}] = 1\no['{key}']");
        prop_assert_eq!(run(&source), Ok(num(1.0)));
    }
}
