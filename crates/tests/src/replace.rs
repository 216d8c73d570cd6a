use runflow_actions::Params;
use runflow_runtime::{errors::ExecErrorKind, values::Value};

use crate::{run_expect_error, run_expect_string};

fn replace_params(string: &str, old_val: &str, new_val: &str, count: Option<Value>) -> Params {
    let mut params = Params::from_iter([
        ("string", Value::from(string)),
        ("old_val", Value::from(old_val)),
        ("new_val", Value::from(new_val)),
    ]);

    if let Some(count) = count {
        params.insert("count", count);
    }

    params
}

fn replace(string: &str, old_val: &str, new_val: &str, count: Option<Value>) -> String {
    run_expect_string("replace", replace_params(string, old_val, new_val, count))
}

#[test]
fn replace_all_occurrences() {
    assert_eq!(replace("banana", "a", "o", None), "bonono");
    assert_eq!(replace("banana", "a", "o", Some(Value::Int(-1))), "bonono");
    assert_eq!(replace("this is it", "is", "at", None), "that at it");
    assert_eq!(replace("aaa", "a", "", None), "");
}

#[test]
fn replace_bounded() {
    assert_eq!(replace("banana", "a", "o", Some(Value::Int(1))), "bonana");
    assert_eq!(replace("aaa", "a", "bb", Some(Value::Int(2))), "bbbba");
    assert_eq!(replace("banana", "a", "o", Some(Value::Int(0))), "banana");

    // A cap larger than the number of occurrences replaces them all
    assert_eq!(replace("banana", "a", "o", Some(Value::Int(10))), "bonono");
}

#[test]
fn replace_scans_left_to_right() {
    // Matches never overlap, and the earliest one wins
    assert_eq!(replace("aaaa", "aa", "b", None), "bb");
    assert_eq!(replace("aaa", "aa", "b", None), "ba");
    assert_eq!(replace("aaa", "aa", "b", Some(Value::Int(1))), "ba");
}

#[test]
fn replace_without_match_returns_subject() {
    assert_eq!(replace("banana", "x", "o", None), "banana");
    assert_eq!(replace("banana", "x", "o", Some(Value::Int(3))), "banana");
    assert_eq!(replace("", "x", "o", None), "");
}

#[test]
fn replace_empty_pattern_interleaves() {
    // An empty pattern matches at every character boundary, both ends
    // included
    assert_eq!(replace("abc", "", "-", None), "-a-b-c-");
    assert_eq!(replace("aaa", "", "b", Some(Value::Int(2))), "babaa");
    assert_eq!(replace("", "", "x", None), "x");
}

#[test]
fn replace_accepts_countish_forms() {
    assert_eq!(replace("banana", "a", "o", Some(Value::Null)), "bonono");
    assert_eq!(replace("banana", "a", "o", Some(Value::from("1"))), "bonana");
    assert_eq!(
        replace("banana", "a", "o", Some(Value::from("2.9"))),
        "bonona"
    );
    assert_eq!(replace("banana", "a", "o", Some(Value::Float(1.8))), "bonana");
    assert_eq!(replace("banana", "a", "o", Some(Value::Bool(true))), "bonana");
    assert_eq!(replace("banana", "a", "o", Some(Value::Bool(false))), "banana");
    assert_eq!(replace("banana", "a", "o", Some(Value::from("none"))), "bonono");
    assert_eq!(
        replace("banana", "a", "o", Some(Value::Bytes(b"2".to_vec()))),
        "bonona"
    );
}

#[test]
fn replace_rejects_non_string_subject() {
    let params = Params::from_iter([
        ("string", Value::Int(42)),
        ("old_val", Value::from("a")),
        ("new_val", Value::from("o")),
    ]);

    let err = run_expect_error("replace", params, ExecErrorKind::Type);

    assert_eq!(
        err.to_string(),
        "expected a string for parameter 'string', found 42 of type int"
    );
}

#[test]
fn replace_rejects_non_string_patterns() {
    let params = Params::from_iter([
        ("string", Value::from("banana")),
        ("old_val", Value::Bool(true)),
        ("new_val", Value::from("o")),
    ]);

    let err = run_expect_error("replace", params, ExecErrorKind::Type);

    assert_eq!(
        err.to_string(),
        "expected a string for parameter 'old_val', found true of type boolean"
    );

    let params = Params::from_iter([
        ("string", Value::from("banana")),
        ("old_val", Value::from("a")),
        ("new_val", Value::Null),
    ]);

    let err = run_expect_error("replace", params, ExecErrorKind::Type);

    assert_eq!(
        err.to_string(),
        "expected a string for parameter 'new_val', found null of type null"
    );
}

#[test]
fn replace_rejects_missing_parameters() {
    let mut params = Params::new();
    params.insert("string", Value::from("banana"));
    params.insert("old_val", Value::from("a"));

    let err = run_expect_error("replace", params, ExecErrorKind::Type);

    assert_eq!(err.to_string(), "missing required parameter 'new_val'");
}

#[test]
fn replace_rejects_unknown_parameters() {
    let mut params = replace_params("banana", "a", "o", None);
    params.insert("extra", Value::Int(1));

    let err = run_expect_error("replace", params, ExecErrorKind::Type);

    assert_eq!(err.to_string(), "unknown parameters in action call: extra");
}

#[test]
fn replace_rejects_invalid_count_kind() {
    let err = run_expect_error(
        "replace",
        replace_params(
            "banana",
            "a",
            "o",
            Some(Value::List(vec![Value::Int(1), Value::Int(2)])),
        ),
        ExecErrorKind::Type,
    );

    assert_eq!(
        err.to_string(),
        "type of parameter 'count' is not valid, found [1, 2] of type list"
    );
}

#[test]
fn replace_rejects_malformed_count_text() {
    let err = run_expect_error(
        "replace",
        replace_params("banana", "a", "o", Some(Value::from("abc"))),
        ExecErrorKind::Value,
    );

    assert_eq!(
        err.to_string(),
        "value of parameter 'count' is not valid, found 'abc'"
    );
}

#[test]
fn replace_signature_renders() {
    let actions = runflow_actions::define_native_actions();

    let action = actions
        .iter()
        .find(|action| action.name == "replace")
        .unwrap();

    assert_eq!(
        action.signature(),
        "replace(string: string, old_val: string, new_val: string, count?: any) -> string"
    );
}
