use diagnostics::Diagnostics;
use itertools::Itertools;
use lazy_regex::regex;
use test_suite_proc_macro::generate_tests;

use pretty_assertions::assert_eq;

/// Parses `code` and checks the outcome against the expectations written in
/// its comments:
///
/// - `// expect: <tree>`: the printed syntax tree
/// - `// Error...: <message>`: a diagnostic reported on that line
pub fn lox_expect(code: &str) {
    let mut expected_errors = vec![];
    let mut expected_output = vec![];

    let error_regex = regex!(r"// (Error( at end| at '.*')?: .*)");
    let output_regex = regex!(r"// expect: (.*)");

    for (i, line) in code.lines().enumerate() {
        if let Some(cap) = error_regex.captures(line) {
            expected_errors.push(format!("[line {}] {}", i + 1, &cap[1]));
        } else if let Some(cap) = output_regex.captures(line) {
            expected_output.push(cap[1].to_string());
        }
    }

    assert!(expected_output.len() <= 1, "A single expression prints a single tree");
    assert!(
        expected_errors.is_empty() || expected_output.is_empty(),
        "Nothing is printed when errors were reported"
    );

    // A trailing newline would put Eof on a line of its own
    let code = code.trim_end();

    let mut diagnostics = Diagnostics::new();
    let expr = parser::parse_source(code, &mut diagnostics);

    match diagnostics.into_result(expr) {
        Ok(expr) => {
            assert!(expected_errors.is_empty(), "Expected errors but none occurred");
            assert_eq!(
                expr.iter().map(parser::print).collect_vec(),
                expected_output,
                "Actual tree (left) does not match expected tree (right)"
            );
        }
        Err(diagnostics) => {
            assert_eq!(
                diagnostics.to_string(),
                expected_errors.join("\n"),
                "Actual errors (left) do not match expected errors (right)"
            );
        }
    }
}

/// A failed run leaves nothing behind that a later run could pick up.
#[test]
fn repeated_runs_are_independent() {
    let mut first = Diagnostics::new();
    assert!(parser::parse_source("(1 +", &mut first).is_none());
    assert_eq!(first.len(), 1);

    let mut second = Diagnostics::new();
    let expr = parser::parse_source("(1 + 2)", &mut second).unwrap();
    assert!(!second.had_error());
    assert_eq!(parser::print(&expr), "(group (+ 1 2))");
}

generate_tests!("lox");
