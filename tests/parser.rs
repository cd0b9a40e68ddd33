use linsys::{parse_equation, parse_equation_with, ParseErrorKind, ParseOptions, ParsedEquation};

fn parse(input: &str) -> ParsedEquation {
    parse_equation(input).expect("parse equation")
}

#[test]
fn parses_coefficients_and_constant() {
    let eq = parse("2x + 3y = 7");
    assert_eq!(eq.coefficient("x"), 2.0);
    assert_eq!(eq.coefficient("y"), 3.0);
    assert_eq!(eq.coefficient("z"), 0.0);
    assert_eq!(eq.constant(), 7.0);
    let vars: Vec<&str> = eq.variables().iter().map(String::as_str).collect();
    assert_eq!(vars, ["x", "y"]);
}

#[test]
fn missing_coefficient_defaults_to_one_with_sign() {
    let eq = parse("x - y = 1");
    assert_eq!(eq.coefficient("x"), 1.0);
    assert_eq!(eq.coefficient("y"), -1.0);
}

#[test]
fn leading_sign_applies_to_first_term() {
    let eq = parse("-2x + y = -3.5");
    assert_eq!(eq.coefficient("x"), -2.0);
    assert_eq!(eq.coefficient("y"), 1.0);
    assert_eq!(eq.constant(), -3.5);
}

#[test]
fn explicit_zero_coefficient_keeps_the_variable() {
    let eq = parse("0x + 2y = 4");
    assert_eq!(eq.coefficient("x"), 0.0);
    assert!(eq.variables().contains("x"));
}

#[test]
fn decimals_multiplication_sign_and_multi_letter_names() {
    let eq = parse("1.5 * rate - .25tax = 10");
    assert_eq!(eq.coefficient("rate"), 1.5);
    assert_eq!(eq.coefficient("tax"), -0.25);
}

#[test]
fn repeated_variables_are_summed() {
    let eq = parse("2x + 3x - y = 4");
    assert_eq!(eq.coefficient("x"), 5.0);
    assert_eq!(eq.coefficient("y"), -1.0);
}

#[test]
fn parsing_twice_is_structurally_identical() {
    assert_eq!(parse(" 4a - 2b + c = 9 "), parse(" 4a - 2b + c = 9 "));
    let via_from_str: ParsedEquation = "4a - 2b + c = 9".parse().expect("from_str");
    assert_eq!(via_from_str, parse("4a - 2b + c = 9"));
}

#[test]
fn rejects_missing_or_repeated_equals() {
    let err = parse_equation("2x + 3y").expect_err("no equals");
    assert_eq!(err.kind, ParseErrorKind::MissingEquals);

    let err = parse_equation("x = y = 2").expect_err("two equals");
    assert_eq!(err.kind, ParseErrorKind::MultipleEquals(2));
}

#[test]
fn rejects_non_numeric_right_side() {
    let err = parse_equation("x + y = z").expect_err("variable on the right");
    assert_eq!(
        err.kind,
        ParseErrorKind::InvalidConstant {
            text: "z".to_string()
        }
    );
    assert!(err.to_string().contains("x + y = z"));
}

#[test]
fn rejects_empty_left_side() {
    let err = parse_equation(" = 4").expect_err("empty left side");
    assert_eq!(err.kind, ParseErrorKind::EmptyLeftSide);
}

#[test]
fn strict_mode_rejects_terms_without_variable() {
    let err = parse_equation("2x + 3 = 7").expect_err("constant term on the left");
    assert_eq!(
        err.kind,
        ParseErrorKind::MalformedTerm {
            term: "3".to_string()
        }
    );
}

#[test]
fn lenient_mode_drops_terms_without_variable() {
    let eq = parse_equation_with("2x + 3 + y = 7", &ParseOptions::lenient()).expect("lenient");
    assert_eq!(eq.coefficient("x"), 2.0);
    assert_eq!(eq.coefficient("y"), 1.0);
    assert_eq!(eq.coefficients().len(), 2);
}

#[test]
fn rejects_constants_that_overflow() {
    let err = parse_equation("x + y = 1e400").expect_err("overflowing constant");
    assert_eq!(
        err.kind,
        ParseErrorKind::InvalidConstant {
            text: "1e400".to_string()
        }
    );
    assert!(parse_equation("x + y = -1e400").is_err());
}

#[test]
fn rejects_coefficients_that_overflow() {
    let digits = "9".repeat(400);
    let err = parse_equation(&format!("{digits}x + y = 1")).expect_err("overflowing coefficient");
    assert_eq!(
        err.kind,
        ParseErrorKind::MalformedTerm {
            term: format!("{digits}x")
        }
    );
}
