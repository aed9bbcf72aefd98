use num_bigint::BigInt;
use pretty_assertions::assert_eq;
use smartcalc::{
    error::{CalcError, ParseError, RuntimeError},
    interpreter::{
        evaluator::{binary::eval_binary, core::Context},
        operator::Operator,
        value::number::{Number, Precision, is_large_literal},
    },
};

fn context_with(assignments: &[&str]) -> Context {
    let mut context = Context::new();
    for assignment in assignments {
        context.assign(assignment).unwrap();
    }
    context
}

fn eval(context: &Context, expression: &str) -> String {
    context.evaluate(expression)
           .unwrap_or_else(|e| panic!("{expression:?} failed: {e:?}"))
}

#[test]
fn precedence_and_grouping() {
    let context = Context::new();
    assert_eq!(eval(&context, "2 + 3 * 4"), "14");
    assert_eq!(eval(&context, "(2 + 3) * 4"), "20");
    assert_eq!(eval(&context, "10 - 4 - 3"), "3");
    assert_eq!(eval(&context, "64 / 4 / 2"), "8");
    assert_eq!(eval(&context, "2 ^ 2 ^ 3"), "256");
    assert_eq!(eval(&context, "2 * 3 ^ 2"), "18");
    assert_eq!(eval(&context, "17 % 5 * 2"), "4");
}

#[test]
fn lone_literal_is_returned_as_written() {
    let context = Context::new();
    assert_eq!(eval(&context, "(007)"), "007");
    assert_eq!(eval(&context, "+5"), "5");
}

#[test]
fn lone_variable_is_resolved() {
    let context = context_with(&["a = 12", "b = a"]);
    assert_eq!(eval(&context, "(b)"), "12");
}

#[test]
fn literal_size_heuristic() {
    assert!(is_large_literal("0"));
    assert!(!is_large_literal("9223372036854775807"));
    assert!(is_large_literal("1111111111111111111"));
    assert!(!is_large_literal("11111111111111111111"));
    assert_eq!(Precision::for_literals(["99999999999", "3"]), Precision::Arbitrary);
}

// The heuristic is not an overflow test: these literals fit in an i64 but
// are not classified as large, while tiny literals are.
#[test]
fn literal_size_heuristic_misclassifies_by_design() {
    assert!(!is_large_literal("99999999999"));
    assert!(!is_large_literal("8999999999"));
    assert!(is_large_literal("1"));
    assert_eq!(Precision::for_literals(["99999999999", "8999999999"]), Precision::Fixed);
}

#[test]
fn fixed_precision_still_exact_on_overflow() {
    let context = Context::new();
    assert_eq!(eval(&context, "99999999999 * 99999999999"), "9999999999800000000001");

    let context = context_with(&["m = 9223372036854775807"]);
    assert_eq!(eval(&context, "m + m"), "18446744073709551614");
    assert_eq!(eval(&context, "-m - m"), "-18446744073709551614");
}

#[test]
fn fixed_precision_power_truncates() {
    let context = context_with(&["two = 2", "minus = -1", "three = 3", "forty = 40"]);
    assert_eq!(eval(&context, "two ^ minus"), "0");
    assert_eq!(eval(&context, "three ^ forty"), "12157665459056928801");

    let trivial = context_with(&["one = 1", "minus = -1", "zero = 0", "big = 99999999999999999"]);
    assert_eq!(eval(&trivial, "one ^ big"), "1");
    assert_eq!(eval(&trivial, "minus ^ big"), "-1");
    assert_eq!(eval(&trivial, "zero ^ big"), "0");
    assert_eq!(eval(&trivial, "minus ^ minus"), "-1");
    assert_eq!(trivial.evaluate("zero ^ minus").unwrap_err().to_string(), "Division by zero");
}

#[test]
fn arbitrary_precision_power_is_exact() {
    let context = Context::new();
    assert_eq!(eval(&context, "3 ^ 40"), "12157665459056928801");
    assert_eq!(eval(&context, "(-2) ^ 63"), "-9223372036854775808");
    assert_eq!(context.evaluate("2 ^ -1").unwrap_err().to_string(), "Negative exponent");
    assert_eq!(context.evaluate("2 ^ 5000000000").unwrap_err().to_string(),
               "Exponent is too large");
    assert_eq!(eval(&context, "1 ^ 99999999999"), "1");
    assert_eq!(eval(&context, "(-1) ^ 5000000000"), "1");
    assert_eq!(eval(&context, "(-1) ^ 5000000001"), "-1");
    assert_eq!(eval(&context, "0 ^ 5000000000"), "0");
}

#[test]
fn division_truncates_and_modulus_floors() {
    let fixed = context_with(&["a = -7", "b = 2", "c = -2"]);
    assert_eq!(eval(&fixed, "a / b"), "-3");
    assert_eq!(eval(&fixed, "a % b"), "1");
    assert_eq!(eval(&fixed, "b % c"), "0");
    assert_eq!(eval(&fixed, "a % c"), "-1");

    let big = Context::new();
    assert_eq!(eval(&big, "-7 / 2"), "-3");
    assert_eq!(eval(&big, "-7 % 2"), "1");
    assert_eq!(eval(&big, "7 % -2"), "-1");
}

#[test]
fn division_by_zero_in_both_precisions() {
    let fixed = context_with(&["zero = 0", "one = 1", "minus = -1"]);
    for expression in ["one / zero", "one % zero", "zero ^ minus", "4 / 0", "4 % (2 - 2)"] {
        assert_eq!(fixed.evaluate(expression).unwrap_err(),
                   CalcError::Runtime(RuntimeError::DivisionByZero),
                   "{expression}");
    }
}

#[test]
fn unknown_and_cyclic_variables() {
    let mut context = context_with(&["a = 1", "b = a"]);
    assert!(matches!(context.evaluate("c * 2"),
                     Err(CalcError::Runtime(RuntimeError::UnknownVariable { name })) if name == "c"));

    context.assign("a = b").unwrap();
    assert!(matches!(context.evaluate("b + 1"),
                     Err(CalcError::Runtime(RuntimeError::CyclicReference { .. }))));
}

#[test]
fn malformed_expressions_are_parse_errors() {
    let context = Context::new();
    for expression in ["8 * / 2", "(1 + 2", "1 2", "()", "2 ^", "* 3", "2 (3)", "x = 1 + 2"] {
        assert!(matches!(context.evaluate(expression),
                         Err(CalcError::Parse(ParseError::InvalidExpression { .. }))),
                "{expression}");
    }
}

#[test]
fn binary_operations_promote_on_overflow() {
    assert_eq!(eval_binary(Operator::Mul, Number::Fixed(i64::MAX), Number::Fixed(2)).unwrap(),
               Number::Big(BigInt::from(i64::MAX) * 2));
    assert_eq!(eval_binary(Operator::Div, Number::Fixed(i64::MIN), Number::Fixed(-1)).unwrap(),
               Number::Big(-BigInt::from(i64::MIN)));
    assert_eq!(eval_binary(Operator::Mod, Number::Fixed(i64::MIN), Number::Fixed(-1)).unwrap(),
               Number::Fixed(0));
    assert_eq!(eval_binary(Operator::Sub, Number::Fixed(5), Number::Big(BigInt::from(7))).unwrap(),
               Number::Big(BigInt::from(-2)));
}

#[test]
fn assignment_stores_raw_text() {
    let mut context = context_with(&["a = 5", "b = a"]);
    assert_eq!(context.store.raw("b"), Some("a"));
    context.assign("a = -3").unwrap();
    assert_eq!(context.lookup("b").unwrap(), "-3");
    assert_eq!(eval(&context, "b * b"), "9");
}
