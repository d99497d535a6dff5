use numera_ast::{Notation, Operator};
use numera_eval::{evaluate, evaluate_expression, evaluate_with, ErrorKind};
use numera_numeral::{to_roman, ArabicCodec, RomanCodec};
use numera_parser::parse;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

use crate::init_test_logger;

#[test]
fn parsed_expression_evaluates_like_the_line() {
    init_test_logger();
    for line in ["1+1", "XII / IV", "-30 * 2", "MM-I"] {
        let expr = parse(line).unwrap();
        assert_eq!(evaluate_expression(&expr), evaluate(line), "line {line:?}");
    }
}

#[test]
fn notation_tag_picks_the_codec() {
    let expr = parse("XX/IV").unwrap();
    assert_eq!(expr.notation(), Notation::Roman);
    assert_eq!(evaluate_with(&expr, &RomanCodec).as_deref(), Ok("V"));

    // The same Roman operands cannot be read as decimal.
    assert_eq!(
        evaluate_with(&expr, &ArabicCodec).unwrap_err().kind(),
        ErrorKind::OutOfRange
    );
}

#[test]
fn error_kinds_follow_the_stage_that_failed() {
    let cases = [
        ("1 ? 2", ErrorKind::Malformed),
        ("ix+i", ErrorKind::Malformed),
        ("VX+I", ErrorKind::InvalidNumeral),
        ("32768-1", ErrorKind::OutOfRange),
        ("X-X", ErrorKind::OutOfRange),
        ("-1/0", ErrorKind::DivisionByZero),
        ("V/0", ErrorKind::Malformed),
    ];
    for (line, kind) in cases {
        assert_eq!(evaluate(line).unwrap_err().kind(), kind, "line {line:?}");
    }
}

#[test]
fn operand_range_applies_to_roman_operands() {
    // 33000 reads fine as a numeral but is not a valid operand.
    let big = "M".repeat(33);
    let err = evaluate(&format!("{big}-M")).unwrap_err();
    assert_eq!(err.to_string(), "33000 is not in range [-32768,32767]");
}

proptest! {
    #[test]
    fn every_operator_agrees_with_integer_math(
        a in -32768i64..=32767,
        b in -32768i64..=32767,
        op_index in 0usize..4,
    ) {
        let op = Operator::ALL[op_index];
        let line = format!("{a} {op} {b}");
        let expected = match op {
            Operator::Add => Some(a + b),
            Operator::Sub => Some(a - b),
            Operator::Mul => Some(a * b),
            Operator::Div => a.checked_div(b),
        };
        match expected {
            Some(value) => prop_assert_eq!(evaluate(&line).unwrap(), value.to_string()),
            None => prop_assert_eq!(evaluate(&line).unwrap_err().kind(), ErrorKind::DivisionByZero),
        }
    }

    #[test]
    fn roman_differences_render_only_when_positive(a in 1i64..=3999, b in 1i64..=3999) {
        let line = format!("{}-{}", to_roman(a).unwrap(), to_roman(b).unwrap());
        let outcome = evaluate(&line);
        if a > b {
            prop_assert_eq!(outcome.unwrap(), to_roman(a - b).unwrap());
        } else {
            prop_assert_eq!(outcome.unwrap_err().kind(), ErrorKind::OutOfRange);
        }
    }
}
