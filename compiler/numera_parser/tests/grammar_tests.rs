use numera_ast::{Notation, Operator};
use numera_parser::{parse, ParseError};
use pretty_assertions::assert_eq;

fn summary(line: &str) -> (String, Operator, String, Notation) {
    let expr = parse(line).unwrap_or_else(|e| panic!("{line:?} should parse: {e}"));
    (
        expr.operand1().to_string(),
        expr.operator(),
        expr.operand2().to_string(),
        expr.notation(),
    )
}

#[test]
fn test_every_operator_in_both_notations() {
    for op in Operator::ALL {
        let arabic = format!("6{op}3");
        assert_eq!(
            summary(&arabic),
            ("6".to_string(), op, "3".to_string(), Notation::Arabic)
        );

        let roman = format!("VI{op}III");
        assert_eq!(
            summary(&roman),
            ("VI".to_string(), op, "III".to_string(), Notation::Roman)
        );
    }
}

#[test]
fn test_single_whitespace_on_each_side() {
    let accepted = ["1 + 2", "1+ 2", "1 +2", "1\t+\t2", "X - V", "X\t*V"];
    for line in accepted {
        assert!(parse(line).is_ok(), "{line:?} should parse");
    }
}

#[test]
fn test_every_whitespace_character_counts_as_a_gap() {
    let accepted = ["1\x0B+\x0C2", "X\n-V", "3\r*\r4", "VI\n/\x0BII"];
    for line in accepted {
        assert!(parse(line).is_ok(), "{line:?} should parse");
    }

    // Still at most one per side, and non-ASCII spaces are not gaps.
    let rejected = ["1\r\n+2", "1+\x0C\x0C2", "1\u{a0}+2"];
    for line in rejected {
        assert_eq!(parse(line), Err(ParseError::Malformed(line.to_string())), "{line:?}");
    }
}

#[test]
fn test_negative_operands_keep_their_sign() {
    assert_eq!(
        summary("-5 - -7"),
        ("-5".to_string(), Operator::Sub, "-7".to_string(), Notation::Arabic)
    );
}

#[test]
fn test_malformed_lines() {
    let rejected = [
        "",
        "1",
        "1+",
        "+1",
        "1  + 2",
        "1 +  2",
        " 1+2",
        "1+2 ",
        "1+2+3",
        "1%2",
        "1.5+2",
        "(1+2)",
        "--1+2",
        "x+v",
        "X+1",
        "1+X",
        "XA+V",
        "abc+1",
    ];
    for line in rejected {
        assert_eq!(
            parse(line),
            Err(ParseError::Malformed(line.to_string())),
            "{line:?} should be rejected"
        );
    }
}

#[test]
fn test_roman_grammar_does_not_check_numeral_order() {
    // Ordering is the numeral codec's concern.
    let (lhs, _, rhs, notation) = summary("IM+MI");
    assert_eq!((lhs.as_str(), rhs.as_str(), notation), ("IM", "MI", Notation::Roman));
}

#[test]
fn test_huge_literals_still_parse() {
    let line = "99999999999999999999999+1";
    assert_eq!(summary(line).0, "99999999999999999999999");
}

#[test]
fn test_error_keeps_input_verbatim() {
    let err = parse("  7 + 1").unwrap_err();
    assert_eq!(err.input(), "  7 + 1");
}
