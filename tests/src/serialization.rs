use numera_ast::{from_json, to_json, Expression, Notation, Operator};
use numera_parser::parse;
use pretty_assertions::assert_eq;

#[test]
fn parsed_expression_survives_json() {
    let expr = parse("MCM * II").unwrap();
    let json = to_json(&expr).unwrap();
    assert!(json.contains(r#""operand1": "MCM""#), "json was {json}");

    let back: Expression = from_json(&json).unwrap();
    assert_eq!(back, expr);
}

#[test]
fn json_uses_variant_names() {
    let expr = Expression::new("4", Operator::Div, "-2", Notation::Arabic);
    let value: String = to_json(&expr).unwrap();
    assert!(value.contains(r#""operator": "Div""#));
    assert!(value.contains(r#""notation": "Arabic""#));
}
