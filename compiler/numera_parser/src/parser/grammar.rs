//! The two accepted expression shapes.
//!
//! Arabic: `-?\d+ \s? [+-*/] \s? -?\d+`
//! Roman:  `[IVXLCDM]+ \s? [+-*/] \s? [IVXLCDM]+`
//!
//! Each parser must consume its whole input. At most one whitespace
//! character may sit on either side of the operator.

use nom::{
    bytes::complete::take_while1,
    character::complete::{char, digit1, one_of, satisfy},
    combinator::{all_consuming, map, map_res, opt, recognize},
    sequence::{delimited, pair, tuple},
    IResult,
};
use numera_ast::{Expression, Notation, Operator};

const ROMAN_SYMBOLS: &str = "IVXLCDM";

// Same set as `\s` in the usual regex dialects.
fn is_gap(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0B' | '\x0C')
}

fn gap(input: &str) -> IResult<&str, Option<char>> {
    opt(satisfy(is_gap))(input)
}

fn operator(input: &str) -> IResult<&str, Operator> {
    map_res(one_of("+-*/"), Operator::try_from)(input)
}

fn arabic_operand(input: &str) -> IResult<&str, &str> {
    recognize(pair(opt(char('-')), digit1))(input)
}

fn roman_operand(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| ROMAN_SYMBOLS.contains(c))(input)
}

/// Matches a complete Arabic expression such as `-12 / 4`.
pub fn arabic_expression(input: &str) -> IResult<&str, Expression> {
    map(
        all_consuming(tuple((
            arabic_operand,
            delimited(gap, operator, gap),
            arabic_operand,
        ))),
        |(lhs, op, rhs)| Expression::new(lhs, op, rhs, Notation::Arabic),
    )(input)
}

/// Matches a complete Roman expression such as `XIV*II`.
///
/// Only uppercase symbols are accepted here even though the numeral
/// conversion itself ignores case.
pub fn roman_expression(input: &str) -> IResult<&str, Expression> {
    map(
        all_consuming(tuple((
            roman_operand,
            delimited(gap, operator, gap),
            roman_operand,
        ))),
        |(lhs, op, rhs)| Expression::new(lhs, op, rhs, Notation::Roman),
    )(input)
}
