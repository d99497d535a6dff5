// Expression model shared by the parser and the evaluator

use std::fmt;

use numera_numeral::{ArabicCodec, NumeralCodec, RomanCodec};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The numeral system an expression's operands are written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Notation {
    Arabic,
    Roman,
}

impl Notation {
    /// The codec used to read operands and write results in this notation.
    pub fn codec(self) -> &'static dyn NumeralCodec {
        match self {
            Notation::Arabic => &ArabicCodec,
            Notation::Roman => &RomanCodec,
        }
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notation::Arabic => write!(f, "arabic"),
            Notation::Roman => write!(f, "roman"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub const ALL: [Operator; 4] = [Operator::Add, Operator::Sub, Operator::Mul, Operator::Div];

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A character that is not one of `+ - * /`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownOperator(pub char);

impl fmt::Display for UnknownOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown operator '{}'", self.0)
    }
}

impl std::error::Error for UnknownOperator {}

impl TryFrom<char> for Operator {
    type Error = UnknownOperator;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '+' => Ok(Operator::Add),
            '-' => Ok(Operator::Sub),
            '*' => Ok(Operator::Mul),
            '/' => Ok(Operator::Div),
            other => Err(UnknownOperator(other)),
        }
    }
}

/// A single binary expression as read from one input line.
///
/// Operands are kept as written; turning them into numbers is the
/// evaluator's job.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Expression {
    operand1: String,
    operand2: String,
    operator: Operator,
    notation: Notation,
}

impl Expression {
    pub fn new(
        operand1: impl Into<String>,
        operator: Operator,
        operand2: impl Into<String>,
        notation: Notation,
    ) -> Self {
        Expression {
            operand1: operand1.into(),
            operand2: operand2.into(),
            operator,
            notation,
        }
    }

    pub fn operand1(&self) -> &str {
        &self.operand1
    }

    pub fn operand2(&self) -> &str {
        &self.operand2
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn notation(&self) -> Notation {
        self.notation
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.operand1, self.operator, self.operand2)
    }
}
