//! The evaluation pipeline.
//!
//! Every call walks the same stages: operands resolved, state initialised,
//! operation computed, result rendered. The first failure aborts the call.

use numera_ast::{Expression, Operator};
use numera_numeral::{validate, NumeralCodec};

use crate::error::{EvalError, Result};

/// The running value of one evaluation.
///
/// Only range-checked operands get in; the result of the single operation is
/// left unchecked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalculationState {
    value: i64,
}

impl CalculationState {
    /// Starts a calculation from `initial`, which must be a valid operand.
    pub fn init(initial: i64) -> Result<Self> {
        Ok(CalculationState {
            value: validate(initial)?,
        })
    }

    /// Applies `op` with `operand` as the right-hand side.
    ///
    /// Division truncates toward zero.
    pub fn apply(&mut self, op: Operator, operand: i64) -> Result<()> {
        let operand = validate(operand)?;
        self.value = match op {
            Operator::Add => self.value + operand,
            Operator::Sub => self.value - operand,
            Operator::Mul => self.value * operand,
            Operator::Div => self
                .value
                .checked_div(operand)
                .ok_or(EvalError::DivisionByZero)?,
        };
        Ok(())
    }

    pub fn value(&self) -> i64 {
        self.value
    }
}

/// Evaluates `expr` using the codec of its notation.
pub fn evaluate_expression(expr: &Expression) -> Result<String> {
    evaluate_with(expr, expr.notation().codec())
}

/// Evaluates `expr`, reading operands and writing the result with `codec`.
pub fn evaluate_with<C>(expr: &Expression, codec: &C) -> Result<String>
where
    C: NumeralCodec + ?Sized,
{
    let lhs = codec.to_int(expr.operand1())?;
    let rhs = codec.to_int(expr.operand2())?;
    log::debug!("{} operands resolved: {lhs} {} {rhs}", codec.name(), expr.operator());

    let mut state = CalculationState::init(lhs)?;
    state.apply(expr.operator(), rhs)?;
    log::debug!("computed {expr} = {}", state.value());

    let rendered = codec.from_int(state.value())?;
    log::trace!("rendered {} as {rendered}", state.value());
    Ok(rendered)
}
