//! Comparison operator execution
//!
//! The single place where record values meet rule literals. Numeric
//! comparison wins whenever both sides read as finite numbers; otherwise
//! only equality comparators apply, on the textual form of both sides.

use crate::error::{Result, RuntimeError};
use verdict_core::ast::Operator;
use verdict_core::{Literal, Value};

/// Compare a record value against a rule literal
pub fn compare_values(left: &Value, right: &Literal, op: Operator) -> Result<bool> {
    if let (Some(l), Some(r)) = (left.as_number(), right.as_number()) {
        return Ok(compare_numbers(l, op, r));
    }

    let l = left.to_string();
    let r = right.as_text();
    match op {
        Operator::Eq | Operator::EqEq => Ok(l == r),
        Operator::Ne => Ok(l != r),
        Operator::Gt | Operator::Ge | Operator::Lt | Operator::Le => {
            tracing::debug!(
                "Relational comparison on non-numeric operands: {:?} {} {:?}",
                left,
                op,
                right
            );
            Err(RuntimeError::TypeError {
                operator: op,
                left: describe(&l, left.type_name()),
                right: describe(&r, literal_type(right)),
            })
        }
    }
}

fn compare_numbers(l: f64, op: Operator, r: f64) -> bool {
    match op {
        Operator::Eq | Operator::EqEq => l == r,
        Operator::Ne => l != r,
        Operator::Gt => l > r,
        Operator::Ge => l >= r,
        Operator::Lt => l < r,
        Operator::Le => l <= r,
    }
}

fn literal_type(literal: &Literal) -> &'static str {
    match literal {
        Literal::Number(_) => "number",
        Literal::String(_) => "string",
    }
}

fn describe(text: &str, type_name: &str) -> String {
    format!("{} {:?}", type_name, text)
}
