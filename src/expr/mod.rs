// License: MIT

//! Postfix (reverse-Polish) expression evaluation.
//!
//! An expression is written as `$(a b +)`: whitespace-separated operands
//! followed by their operator. Operands are constants from the
//! [`ConstantTable`] or numeric literals; operators are `+`, `-`, `*`,
//! `mod` and `max`.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::ast::Scalar;
use crate::constants::ConstantTable;
use crate::error::EvalError;

static NUMBER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^-?[0-9]+(\.[0-9]+)?$").expect("number pattern is valid")
});

const WRAPPER_CHARS: &[char] = &['$', '(', ')', '\'', '"'];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operator {
    Add,
    Sub,
    Mul,
    Mod,
    Max,
}

impl Operator {
    fn parse(token: &str) -> Option<Self> {
        match token {
            "+" => Some(Operator::Add),
            "-" => Some(Operator::Sub),
            "*" => Some(Operator::Mul),
            "mod" => Some(Operator::Mod),
            "max" => Some(Operator::Max),
            _ => None,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Mod => "mod",
            Operator::Max => "max",
        }
    }
}

/// Strip the `$( )` wrapper and any stray quotes from an expression marker.
pub fn expression_body(raw: &str) -> &str {
    raw.trim_matches(WRAPPER_CHARS)
}

/// Evaluate an expression marker such as `$(width 2 *)` against `constants`.
///
/// Constant names take priority over literals and operators. Integer
/// arithmetic stays integral; a float operand makes the result a float.
pub fn evaluate(raw: &str, constants: &ConstantTable) -> Result<Scalar, EvalError> {
    let body = expression_body(raw);
    let mut stack: Vec<Scalar> = Vec::new();

    for token in body.split_whitespace() {
        if let Some(value) = constants.lookup(token) {
            stack.push(value.clone());
        } else if NUMBER_RE.is_match(token) {
            stack.push(parse_number(token, body)?);
        } else if let Some(op) = Operator::parse(token) {
            let (Some(b), Some(a)) = (stack.pop(), stack.pop()) else {
                return Err(EvalError::InsufficientOperands {
                    operator: token.to_string(),
                    expression: body.to_string(),
                });
            };
            stack.push(apply(op, a, b, body)?);
        } else {
            return Err(EvalError::UnknownToken {
                token: token.to_string(),
                expression: body.to_string(),
            });
        }
    }

    if stack.len() != 1 {
        return Err(EvalError::InvalidExpression {
            expression: body.to_string(),
            remaining: stack.len(),
        });
    }

    let result = stack.remove(0);
    tracing::debug!(expression = body, %result, "evaluated expression");
    Ok(result)
}

fn parse_number(token: &str, expression: &str) -> Result<Scalar, EvalError> {
    // The pattern already guarantees the syntax; only range can fail.
    let overflow = || EvalError::ArithmeticOverflow {
        operator: token.to_string(),
        expression: expression.to_string(),
    };
    if token.contains('.') {
        token.parse::<f64>().map(Scalar::Float).map_err(|_| overflow())
    } else {
        token.parse::<i64>().map(Scalar::Int).map_err(|_| overflow())
    }
}

fn apply(op: Operator, a: Scalar, b: Scalar, expression: &str) -> Result<Scalar, EvalError> {
    if let (Scalar::Int(a), Scalar::Int(b)) = (&a, &b) {
        return apply_int(op, *a, *b, expression).map(Scalar::Int);
    }
    match (numeric(&a), numeric(&b)) {
        (Some(a), Some(b)) => apply_float(op, a, b, expression).map(Scalar::Float),
        _ => Err(EvalError::NonNumericOperand {
            operator: op.symbol().to_string(),
            expression: expression.to_string(),
        }),
    }
}

fn numeric(value: &Scalar) -> Option<f64> {
    match value {
        Scalar::Int(i) => Some(*i as f64),
        Scalar::Float(f) => Some(*f),
        Scalar::Str(_) => None,
    }
}

fn apply_int(op: Operator, a: i64, b: i64, expression: &str) -> Result<i64, EvalError> {
    let result = match op {
        Operator::Add => a.checked_add(b),
        Operator::Sub => a.checked_sub(b),
        Operator::Mul => a.checked_mul(b),
        Operator::Max => Some(a.max(b)),
        Operator::Mod => {
            if b == 0 {
                return Err(EvalError::DivisionByZero {
                    expression: expression.to_string(),
                });
            }
            // Remainder takes the sign of the divisor.
            a.checked_rem(b)
                .map(|r| if r != 0 && (r < 0) != (b < 0) { r + b } else { r })
        }
    };

    result.ok_or_else(|| EvalError::ArithmeticOverflow {
        operator: op.symbol().to_string(),
        expression: expression.to_string(),
    })
}

fn apply_float(op: Operator, a: f64, b: f64, expression: &str) -> Result<f64, EvalError> {
    Ok(match op {
        Operator::Add => a + b,
        Operator::Sub => a - b,
        Operator::Mul => a * b,
        Operator::Max => a.max(b),
        Operator::Mod => {
            if b == 0.0 {
                return Err(EvalError::DivisionByZero {
                    expression: expression.to_string(),
                });
            }
            let r = a % b;
            if r != 0.0 && (r < 0.0) != (b < 0.0) { r + b } else { r }
        }
    })
}

#[cfg(test)]
mod tests;
