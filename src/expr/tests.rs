#[cfg(test)]
use super::*;
#[cfg(test)]
use crate::ast::Value;

fn table(entries: &[(&str, Value)]) -> ConstantTable {
    let mut table = ConstantTable::new();
    for (name, value) in entries {
        table.define(name, value).expect("valid constant");
    }
    table
}

#[test]
fn test_integer_addition_stays_integer() {
    let empty = ConstantTable::new();
    assert_eq!(evaluate("$(3 4 +)", &empty), Ok(Scalar::Int(7)));
    assert_eq!(evaluate("3 4 +", &empty), Ok(Scalar::Int(7)));
}

#[test]
fn test_float_operand_promotes() {
    let empty = ConstantTable::new();
    assert_eq!(evaluate("$(3.0 4 +)", &empty), Ok(Scalar::Float(7.0)));
    assert_eq!(evaluate("$(2 0.5 *)", &empty), Ok(Scalar::Float(1.0)));
    assert_eq!(evaluate("$(1 2.5 max)", &empty), Ok(Scalar::Float(2.5)));
}

#[test]
fn test_mod_and_max_with_constants() {
    let constants = table(&[("a", Value::Integer(10)), ("b", Value::Integer(3))]);
    assert_eq!(evaluate("$(a b mod)", &constants), Ok(Scalar::Int(1)));
    assert_eq!(evaluate("$(a b max)", &constants), Ok(Scalar::Int(10)));
    assert_eq!(evaluate("$(b a max)", &constants), Ok(Scalar::Int(10)));
}

#[test]
fn test_operand_order() {
    let empty = ConstantTable::new();
    assert_eq!(evaluate("$(10 3 -)", &empty), Ok(Scalar::Int(7)));
    assert_eq!(evaluate("$(3 10 -)", &empty), Ok(Scalar::Int(-7)));
}

#[test]
fn test_mod_follows_divisor_sign() {
    let empty = ConstantTable::new();
    assert_eq!(evaluate("$(-7 3 mod)", &empty), Ok(Scalar::Int(2)));
    assert_eq!(evaluate("$(7 -3 mod)", &empty), Ok(Scalar::Int(-2)));
    assert_eq!(evaluate("$(7.5 2 mod)", &empty), Ok(Scalar::Float(1.5)));
    assert_eq!(evaluate("$(-1.5 2 mod)", &empty), Ok(Scalar::Float(0.5)));
}

#[test]
fn test_longer_chain() {
    let constants = table(&[("width", Value::Integer(80)), ("pad", Value::Integer(2))]);
    // (width - pad * 2) max 10
    assert_eq!(
        evaluate("$(width pad 2 * - 10 max)", &constants),
        Ok(Scalar::Int(76))
    );
}

#[test]
fn test_missing_operands() {
    let empty = ConstantTable::new();
    assert_eq!(
        evaluate("$(+ )", &empty),
        Err(EvalError::InsufficientOperands {
            operator: "+".into(),
            expression: "+".into()
        })
    );
    assert!(matches!(
        evaluate("$(1 mod)", &empty),
        Err(EvalError::InsufficientOperands { .. })
    ));
}

#[test]
fn test_stack_arity() {
    let empty = ConstantTable::new();
    assert_eq!(evaluate("$(1 2 3 + +)", &empty), Ok(Scalar::Int(6)));

    // one operator short
    assert_eq!(
        evaluate("$(1 2 3 +)", &empty),
        Err(EvalError::InvalidExpression {
            expression: "1 2 3 +".into(),
            remaining: 2
        })
    );
    // one operand extra
    assert!(matches!(
        evaluate("$(1 2 3 4 + +)", &empty),
        Err(EvalError::InvalidExpression { remaining: 2, .. })
    ));
    // nothing at all
    assert!(matches!(
        evaluate("$()", &empty),
        Err(EvalError::InvalidExpression { remaining: 0, .. })
    ));
}

#[test]
fn test_unknown_token() {
    let constants = table(&[("a", Value::Integer(1))]);
    assert_eq!(
        evaluate("$(a b +)", &constants),
        Err(EvalError::UnknownToken {
            token: "b".into(),
            expression: "a b +".into()
        })
    );
    assert!(matches!(
        evaluate("$(4 2 /)", &constants),
        Err(EvalError::UnknownToken { .. })
    ));
    assert!(matches!(
        evaluate("$(1. 2 +)", &constants),
        Err(EvalError::UnknownToken { .. })
    ));
}

#[test]
fn test_division_by_zero() {
    let empty = ConstantTable::new();
    assert!(matches!(
        evaluate("$(5 0 mod)", &empty),
        Err(EvalError::DivisionByZero { .. })
    ));
    assert!(matches!(
        evaluate("$(5.0 0 mod)", &empty),
        Err(EvalError::DivisionByZero { .. })
    ));
}

#[test]
fn test_integer_overflow() {
    let empty = ConstantTable::new();
    assert!(matches!(
        evaluate("$(9223372036854775807 1 +)", &empty),
        Err(EvalError::ArithmeticOverflow { .. })
    ));
    assert!(matches!(
        evaluate("$(99999999999999999999 1 +)", &empty),
        Err(EvalError::ArithmeticOverflow { .. })
    ));
}

#[test]
fn test_string_constant() {
    let constants = table(&[("name", Value::String("edge".into()))]);
    assert_eq!(
        evaluate("$(name)", &constants),
        Ok(Scalar::Str("edge".into()))
    );
    assert!(matches!(
        evaluate("$(name 1 +)", &constants),
        Err(EvalError::NonNumericOperand { .. })
    ));
}

#[test]
fn test_constant_shadows_literal_and_operator() {
    let constants = table(&[("max", Value::Integer(4))]);
    assert_eq!(evaluate("$(max 1 +)", &constants), Ok(Scalar::Int(5)));
}

#[test]
fn test_quotes_are_stripped() {
    let empty = ConstantTable::new();
    assert_eq!(evaluate("'$(2 2 *)'", &empty), Ok(Scalar::Int(4)));
    assert_eq!(expression_body("\"$(1 2 +)\""), "1 2 +");
}

#[test]
fn test_deterministic() {
    let constants = table(&[("a", Value::Float(1.25)), ("b", Value::Integer(3))]);
    let first = evaluate("$(a b * b max)", &constants);
    for _ in 0..5 {
        assert_eq!(evaluate("$(a b * b max)", &constants), first);
    }
}
