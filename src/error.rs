// License: MIT

use thiserror::Error;

/// Failures raised while evaluating a postfix expression.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    #[error("Insufficient operands for '{operator}' in `{expression}`")]
    InsufficientOperands { operator: String, expression: String },

    #[error("Unknown token '{token}' in `{expression}`")]
    UnknownToken { token: String, expression: String },

    #[error("Invalid expression `{expression}`: {remaining} values left on the stack")]
    InvalidExpression { expression: String, remaining: usize },

    #[error("Division by zero in `{expression}`")]
    DivisionByZero { expression: String },

    #[error("Arithmetic overflow applying '{operator}' in `{expression}`")]
    ArithmeticOverflow { operator: String, expression: String },

    #[error("Operator '{operator}' cannot be applied to string constant in `{expression}`")]
    NonNumericOperand { operator: String, expression: String },
}

/// The main error type for document conversion.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConvertError {
    #[error("[DSL] Invalid name: '{0}'")]
    InvalidName(String),

    #[error("[DSL] Unsupported value type: {0}")]
    UnsupportedValueType(String),

    #[error("[DSL] Invalid value for constant '{name}': {found}")]
    InvalidConstantType { name: String, found: String },

    #[error("[DSL] The '{key}' section must be a mapping, got {found}")]
    InvalidDefineSection { key: String, found: String },

    #[error("[DSL] {0}")]
    Eval(#[from] EvalError),

    #[error("[DSL] Failed to read '{path}': {message}")]
    SourceReadFailure { path: String, message: String },

    #[error("[DSL] Failed to parse source document: {0}")]
    SourceParseFailure(String),

    #[error("[DSL] Failed to write '{path}': {message}")]
    OutputWriteFailure { path: String, message: String },
}

impl ConvertError {
    /// Stable numeric code, grouped by stage: 1xx names and values,
    /// 2xx expressions, 3xx source and output files.
    pub fn code(&self) -> u32 {
        match self {
            ConvertError::InvalidName(_) => 101,
            ConvertError::UnsupportedValueType(_) => 102,
            ConvertError::InvalidConstantType { .. } => 103,
            ConvertError::InvalidDefineSection { .. } => 104,
            ConvertError::Eval(e) => match e {
                EvalError::InsufficientOperands { .. } => 201,
                EvalError::UnknownToken { .. } => 202,
                EvalError::InvalidExpression { .. } => 203,
                EvalError::DivisionByZero { .. } => 204,
                EvalError::ArithmeticOverflow { .. } => 205,
                EvalError::NonNumericOperand { .. } => 206,
            },
            ConvertError::SourceReadFailure { .. } => 301,
            ConvertError::SourceParseFailure(_) => 302,
            ConvertError::OutputWriteFailure { .. } => 303,
        }
    }

    pub fn hint(&self) -> Option<&'static str> {
        match self {
            ConvertError::InvalidName(_) => {
                Some("Names start with a letter or '_' followed by letters, digits or '_'")
            }
            ConvertError::UnsupportedValueType(_) => {
                Some("Use strings, numbers, lists or mappings")
            }
            ConvertError::InvalidConstantType { .. } => {
                Some("Constants must be a string, integer or float")
            }
            ConvertError::InvalidDefineSection { .. } => {
                Some("Declare constants as `name: value` pairs")
            }
            ConvertError::Eval(EvalError::UnknownToken { .. }) => {
                Some("Tokens are constants, numbers, or one of + - * mod max")
            }
            ConvertError::Eval(EvalError::InsufficientOperands { .. })
            | ConvertError::Eval(EvalError::InvalidExpression { .. }) => {
                Some("Expressions are postfix: operands first, then the operator")
            }
            ConvertError::SourceReadFailure { .. } => {
                Some("Check that the file exists and is readable")
            }
            _ => None,
        }
    }
}
