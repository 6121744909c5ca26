use thiserror::Error;

/// The kinds of failure an evaluation can produce.
///
/// These never escape as Rust errors: they travel through the evaluator
/// wrapped in [`Value::Error`](crate::Value::Error) like any other result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error("invalid number")]
    InvalidNumber,

    #[error("division by zero")]
    DivisionByZero,

    #[error("modulus by zero")]
    ModulusByZero,

    #[error("cannot operate on a non-number")]
    NotANumber,

    #[error("bad operator '{0}'")]
    BadOperator(String),

    #[error("S-expression does not start with a symbol")]
    NotASymbol,

    #[error("'{0}' requires at least one operand")]
    MissingOperands(String),

    #[error("integer overflow")]
    Overflow,

    #[error("unexpected syntax element: {0}")]
    UnexpectedNode(String),
}
