use log::debug;

use crate::value::{EvalError, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
}

impl Builtin {
    pub fn from_symbol(name: &str) -> Option<Self> {
        match name {
            "+" => Some(Builtin::Add),
            "-" => Some(Builtin::Subtract),
            "*" => Some(Builtin::Multiply),
            "/" => Some(Builtin::Divide),
            "%" => Some(Builtin::Modulo),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Builtin::Add => "+",
            Builtin::Subtract => "-",
            Builtin::Multiply => "*",
            Builtin::Divide => "/",
            Builtin::Modulo => "%",
        }
    }

    /// Folds `operands` left to right. A lone operand of `-` is negated.
    pub fn reduce(self, operands: &[i64]) -> Result<i64, EvalError> {
        let (&first, rest) = operands
            .split_first()
            .ok_or_else(|| EvalError::MissingOperands(self.symbol().to_string()))?;

        if self == Builtin::Subtract && rest.is_empty() {
            return first.checked_neg().ok_or(EvalError::Overflow);
        }

        rest.iter().try_fold(first, |acc, &rhs| self.combine(acc, rhs))
    }

    fn combine(self, lhs: i64, rhs: i64) -> Result<i64, EvalError> {
        let result = match self {
            Builtin::Add => lhs.checked_add(rhs),
            Builtin::Subtract => lhs.checked_sub(rhs),
            Builtin::Multiply => lhs.checked_mul(rhs),
            Builtin::Divide => {
                if rhs == 0 {
                    return Err(EvalError::DivisionByZero);
                }
                lhs.checked_div(rhs)
            }
            Builtin::Modulo => {
                if rhs == 0 {
                    return Err(EvalError::ModulusByZero);
                }
                lhs.checked_rem(rhs)
            }
        };
        result.ok_or(EvalError::Overflow)
    }
}

/// Applies the builtin named `op` to the cells of `operands`.
///
/// Every operand must be a number; that is checked before the operator
/// name is resolved.
pub fn apply(op: &str, operands: Value) -> Value {
    let numbers: Option<Vec<i64>> = operands
        .into_cells()
        .into_iter()
        .map(|cell| match cell {
            Value::Number(n) => Some(n),
            _ => None,
        })
        .collect();

    let Some(numbers) = numbers else {
        debug!("'{op}' applied to a non-number operand");
        return Value::error(EvalError::NotANumber);
    };

    match Builtin::from_symbol(op) {
        Some(builtin) => Value::from(builtin.reduce(&numbers)),
        None => {
            debug!("unknown operator '{op}'");
            Value::error(EvalError::BadOperator(op.to_string()))
        }
    }
}
