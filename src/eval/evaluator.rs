use log::trace;

use super::builtin;
use crate::value::{EvalError, Value};

/// Reduces `value` to a single result.
///
/// Leaves evaluate to themselves. An expression evaluates its cells left
/// to right, stopping at the first error, then applies its leading symbol
/// to the remaining cells.
pub fn eval(value: Value) -> Value {
    match value {
        Value::Expression(cells) => eval_sexpr(cells),
        other => other,
    }
}

fn eval_sexpr(cells: Vec<Value>) -> Value {
    let mut sexpr = Value::expression();
    for cell in cells {
        let cell = eval(cell);
        if cell.is_error() {
            trace!("short-circuit on {cell}");
            return cell;
        }
        sexpr = sexpr.append(cell);
    }

    match sexpr.cells().len() {
        0 => sexpr,
        1 => sexpr.take(0),
        _ => match sexpr.pop(0) {
            Value::Symbol(op) => {
                trace!("apply '{op}' to {sexpr}");
                builtin::apply(&op, sexpr)
            }
            head => {
                trace!("expression starts with {head}");
                Value::error(EvalError::NotASymbol)
            }
        },
    }
}
