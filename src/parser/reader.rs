use log::trace;
use pest::iterators::Pair;

use super::parser::Rule;
use crate::value::{EvalError, Value};

/// Converts a parse-tree node into a value.
///
/// Never fails: malformed numbers and nodes that do not start a value read
/// as [`Value::Error`].
pub fn read(pair: Pair<'_, Rule>) -> Value {
    match pair.as_rule() {
        Rule::number => read_number(pair.as_str()),
        Rule::symbol => Value::symbol(pair.as_str()),
        Rule::junior | Rule::sexpr => {
            let mut sexpr = Value::expression();
            for child in pair.into_inner() {
                match child.as_rule() {
                    Rule::open | Rule::close | Rule::EOI => continue,
                    _ => sexpr = sexpr.append(read(child)),
                }
            }
            sexpr
        }
        rule => {
            trace!("cannot read {rule:?} node '{}'", pair.as_str());
            Value::error(EvalError::UnexpectedNode(format!("{rule:?}")))
        }
    }
}

fn read_number(text: &str) -> Value {
    match text.parse::<i64>() {
        Ok(n) => Value::number(n),
        Err(err) => {
            trace!("invalid number '{text}': {err}");
            Value::error(EvalError::InvalidNumber)
        }
    }
}
