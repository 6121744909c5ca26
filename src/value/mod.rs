pub mod error;

use std::fmt;

pub use self::error::EvalError;

/// A calculator value.
///
/// An `Expression` owns its cells outright; nothing is shared between
/// parents, so dropping a value releases the whole subtree below it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Number(i64),
    Error(EvalError),
    Symbol(String),
    Expression(Vec<Value>),
}

impl Value {
    pub fn number(x: i64) -> Self {
        Value::Number(x)
    }

    pub fn error(err: EvalError) -> Self {
        Value::Error(err)
    }

    pub fn symbol(name: impl Into<String>) -> Self {
        Value::Symbol(name.into())
    }

    /// An empty S-expression.
    pub fn expression() -> Self {
        Value::Expression(Vec::new())
    }

    /// Appends `child` as the last cell of this expression.
    ///
    /// # Panics
    ///
    /// Panics if `self` is not an `Expression`.
    pub fn append(mut self, child: Value) -> Self {
        match &mut self {
            Value::Expression(cells) => cells.push(child),
            other => panic!("cannot append to non-expression value {other:?}"),
        }
        self
    }

    /// Removes the cell at `index`, shifting the following cells left.
    ///
    /// # Panics
    ///
    /// Panics if `self` is not an `Expression` or `index` is out of range.
    pub fn pop(&mut self, index: usize) -> Value {
        match self {
            Value::Expression(cells) => cells.remove(index),
            other => panic!("cannot pop from non-expression value {other:?}"),
        }
    }

    /// Like [`pop`](Self::pop), but consumes the expression and drops
    /// the cells that were not taken.
    ///
    /// # Panics
    ///
    /// Panics if `self` is not an `Expression` or `index` is out of range.
    pub fn take(mut self, index: usize) -> Value {
        self.pop(index)
    }

    /// The cells of an expression. Leaves have none.
    pub fn cells(&self) -> &[Value] {
        match self {
            Value::Expression(cells) => cells,
            _ => &[],
        }
    }

    /// Consumes the value and returns its cells. Leaves have none.
    pub fn into_cells(self) -> Vec<Value> {
        match self {
            Value::Expression(cells) => cells,
            _ => Vec::new(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }
}

impl From<Result<i64, EvalError>> for Value {
    fn from(result: Result<i64, EvalError>) -> Self {
        match result {
            Ok(n) => Value::Number(n),
            Err(err) => Value::Error(err),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::Error(err) => write!(f, "Error: {err}"),
            Value::Symbol(name) => write!(f, "{name}"),
            Value::Expression(cells) => {
                write!(f, "(")?;
                for (i, cell) in cells.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{cell}")?;
                }
                write!(f, ")")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> Value {
        Value::expression()
            .append(Value::symbol("+"))
            .append(Value::number(1))
            .append(Value::expression().append(Value::number(2)))
    }

    #[test]
    fn append_keeps_order() {
        assert_eq!(
            sample(),
            Value::Expression(vec![
                Value::Symbol("+".to_string()),
                Value::Number(1),
                Value::Expression(vec![Value::Number(2)]),
            ])
        );
    }

    #[test]
    fn pop_shifts_remaining_cells() {
        let mut sexpr = sample();
        assert_eq!(sexpr.pop(1), Value::Number(1));
        assert_eq!(sexpr.cells().len(), 2);
        assert_eq!(sexpr.cells()[0], Value::symbol("+"));
        assert_eq!(sexpr.cells()[1], Value::expression().append(Value::number(2)));
    }

    #[test]
    fn take_returns_single_cell() {
        assert_eq!(sample().take(0), Value::symbol("+"));
    }

    #[test]
    #[should_panic]
    fn pop_out_of_range_panics() {
        Value::expression().pop(0);
    }

    #[test]
    #[should_panic]
    fn append_to_leaf_panics() {
        Value::number(1).append(Value::number(2));
    }

    #[test]
    fn leaves_have_no_cells() {
        assert!(Value::number(3).cells().is_empty());
        assert!(Value::symbol("x").into_cells().is_empty());
    }

    #[test]
    fn display() {
        let cases = [
            (Value::number(-42), "-42"),
            (Value::error(EvalError::DivisionByZero), "Error: division by zero"),
            (Value::symbol("%"), "%"),
            (Value::expression(), "()"),
            (sample(), "(+ 1 (2))"),
        ];

        for (value, expected) in cases {
            assert_eq!(value.to_string(), expected, "Failed for value: {:?}", value);
        }
    }
}
