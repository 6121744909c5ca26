pub mod eval;
pub mod interpreter;
pub mod parser;
pub mod value;

// Re-export main types for convenient usage
pub use eval::{Builtin, apply, eval};
pub use interpreter::{Interpreter, InterpreterError, ReplConfig};
pub use parser::{JuniorParser, ParserError, Rule, parse_line, read};
pub use value::{EvalError, Value};
