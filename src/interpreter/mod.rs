pub mod error;
pub mod repl;

// Re-export main types and functions
pub use self::error::InterpreterError;
pub use self::repl::{Interpreter, Reply, ReplConfig, run_interpreter};
