pub mod builtin;
pub mod evaluator;

// Re-export main types and functions
pub use self::builtin::{Builtin, apply};
pub use self::evaluator::eval;
