pub mod error;
pub mod parser;
pub mod reader;

// Re-export main types and functions
pub use self::error::ParserError;
pub use self::parser::{JuniorParser, Rule, format_tree, parse_line};
pub use self::reader::read;
