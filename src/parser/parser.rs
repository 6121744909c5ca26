use pest::Parser;
use pest::iterators::Pair;
use pest_derive::Parser;

use super::error::{ParserError, Result};

#[derive(Parser)]
#[grammar = "grammar.pest"]
pub struct JuniorParser;

/// Parses one line of input and returns the root node of its parse tree.
pub fn parse_line(input: &str) -> Result<Pair<'_, Rule>> {
    let mut pairs = JuniorParser::parse(Rule::junior, input)?;
    pairs.next().ok_or(ParserError::MissingRoot)
}

/// Renders a parse tree one node per line, indented by depth.
pub fn format_tree(pair: &Pair<'_, Rule>) -> String {
    let mut output = String::new();
    format_node(pair, 0, &mut output);
    output
}

fn format_node(pair: &Pair<'_, Rule>, depth: usize, output: &mut String) {
    output.push_str(&"  ".repeat(depth));
    output.push_str(&format!("{:?}", pair.as_rule()));

    let mut children = pair.clone().into_inner().peekable();
    if children.peek().is_none() {
        output.push_str(&format!(" '{}'", pair.as_str()));
    }
    output.push('\n');

    for child in children {
        format_node(&child, depth + 1, output);
    }
}
