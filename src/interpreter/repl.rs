use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use super::error::{InterpreterError, Result};
use crate::eval::eval;
use crate::parser::{self, format_tree, parse_line, read};
use crate::value::Value;

#[derive(Debug, Clone)]
pub struct ReplConfig {
    pub prompt: String,
    pub show_banner: bool,
    pub history_file: Option<PathBuf>,
    pub show_tree: bool,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: ">> ".to_string(),
            show_banner: true,
            history_file: None,
            show_tree: false,
        }
    }
}

/// What the loop should do after a line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Silent,
    Print(String),
    Exit,
}

pub struct Interpreter {
    config: ReplConfig,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter {
    pub fn new() -> Self {
        Self::with_config(ReplConfig::default())
    }

    pub fn with_config(config: ReplConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ReplConfig {
        &self.config
    }

    /// Parses, reads and evaluates one line.
    pub fn eval_line(&self, input: &str) -> parser::error::Result<Value> {
        let root = parse_line(input)?;
        Ok(eval(read(root)))
    }

    /// Evaluates every non-blank line of `source`, pairing each with its result.
    pub fn eval_source(&self, source: &str) -> Vec<String> {
        source
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| match self.eval_line(line) {
                Ok(value) => format!("{line} => {value}"),
                Err(err) => format!("{line} => {err}"),
            })
            .collect()
    }

    pub fn run_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| InterpreterError::File {
            path: path.to_path_buf(),
            source,
        })?;

        for line in self.eval_source(&source) {
            println!("{line}");
        }
        Ok(())
    }

    /// Handles one line typed at the prompt.
    pub fn respond(&mut self, line: &str) -> Reply {
        let input = line.trim();

        match input {
            "" => Reply::Silent,
            "exit" | "quit" => Reply::Exit,
            "help" => Reply::Print(help_text()),
            "tree" => {
                self.config.show_tree = !self.config.show_tree;
                Reply::Print(format!(
                    "Parse tree display {}",
                    if self.config.show_tree {
                        "enabled"
                    } else {
                        "disabled"
                    }
                ))
            }
            _ => match parse_line(input) {
                Ok(root) => {
                    let mut output = String::new();
                    if self.config.show_tree {
                        output.push_str(&format_tree(&root));
                    }
                    let value = eval(read(root));
                    debug!("{input} => {value:?}");
                    output.push_str(&value.to_string());
                    Reply::Print(output)
                }
                Err(err) => Reply::Print(err.to_string()),
            },
        }
    }

    fn print_banner(&self) {
        if self.config.show_banner {
            println!("\n\tJunior- Version {}\n", env!("CARGO_PKG_VERSION"));
            println!("Press ctrl+C to Exit\n");
        }
    }

    #[cfg(feature = "cli")]
    pub fn run_repl(&mut self) -> Result<()> {
        use rustyline::Editor;
        use rustyline::error::ReadlineError;

        self.print_banner();

        let mut editor = Editor::<()>::new();
        if let Some(path) = &self.config.history_file {
            if let Err(err) = editor.load_history(path) {
                debug!("No history loaded from '{}': {}", path.display(), err);
            }
        }

        loop {
            match editor.readline(&self.config.prompt) {
                Ok(line) => {
                    editor.add_history_entry(line.as_str());
                    match self.respond(&line) {
                        Reply::Silent => {}
                        Reply::Print(output) => println!("{output}"),
                        Reply::Exit => break,
                    }
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
                Err(err) => return Err(err.into()),
            }
        }

        if let Some(path) = &self.config.history_file {
            if let Err(err) = editor.save_history(path) {
                log::warn!("Failed to save history to '{}': {}", path.display(), err);
            }
        }
        Ok(())
    }

    #[cfg(not(feature = "cli"))]
    pub fn run_repl(&mut self) -> Result<()> {
        use std::io::{self, BufRead, Write};

        self.print_banner();

        let stdin = io::stdin();
        let mut stdout = io::stdout();

        loop {
            print!("{}", self.config.prompt);
            stdout.flush()?;

            let mut line = String::new();
            if stdin.lock().read_line(&mut line)? == 0 {
                break;
            }

            match self.respond(&line) {
                Reply::Silent => {}
                Reply::Print(output) => println!("{output}"),
                Reply::Exit => break,
            }
        }
        Ok(())
    }
}

fn help_text() -> String {
    [
        "Available commands:",
        "  help     - Display this help message",
        "  exit     - Exit the REPL",
        "  quit     - Same as exit",
        "  tree     - Toggle parse tree display",
        "  <expr>   - Evaluate an expression, e.g. + 1 (* 2 3)",
        "Operators: + - * / %",
    ]
    .join("\n")
}

fn usage(program: &str) {
    let name = Path::new(program)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "junior".to_string());
    println!("usage: {name} [SRC_FILE]");
    println!();
}

/// Runs the interpreter with command line arguments
pub fn run_interpreter() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    match args.len() {
        0 | 1 => Interpreter::new().run_repl(),
        2 => Interpreter::new().run_file(&args[1]),
        n => {
            usage(&args[0]);
            Err(InterpreterError::Usage(n - 1))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn print(output: &str) -> Reply {
        Reply::Print(output.to_string())
    }

    #[test]
    fn evaluates_lines() {
        let mut interpreter = Interpreter::new();
        let cases = [
            ("+ 1 2", "3"),
            ("(* 2 (+ 1 2))", "6"),
            ("/ 7 0", "Error: division by zero"),
            ("", ""),
        ];

        for (input, expected) in cases {
            let reply = interpreter.respond(input);
            if expected.is_empty() {
                assert_eq!(reply, Reply::Silent);
            } else {
                assert_eq!(reply, print(expected), "Failed for input: {}", input);
            }
        }
    }

    #[test]
    fn exit_commands() {
        let mut interpreter = Interpreter::new();
        assert_eq!(interpreter.respond("exit"), Reply::Exit);
        assert_eq!(interpreter.respond("  quit "), Reply::Exit);
    }

    #[test]
    fn tree_toggle_prefixes_parse_tree() {
        let mut interpreter = Interpreter::new();
        assert_eq!(interpreter.respond("tree"), print("Parse tree display enabled"));
        assert!(interpreter.config().show_tree);
        assert_eq!(
            interpreter.respond("7"),
            print("junior\n  number '7'\n  EOI ''\n7")
        );
        assert_eq!(interpreter.respond("tree"), print("Parse tree display disabled"));
        assert_eq!(interpreter.respond("7"), print("7"));
    }

    #[test]
    fn syntax_error_is_reported() {
        let mut interpreter = Interpreter::new();
        match interpreter.respond("(+ 1") {
            Reply::Print(output) => assert!(output.starts_with("Syntax error:")),
            other => panic!("unexpected reply {other:?}"),
        }
    }

    #[test]
    fn help_lists_commands() {
        let mut interpreter = Interpreter::new();
        match interpreter.respond("help") {
            Reply::Print(output) => {
                assert!(output.contains("exit"));
                assert!(output.contains("tree"));
            }
            other => panic!("unexpected reply {other:?}"),
        }
    }

    #[test]
    fn eval_source_skips_blank_lines() {
        let interpreter = Interpreter::new();
        assert_eq!(
            interpreter.eval_source("+ 1 2\n\n   \n- 4\n"),
            vec!["+ 1 2 => 3".to_string(), "- 4 => -4".to_string()]
        );
    }

    #[test]
    fn missing_file_is_an_error() {
        let interpreter = Interpreter::new();
        let err = interpreter
            .run_file("/nonexistent/junior/input.jr")
            .unwrap_err();
        assert!(matches!(err, InterpreterError::File { .. }));
    }
}
