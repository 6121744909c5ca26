use std::process::ExitCode;

use env_logger::{Builder, Env};
use log::LevelFilter;

fn main() -> ExitCode {
    Builder::from_env(Env::default().default_filter_or("warn"))
        .filter_module("rustyline", LevelFilter::Warn)
        .init();

    match junior::interpreter::run_interpreter() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
