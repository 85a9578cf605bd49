mod cli;
mod error;
mod input;
mod logging;
mod mapper;
mod report;
mod types;

use crate::error::ConvertError;
use clap::Parser;
use std::io::Write;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn run() -> Result<i32, ConvertError> {
    let cli = cli::Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    if !cli.ignored().is_empty() {
        tracing::debug!(count = cli.ignored().len(), "ignoring extra arguments");
    }

    let Some(path) = cli.input() else {
        println!("{}", report::EMPTY_OUTPUT);
        return Ok(exit_code::SUCCESS);
    };

    let doc = input::load(&path)?;
    let findings = mapper::map_all(&doc);
    let rendered = report::render(&findings)?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{rendered}")?;
    stdout.flush()?;

    tracing::info!(results = findings.len(), "wrote sarif document");
    Ok(exit_code::SUCCESS)
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
