use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use library::{ConversionStatistics, PlyStlConverter};
use log::debug;
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

const PROGRAM_NAME: &str = "ply2stl";

const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Parser, Debug)]
#[command(name = PROGRAM_NAME, about = "Converts a PLY mesh into a binary STL file")]
struct Arguments {
    #[arg(allow_hyphen_values = true)]
    input: PathBuf,
    #[arg(allow_hyphen_values = true)]
    output: PathBuf,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or(DEFAULT_LOG_FILTER)).init();

    let arguments = match Arguments::try_parse() {
        Ok(arguments) => arguments,
        Err(error) => {
            debug!("argument parsing failed: {}", error);
            println!("Usage: {} <input.ply> <output.stl>", program_name());
            return ExitCode::FAILURE;
        }
    };

    match run(&arguments) {
        Ok(_) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {:#}", error);
            ExitCode::FAILURE
        }
    }
}

fn run(arguments: &Arguments) -> anyhow::Result<ConversionStatistics> {
    PlyStlConverter::new(&arguments.input, &arguments.output)
        .convert()
        .with_context(|| format!("failed to convert {} into {}", arguments.input.display(), arguments.output.display()))
}

#[must_use]
fn program_name() -> String {
    env::args().next().unwrap_or_else(|| PROGRAM_NAME.to_string())
}
