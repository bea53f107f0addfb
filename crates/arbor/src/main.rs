use std::process::ExitCode;

use arbor::cli::{self, Cli};
use arbor::logging;
use clap::Parser;

fn main() -> ExitCode {
    let args = Cli::parse();
    logging::init(args.log_level());

    match cli::run(&args).and_then(|outcome| cli::summary(&args, &outcome)) {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
