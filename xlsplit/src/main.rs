mod application;
mod logging;
mod presentation;

use clap::Parser;
use presentation::cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Usage errors share exit code 1 with validation errors; 2 and 3 are
    // reserved for read and write failures.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            };
        }
    };
    logging::init(cli.verbose);

    match application::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error ({}): {e}", e.category());
            ExitCode::from(e.exit_code())
        }
    }
}
