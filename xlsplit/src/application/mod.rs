pub mod handlers;

use crate::presentation::cli::{Cli, Commands};
use xlsplit_core::Result;

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Split {
            source,
            output_dir,
            rows_per_file,
            json,
        } => handlers::handle_split(source, output_dir, rows_per_file, json),
        Commands::Preview { source, rows } => handlers::handle_preview(source, rows),
    }
}
