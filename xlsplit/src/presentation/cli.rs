use clap::{ArgAction, Parser, Subcommand};
use xlsplit_core::PREVIEW_ROWS;

#[derive(Parser, Debug)]
#[command(author, version, about = "xlsplit: split a spreadsheet into parts of at most N rows", long_about = None)]
pub struct Cli {
    /// Raise log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

// Inputs stay raw strings so missing or malformed values are reported as
// validation errors (exit 1) by the core instead of by the parser.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Split the first worksheet into `<base>_parte_<i>.xlsx` files
    Split {
        /// spreadsheet to split (.xlsx, .xlsm, .xlsb, .xls, .ods)
        #[arg(long)]
        source: Option<String>,

        /// existing directory receiving the parts
        #[arg(long = "output-dir")]
        output_dir: Option<String>,

        /// maximum data rows per part, header excluded
        #[arg(
            long = "rows-per-file",
            env = "XLSPLIT_ROWS_PER_FILE",
            allow_hyphen_values = true
        )]
        rows_per_file: Option<String>,

        /// print the result as JSON on stdout
        #[arg(long)]
        json: bool,
    },

    /// Print the header and first rows of a spreadsheet
    Preview {
        #[arg(long)]
        source: Option<String>,

        #[arg(long, default_value_t = PREVIEW_ROWS)]
        rows: usize,
    },
}
