//! CLI tool to select tab-delimited fields from files or standard input.
//!
//! Usage:
//!   tabcut -f 1 3 -- people.tsv
//!   tabcut people.tsv -f 1,3
//!   cat people.tsv | tabcut --fields 2 2

use clap::Parser;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process;
use tabcut::{FieldSelection, Inputs, execute};

/// Print selected tab-delimited fields of each input line.
///
/// Fields are written in the order given and may repeat. A line with too
/// few fields stops the run with an error.
#[derive(Parser)]
#[command(name = "tabcut", version)]
struct Cli {
    /// Field positions to print (1-based)
    #[arg(
        short,
        long,
        required = true,
        num_args = 1..,
        value_delimiter = ',',
        allow_negative_numbers = true
    )]
    fields: Vec<i64>,

    /// Input files, read in order (default: stdin; `-` also means stdin)
    files: Vec<PathBuf>,

    /// Show sources and line counts on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let selection = match FieldSelection::from_positions(&cli.fields) {
        Ok(selection) => selection,
        Err(e) => {
            eprintln!("tabcut: {e}");
            process::exit(1);
        }
    };

    let mut inputs = Inputs::from_args(&cli.files);
    let mut output = BufWriter::new(io::stdout().lock());

    let result = execute(&selection, &mut inputs, &mut output);

    if cli.verbose {
        eprintln!("Fields:  {:?}", cli.fields);
        eprintln!("Inputs:  {}", inputs.opened().join(", "));
    }

    match result {
        Ok(summary) => {
            if cli.verbose {
                eprintln!(
                    "Lines:   {} in -> {} out",
                    summary.lines_read, summary.lines_written
                );
            }
        }
        Err(e) => {
            eprintln!("tabcut: {e}");
            process::exit(1);
        }
    }
}
