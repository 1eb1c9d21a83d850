mod batch;

use clap::Parser;
use std::fs;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;

/// Batch Sudoku solver.
///
/// Reads a puzzle count followed by that many 9-line grids (digits
/// 1-9; 0, . or _ for empty cells) and reports for each whether it has
/// no solution, one unique solution, or several.
#[derive(Parser)]
#[command(name = "sudosolve", version, about)]
struct Cli {
    /// Input file with puzzles; reads stdin when omitted.
    input: Option<PathBuf>,

    /// Report exact solution counts instead of stopping at two.
    #[arg(long)]
    exact: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let mut stdout = io::stdout().lock();

    let result = match &cli.input {
        Some(path) => match fs::File::open(path) {
            Ok(file) => batch::run(BufReader::new(file), &mut stdout, cli.exact),
            Err(err) => {
                eprintln!("error: cannot open {}: {}", path.display(), err);
                return ExitCode::FAILURE;
            }
        },
        None => batch::run(io::stdin().lock(), &mut stdout, cli.exact),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
