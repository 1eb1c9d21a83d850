//! The batch puzzle stream: an integer puzzle count on the first line,
//! then that many groups of 9 rows of 9 cells each. Whitespace inside
//! rows and blank lines between groups are ignored.

use std::io::{self, BufRead, Write};

use sudosolve_core::{Grid, ParseError, SolveResult, Solver, SolverConfig, GRID_SIZE};

/// Errors from reading a puzzle stream.
#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("input is empty, expected a puzzle count")]
    MissingPuzzleCount,
    #[error("invalid puzzle count '{0}'")]
    InvalidPuzzleCount(String),
    #[error("input ended while reading puzzle {puzzle}")]
    UnexpectedEof { puzzle: usize },
    #[error("puzzle {puzzle}: {source}")]
    Parse { puzzle: usize, source: ParseError },
    #[error("unexpected input after the last puzzle: '{0}'")]
    TrailingInput(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Solve every puzzle in the stream, writing one report per puzzle.
pub fn run<R: BufRead, W: Write>(input: R, output: &mut W, exact: bool) -> Result<(), BatchError> {
    let mut lines = input
        .lines()
        .filter(|line| line.as_ref().map_or(true, |l| !l.trim().is_empty()));

    let count_line = lines.next().ok_or(BatchError::MissingPuzzleCount)??;
    let puzzle_count: usize = count_line
        .trim()
        .parse()
        .map_err(|_| BatchError::InvalidPuzzleCount(count_line.trim().to_string()))?;

    let solver = if exact {
        Solver::with_config(SolverConfig {
            solution_limit: usize::MAX,
        })
    } else {
        Solver::new()
    };

    for puzzle in 1..=puzzle_count {
        let mut rows = Vec::with_capacity(GRID_SIZE);
        for _ in 0..GRID_SIZE {
            let row = lines
                .next()
                .ok_or(BatchError::UnexpectedEof { puzzle })??;
            rows.push(row);
        }
        let grid =
            Grid::from_rows(&rows).map_err(|source| BatchError::Parse { puzzle, source })?;

        let result = solver.solve(&grid);
        writeln!(output)?;
        writeln!(output, "Puzzle {}:", puzzle)?;
        report(output, &result, exact)?;
    }

    if let Some(line) = lines.next() {
        return Err(BatchError::TrailingInput(line?.trim().to_string()));
    }
    Ok(())
}

fn report<W: Write>(output: &mut W, result: &SolveResult, exact: bool) -> io::Result<()> {
    match result.count() {
        0 => writeln!(output, "There are no possible solutions."),
        1 => {
            writeln!(output, "There is one unique solution:")?;
            write!(output, "{}", result.first_solution().expect("one solution"))
        }
        count if exact => writeln!(output, "There are {} possible solutions", count),
        _ => writeln!(output, "There are at least 2 possible solutions"),
    }
}
