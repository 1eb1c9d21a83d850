//! Core Sudoku solving engine.
//!
//! The engine exhaustively searches a 9×9 grid with depth-first
//! backtracking, reporting whether zero, exactly one, or more than one
//! solution exists and returning the first solution found. Cell
//! selection is row-major and candidates are tried in ascending order,
//! so the first solution is deterministic.
//!
//! # Example
//!
//! ```
//! use sudosolve_core::{Grid, Solver};
//!
//! let puzzle =
//!     "530070000600195000098000060800060003400803001700020006060000280000419005000080079";
//! let grid = Grid::from_string(puzzle).unwrap();
//!
//! let result = Solver::new().solve(&grid);
//! assert!(result.is_unique());
//! println!("{}", result.first_solution().unwrap());
//! ```

mod grid;
mod solver;

pub use grid::{Grid, ParseError, Position, BOX_SIZE, GRID_SIZE};
pub use solver::{SolveResult, Solver, SolverConfig};
