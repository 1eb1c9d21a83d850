use crate::grid::{Grid, Position, GRID_SIZE};
use serde::{Deserialize, Serialize};

/// Outcome of a [`Solver::solve`] call.
///
/// `count` saturates at the solver's configured solution limit, so with
/// the default configuration it is one of 0, 1 or 2, where 2 means "at
/// least two". The first solution is the one reached first under
/// row-major cell order and ascending digit order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveResult {
    count: usize,
    first_solution: Option<Grid>,
}

impl SolveResult {
    /// Number of solutions found, capped at the solution limit.
    pub fn count(&self) -> usize {
        self.count
    }

    /// The first solution found, if any.
    pub fn first_solution(&self) -> Option<&Grid> {
        self.first_solution.as_ref()
    }

    /// Consume the result, returning the first solution found.
    pub fn into_first_solution(self) -> Option<Grid> {
        self.first_solution
    }

    /// Whether exactly one solution was found.
    pub fn is_unique(&self) -> bool {
        self.count == 1
    }
}

/// Configuration for the solver.
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Stop searching once this many solutions have been found.
    /// The default of 2 distinguishes zero, one and "more than one"
    /// without enumerating further; `usize::MAX` counts every solution.
    pub solution_limit: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self { solution_limit: 2 }
    }
}

/// Exhaustive backtracking Sudoku solver.
///
/// The solver never mutates the caller's grid; each call works on its
/// own copy, and no state survives between calls.
pub struct Solver {
    config: SolverConfig,
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver {
    /// Create a new solver with default configuration.
    pub fn new() -> Self {
        Self {
            config: SolverConfig::default(),
        }
    }

    /// Create a solver with custom configuration.
    pub fn with_config(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Search the grid's empty cells for assignments satisfying the
    /// row, column and box uniqueness constraints.
    ///
    /// A grid whose pre-filled cells already conflict is not an error;
    /// the search simply finds no solutions. A grid with no empty
    /// cells counts as its own single solution.
    pub fn solve(&self, grid: &Grid) -> SolveResult {
        let mut working = grid.clone();
        let mut search = Search::new(&working, self.config.solution_limit.max(1));
        search.explore(&mut working);
        SolveResult {
            count: search.count,
            first_solution: search.first,
        }
    }

    /// Count solutions up to a limit.
    pub fn count_solutions(&self, grid: &Grid, limit: usize) -> usize {
        let mut working = grid.clone();
        let mut search = Search::new(&working, limit.max(1));
        search.explore(&mut working);
        search.count
    }

    /// Whether the puzzle has exactly one solution.
    pub fn has_unique_solution(&self, grid: &Grid) -> bool {
        self.count_solutions(grid, 2) == 1
    }
}

/// Per-call search state: solution bookkeeping plus digit occupancy
/// masks for every row, column and box. Bit `d - 1` of a mask is set
/// when digit `d` is already placed somewhere in that unit, making the
/// validity check for a candidate a pair of shifts instead of a scan.
struct Search {
    limit: usize,
    count: usize,
    first: Option<Grid>,
    rows: [u16; GRID_SIZE],
    cols: [u16; GRID_SIZE],
    boxes: [u16; GRID_SIZE],
}

impl Search {
    fn new(grid: &Grid, limit: usize) -> Self {
        let mut search = Self {
            limit,
            count: 0,
            first: None,
            rows: [0; GRID_SIZE],
            cols: [0; GRID_SIZE],
            boxes: [0; GRID_SIZE],
        };
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let pos = Position::new(row, col);
                if let Some(digit) = grid.get(pos) {
                    search.place(pos, digit);
                }
            }
        }
        search
    }

    fn place(&mut self, pos: Position, digit: u8) {
        let bit = 1u16 << (digit - 1);
        self.rows[pos.row] |= bit;
        self.cols[pos.col] |= bit;
        self.boxes[pos.box_index()] |= bit;
    }

    fn unplace(&mut self, pos: Position, digit: u8) {
        let bit = 1u16 << (digit - 1);
        self.rows[pos.row] &= !bit;
        self.cols[pos.col] &= !bit;
        self.boxes[pos.box_index()] &= !bit;
    }

    fn is_open(&self, pos: Position, digit: u8) -> bool {
        let bit = 1u16 << (digit - 1);
        (self.rows[pos.row] | self.cols[pos.col] | self.boxes[pos.box_index()]) & bit == 0
    }

    /// Depth-first search over the grid's empty cells. Returns `true`
    /// once the solution limit is reached and the caller should stop
    /// unwinding without trying further candidates.
    fn explore(&mut self, grid: &mut Grid) -> bool {
        let pos = match grid.first_empty() {
            Some(pos) => pos,
            None => {
                if self.count == 0 {
                    self.first = Some(grid.clone());
                }
                self.count += 1;
                return self.count >= self.limit;
            }
        };

        for digit in 1..=9 {
            if !self.is_open(pos, digit) {
                continue;
            }
            grid.set(pos, Some(digit));
            self.place(pos, digit);
            let done = self.explore(grid);
            grid.set(pos, None);
            self.unplace(pos, digit);
            if done {
                return true;
            }
        }
        false
    }
}
