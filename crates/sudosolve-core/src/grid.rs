use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of rows and columns in a grid.
pub const GRID_SIZE: usize = 9;

/// Edge length of a 3×3 box.
pub const BOX_SIZE: usize = 3;

/// A cell coordinate, with `row` and `col` both in `0..9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a position. Panics in debug builds if out of range.
    pub fn new(row: usize, col: usize) -> Self {
        debug_assert!(row < GRID_SIZE && col < GRID_SIZE);
        Self { row, col }
    }

    /// Index of the 3×3 box containing this position, `0..9`,
    /// numbered left to right, top to bottom.
    pub fn box_index(&self) -> usize {
        (self.row / BOX_SIZE) * BOX_SIZE + self.col / BOX_SIZE
    }
}

/// Errors from the textual grid constructors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Line format input did not contain exactly 81 cells.
    #[error("expected 81 cells, found {0}")]
    WrongCellCount(usize),
    /// Row format input did not contain exactly 9 rows.
    #[error("expected 9 rows, found {0}")]
    WrongRowCount(usize),
    /// A row did not contain exactly 9 cells after whitespace removal.
    #[error("row {row} has {len} cells instead of 9")]
    WrongRowLength { row: usize, len: usize },
    /// A cell character outside `1-9`, `0`, `.` and `_`.
    /// `cell` is the cell index `0..81` in row-major order.
    #[error("cell {cell} contains invalid character '{ch}'")]
    InvalidCell { cell: usize, ch: char },
}

/// A 9×9 Sudoku grid.
///
/// Each cell is either `Some(digit)` with the digit in `1..=9`, or
/// `None` for an empty cell. The shape is fixed by the type; the
/// textual constructors reject any input that is not exactly 9×9.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    cells: [[Option<u8>; GRID_SIZE]; GRID_SIZE],
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// Create an entirely empty grid.
    pub fn new() -> Self {
        Self {
            cells: [[None; GRID_SIZE]; GRID_SIZE],
        }
    }

    /// Parse a grid from line format: 81 cell characters in row-major
    /// order, where `1-9` are digits and `0`, `.` or `_` mark empty
    /// cells. Whitespace is ignored.
    pub fn from_string(input: &str) -> Result<Self, ParseError> {
        let mut grid = Self::new();
        let mut cell = 0;

        for ch in input.chars().filter(|ch| !ch.is_whitespace()) {
            // Keep counting past 81 so the error reports the real size.
            if cell < GRID_SIZE * GRID_SIZE {
                let pos = Position::new(cell / GRID_SIZE, cell % GRID_SIZE);
                grid.cells[pos.row][pos.col] = parse_cell(cell, ch)?;
            }
            cell += 1;
        }

        if cell != GRID_SIZE * GRID_SIZE {
            return Err(ParseError::WrongCellCount(cell));
        }
        Ok(grid)
    }

    /// Parse a grid from 9 textual rows of 9 cell characters each,
    /// using the same cell alphabet as [`Grid::from_string`].
    /// Whitespace inside a row is stripped before checking its length.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, ParseError> {
        if rows.len() != GRID_SIZE {
            return Err(ParseError::WrongRowCount(rows.len()));
        }

        let mut grid = Self::new();
        for (row, line) in rows.iter().enumerate() {
            let chars: Vec<char> = line
                .as_ref()
                .chars()
                .filter(|ch| !ch.is_whitespace())
                .collect();
            if chars.len() != GRID_SIZE {
                return Err(ParseError::WrongRowLength {
                    row,
                    len: chars.len(),
                });
            }
            for (col, &ch) in chars.iter().enumerate() {
                grid.cells[row][col] = parse_cell(row * GRID_SIZE + col, ch)?;
            }
        }
        Ok(grid)
    }

    /// Value at a position.
    pub fn get(&self, pos: Position) -> Option<u8> {
        self.cells[pos.row][pos.col]
    }

    /// Set or clear the value at a position.
    /// Panics in debug builds if the digit is outside `1..=9`.
    pub fn set(&mut self, pos: Position, value: Option<u8>) {
        debug_assert!(value.map_or(true, |d| (1..=9).contains(&d)));
        self.cells[pos.row][pos.col] = value;
    }

    /// First empty cell in row-major order, if any.
    pub fn first_empty(&self) -> Option<Position> {
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                if self.cells[row][col].is_none() {
                    return Some(Position::new(row, col));
                }
            }
        }
        None
    }

    /// Whether every cell holds a digit.
    pub fn is_complete(&self) -> bool {
        self.first_empty().is_none()
    }

    /// Number of empty cells.
    pub fn empty_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| cell.is_none())
            .count()
    }

    /// Number of filled cells.
    pub fn filled_count(&self) -> usize {
        GRID_SIZE * GRID_SIZE - self.empty_count()
    }

    /// Whether `digit` may be placed at `pos` without duplicating a
    /// digit already present in the same row, column or box. The cell
    /// at `pos` itself is ignored.
    pub fn is_valid_placement(&self, pos: Position, digit: u8) -> bool {
        for i in 0..GRID_SIZE {
            if i != pos.col && self.cells[pos.row][i] == Some(digit) {
                return false;
            }
            if i != pos.row && self.cells[i][pos.col] == Some(digit) {
                return false;
            }
        }

        let box_row = pos.row - pos.row % BOX_SIZE;
        let box_col = pos.col - pos.col % BOX_SIZE;
        for row in box_row..box_row + BOX_SIZE {
            for col in box_col..box_col + BOX_SIZE {
                if (row, col) != (pos.row, pos.col) && self.cells[row][col] == Some(digit) {
                    return false;
                }
            }
        }
        true
    }

    /// Line format: 81 characters, `0` for empty cells.
    pub fn to_string_compact(&self) -> String {
        self.cells
            .iter()
            .flatten()
            .map(|cell| match cell {
                Some(digit) => (b'0' + digit) as char,
                None => '0',
            })
            .collect()
    }
}

fn parse_cell(cell: usize, ch: char) -> Result<Option<u8>, ParseError> {
    match ch {
        '1'..='9' => Ok(Some(ch as u8 - b'0')),
        '0' | '.' | '_' => Ok(None),
        _ => Err(ParseError::InvalidCell { cell, ch }),
    }
}

impl fmt::Display for Grid {
    /// Block format with 3×3 separators:
    ///
    /// ```text
    /// 5 3 _ | _ 7 _ | _ _ _
    /// ...
    /// ------+-------+------
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                let ch = match cell {
                    Some(digit) => (b'0' + digit) as char,
                    None => '_',
                };
                write!(f, "{}", ch)?;
                if col == 2 || col == 5 {
                    write!(f, " | ")?;
                } else if col < 8 {
                    write!(f, " ")?;
                }
            }
            writeln!(f)?;
            if row == 2 || row == 5 {
                writeln!(f, "------+-------+------")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PUZZLE: &str =
        "530070000600195000098000060800060003400803001700020006060000280000419005000080079";

    #[test]
    fn test_from_string_round_trip() {
        let grid = Grid::from_string(PUZZLE).unwrap();
        assert_eq!(grid.to_string_compact(), PUZZLE);
        assert_eq!(grid.get(Position::new(0, 0)), Some(5));
        assert_eq!(grid.get(Position::new(0, 2)), None);
        assert_eq!(grid.filled_count(), 30);
    }

    #[test]
    fn test_from_string_accepts_alternate_empty_markers() {
        let dots = PUZZLE.replace('0', ".");
        let underscores = PUZZLE.replace('0', "_");
        let expected = Grid::from_string(PUZZLE).unwrap();
        assert_eq!(Grid::from_string(&dots).unwrap(), expected);
        assert_eq!(Grid::from_string(&underscores).unwrap(), expected);
    }

    #[test]
    fn test_from_string_wrong_length() {
        assert_eq!(
            Grid::from_string("123"),
            Err(ParseError::WrongCellCount(3))
        );
        let long = "0".repeat(82);
        assert_eq!(
            Grid::from_string(&long),
            Err(ParseError::WrongCellCount(82))
        );
        // The reported count is the input's actual size, not a cap.
        let longer = "0".repeat(100);
        assert_eq!(
            Grid::from_string(&longer),
            Err(ParseError::WrongCellCount(100))
        );
    }

    #[test]
    fn test_from_string_invalid_character() {
        let mut input = PUZZLE.to_string();
        input.replace_range(10..11, "x");
        assert_eq!(
            Grid::from_string(&input),
            Err(ParseError::InvalidCell { cell: 10, ch: 'x' })
        );
    }

    #[test]
    fn test_from_rows() {
        let rows: Vec<&str> = vec![
            "5 3 0 0 7 0 0 0 0",
            "600195000",
            "098000060",
            "800060003",
            "400803001",
            "700020006",
            "060000280",
            "000419005",
            "000080079",
        ];
        let grid = Grid::from_rows(&rows).unwrap();
        assert_eq!(grid.to_string_compact(), PUZZLE);
    }

    #[test]
    fn test_from_rows_rejects_wrong_shape() {
        let rows = vec!["000000000"; 8];
        assert_eq!(Grid::from_rows(&rows), Err(ParseError::WrongRowCount(8)));

        let mut rows = vec!["000000000"; 9];
        rows[4] = "0000";
        assert_eq!(
            Grid::from_rows(&rows),
            Err(ParseError::WrongRowLength { row: 4, len: 4 })
        );
    }

    #[test]
    fn test_first_empty_is_row_major() {
        let mut grid = Grid::from_string(&"0".repeat(81)).unwrap();
        assert_eq!(grid.first_empty(), Some(Position::new(0, 0)));
        for col in 0..GRID_SIZE {
            grid.set(Position::new(0, col), Some(col as u8 + 1));
        }
        assert_eq!(grid.first_empty(), Some(Position::new(1, 0)));
    }

    #[test]
    fn test_is_valid_placement() {
        let grid = Grid::from_string(PUZZLE).unwrap();
        // (0, 2): row has 5 3 7, column has 8, box has 5 3 6 9 8.
        let pos = Position::new(0, 2);
        assert!(grid.is_valid_placement(pos, 1));
        assert!(!grid.is_valid_placement(pos, 5)); // row
        assert!(!grid.is_valid_placement(pos, 8)); // column
        assert!(!grid.is_valid_placement(pos, 9)); // box
    }

    #[test]
    fn test_box_index() {
        assert_eq!(Position::new(0, 0).box_index(), 0);
        assert_eq!(Position::new(2, 5).box_index(), 1);
        assert_eq!(Position::new(4, 4).box_index(), 4);
        assert_eq!(Position::new(8, 8).box_index(), 8);
    }

    #[test]
    fn test_display_block_format() {
        let grid = Grid::from_string(PUZZLE).unwrap();
        let text = grid.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], "5 3 _ | _ 7 _ | _ _ _");
        assert_eq!(lines[3], "------+-------+------");
    }

    #[test]
    fn test_serde_round_trip() {
        let grid = Grid::from_string(PUZZLE).unwrap();
        let json = serde_json::to_string(&grid).unwrap();
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(grid, back);
    }
}
