use crate::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent};
use sudosolve_core::{Grid, Position, Solver, GRID_SIZE};

/// Result of handling a key press
pub enum AppAction {
    Continue,
    Quit,
}

/// The main application state
pub struct App {
    /// The puzzle as entered by the user
    pub puzzle: Grid,
    /// The painted first solution, after a successful solve
    pub solution: Option<Grid>,
    /// Currently selected cell position
    pub cursor: Position,
    /// Color theme
    pub theme: Theme,
    /// Status line text
    pub status: String,
    /// Result pane text
    pub result_lines: Vec<String>,
    /// Whether the dark theme is active
    dark: bool,
    solver: Solver,
}

const PROMPT: &str = "Enter a puzzle (1-9 to set, 0 or space to clear a cell)";

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            puzzle: Grid::new(),
            solution: None,
            cursor: Position::new(0, 0),
            theme: Theme::dark(),
            status: PROMPT.to_string(),
            result_lines: Vec::new(),
            dark: true,
            solver: Solver::new(),
        }
    }

    /// Digit shown at a position: the user's entry, or the painted
    /// solution's value when one is present.
    pub fn display_value(&self, pos: Position) -> Option<u8> {
        self.puzzle
            .get(pos)
            .or_else(|| self.solution.as_ref().and_then(|s| s.get(pos)))
    }

    /// Whether the cell was entered by the user (as opposed to filled
    /// in by the solver).
    pub fn is_entered(&self, pos: Position) -> bool {
        self.puzzle.get(pos).is_some()
    }

    /// Whether a user-entered digit conflicts with another cell in
    /// its row, column or box.
    pub fn is_conflicted(&self, pos: Position) -> bool {
        match self.puzzle.get(pos) {
            Some(digit) => !self.puzzle.is_valid_placement(pos, digit),
            None => false,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return AppAction::Quit,

            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1, 0),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1, 0),
            KeyCode::Left | KeyCode::Char('h') => self.move_cursor(0, -1),
            KeyCode::Right | KeyCode::Char('l') => self.move_cursor(0, 1),

            KeyCode::Char(ch @ '1'..='9') => self.set_cell(Some(ch as u8 - b'0')),
            KeyCode::Char('0') | KeyCode::Char(' ') | KeyCode::Backspace | KeyCode::Delete => {
                self.set_cell(None)
            }

            KeyCode::Char('s') | KeyCode::Enter => self.solve(),
            KeyCode::Char('c') => self.clear(),
            KeyCode::Char('t') => self.toggle_theme(),

            _ => {}
        }
        AppAction::Continue
    }

    fn move_cursor(&mut self, drow: isize, dcol: isize) {
        let size = GRID_SIZE as isize;
        let row = (self.cursor.row as isize + drow).rem_euclid(size);
        let col = (self.cursor.col as isize + dcol).rem_euclid(size);
        self.cursor = Position::new(row as usize, col as usize);
    }

    /// Edit the cell under the cursor. Any painted solution is stale
    /// once the puzzle changes, so it is discarded.
    fn set_cell(&mut self, value: Option<u8>) {
        self.puzzle.set(self.cursor, value);
        if self.solution.take().is_some() {
            self.result_lines.clear();
            self.status = PROMPT.to_string();
        }
    }

    fn solve(&mut self) {
        let result = self.solver.solve(&self.puzzle);
        self.result_lines.clear();

        match result.count() {
            0 => {
                self.solution = None;
                self.result_lines
                    .push("There are no possible solutions.".to_string());
                self.status = "No solutions found".to_string();
            }
            1 => {
                self.status = "Found one unique solution".to_string();
                self.result_lines
                    .push("There is one unique solution:".to_string());
                self.push_solution_lines(&result);
                self.solution = result.into_first_solution();
            }
            _ => {
                self.status = "Found more than one solution".to_string();
                self.result_lines
                    .push("There are at least 2 possible solutions".to_string());
                self.result_lines.push("First solution found:".to_string());
                self.push_solution_lines(&result);
                self.solution = result.into_first_solution();
            }
        }
    }

    fn push_solution_lines(&mut self, result: &sudosolve_core::SolveResult) {
        if let Some(grid) = result.first_solution() {
            self.result_lines.push(String::new());
            self.result_lines
                .extend(grid.to_string().lines().map(str::to_string));
        }
    }

    /// First press removes a painted solution; pressing again (or with
    /// none painted) empties the grid.
    fn clear(&mut self) {
        if self.solution.take().is_none() {
            self.puzzle = Grid::new();
        }
        self.result_lines.clear();
        self.status = PROMPT.to_string();
    }

    fn toggle_theme(&mut self) {
        self.dark = !self.dark;
        self.theme = if self.dark {
            Theme::dark()
        } else {
            Theme::light()
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_digit_entry_and_clear() {
        let mut app = App::new();
        press(&mut app, KeyCode::Char('5'));
        assert_eq!(app.puzzle.get(Position::new(0, 0)), Some(5));

        press(&mut app, KeyCode::Char('0'));
        assert_eq!(app.puzzle.get(Position::new(0, 0)), None);
    }

    #[test]
    fn test_cursor_wraps() {
        let mut app = App::new();
        press(&mut app, KeyCode::Up);
        assert_eq!(app.cursor, Position::new(8, 0));
        press(&mut app, KeyCode::Left);
        assert_eq!(app.cursor, Position::new(8, 8));
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.cursor, Position::new(0, 0));
    }

    #[test]
    fn test_solve_paints_first_solution() {
        let mut app = App::new();
        let puzzle =
            "530070000600195000098000060800060003400803001700020006060000280000419005000080079";
        app.puzzle = Grid::from_string(puzzle).unwrap();

        press(&mut app, KeyCode::Char('s'));

        let solution = app.solution.as_ref().expect("solution painted");
        assert!(solution.is_complete());
        assert_eq!(app.status, "Found one unique solution");

        // Cell (0, 0) was entered by the user, (0, 2) filled by the solver.
        assert!(app.is_entered(Position::new(0, 0)));
        assert!(!app.is_entered(Position::new(0, 2)));
        assert_eq!(app.display_value(Position::new(0, 2)), Some(4));
    }

    #[test]
    fn test_solve_empty_grid_reports_multiple() {
        let mut app = App::new();
        press(&mut app, KeyCode::Enter);

        assert!(app.solution.is_some());
        assert_eq!(app.status, "Found more than one solution");
        assert_eq!(
            app.result_lines.first().map(String::as_str),
            Some("There are at least 2 possible solutions")
        );
    }

    #[test]
    fn test_solve_conflict_reports_none() {
        let mut app = App::new();
        app.puzzle.set(Position::new(0, 0), Some(5));
        app.puzzle.set(Position::new(0, 8), Some(5));

        press(&mut app, KeyCode::Char('s'));
        assert!(app.solution.is_none());
        assert_eq!(app.status, "No solutions found");
        assert!(app.is_conflicted(Position::new(0, 0)));
    }

    #[test]
    fn test_editing_discards_painted_solution() {
        let mut app = App::new();
        press(&mut app, KeyCode::Char('s'));
        assert!(app.solution.is_some());

        press(&mut app, KeyCode::Char('3'));
        assert!(app.solution.is_none());
        assert!(app.result_lines.is_empty());
    }

    #[test]
    fn test_clear_is_two_stage() {
        let mut app = App::new();
        app.puzzle.set(Position::new(4, 4), Some(9));
        press(&mut app, KeyCode::Char('s'));
        assert!(app.solution.is_some());

        press(&mut app, KeyCode::Char('c'));
        assert!(app.solution.is_none());
        assert_eq!(app.puzzle.get(Position::new(4, 4)), Some(9));

        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.puzzle, Grid::new());
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new();
        assert!(matches!(
            app.handle_key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)),
            AppAction::Quit
        ));
        assert!(matches!(
            app.handle_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)),
            AppAction::Quit
        ));
    }
}
