use crate::app::App;
use crossterm::{
    cursor::MoveTo,
    execute,
    style::{Print, SetBackgroundColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use std::io;
use sudosolve_core::{Position, GRID_SIZE};

const GRID_X: u16 = 2;
const GRID_Y: u16 = 2;
// "| 5 3 _ | _ 7 _ | _ _ _ |" plus frame lines between bands
const GRID_WIDTH: u16 = 25;
const GRID_HEIGHT: u16 = 13;
const PANEL_X: u16 = GRID_X + GRID_WIDTH + 4;

pub fn render(stdout: &mut io::Stdout, app: &App) -> io::Result<()> {
    let theme = &app.theme;

    execute!(
        stdout,
        SetBackgroundColor(theme.bg),
        Clear(ClearType::All),
        SetForegroundColor(theme.fg),
        MoveTo(GRID_X, 0),
        Print("Sudoku Solver"),
    )?;

    render_grid(stdout, app)?;
    render_keys(stdout, app)?;

    execute!(
        stdout,
        MoveTo(GRID_X, GRID_Y + GRID_HEIGHT + 1),
        SetForegroundColor(theme.key),
        Print(&app.status),
    )?;

    render_result_pane(stdout, app)?;
    Ok(())
}

fn render_grid(stdout: &mut io::Stdout, app: &App) -> io::Result<()> {
    let theme = &app.theme;

    // Horizontal frame lines; the outer pair in the plain border
    // color, the 3x3 band separators in the box border color.
    for (i, dy) in [0u16, 4, 8, 12].iter().enumerate() {
        let color = if i == 0 || i == 3 {
            theme.border
        } else {
            theme.box_border
        };
        execute!(
            stdout,
            MoveTo(GRID_X, GRID_Y + dy),
            SetForegroundColor(color),
            Print("+-------+-------+-------+"),
        )?;
    }

    for row in 0..GRID_SIZE {
        let y = GRID_Y + cell_y(row);

        for (i, dx) in [0u16, 8, 16, 24].iter().enumerate() {
            let color = if i == 0 || i == 3 {
                theme.border
            } else {
                theme.box_border
            };
            execute!(
                stdout,
                MoveTo(GRID_X + dx, y),
                SetForegroundColor(color),
                Print("|"),
            )?;
        }

        for col in 0..GRID_SIZE {
            let pos = Position::new(row, col);
            render_cell(stdout, app, pos)?;
        }
    }
    Ok(())
}

fn render_cell(stdout: &mut io::Stdout, app: &App, pos: Position) -> io::Result<()> {
    let theme = &app.theme;
    let x = GRID_X + cell_x(pos.col);
    let y = GRID_Y + cell_y(pos.row);

    let ch = match app.display_value(pos) {
        Some(digit) => (b'0' + digit) as char,
        None => '_',
    };
    let fg = if app.is_conflicted(pos) {
        theme.error
    } else if app.is_entered(pos) {
        theme.entered
    } else if app.display_value(pos).is_some() {
        theme.solved
    } else {
        theme.border
    };
    let bg = if pos == app.cursor {
        theme.selected_bg
    } else {
        theme.bg
    };

    execute!(
        stdout,
        MoveTo(x - 1, y),
        SetBackgroundColor(bg),
        SetForegroundColor(fg),
        Print(format!(" {} ", ch)),
        SetBackgroundColor(theme.bg),
    )
}

fn render_keys(stdout: &mut io::Stdout, app: &App) -> io::Result<()> {
    let theme = &app.theme;
    let bindings = [
        ("arrows/hjkl", "move"),
        ("1-9", "set cell"),
        ("0/space", "clear cell"),
        ("s/enter", "solve"),
        ("c", "clear solution/grid"),
        ("t", "theme"),
        ("q/esc", "quit"),
    ];

    execute!(
        stdout,
        MoveTo(PANEL_X, GRID_Y),
        SetForegroundColor(theme.fg),
        Print("Keys:"),
    )?;
    for (i, (keys, action)) in bindings.iter().enumerate() {
        execute!(
            stdout,
            MoveTo(PANEL_X, GRID_Y + 1 + i as u16),
            SetForegroundColor(theme.key),
            Print(format!("{:<12}", keys)),
            SetForegroundColor(theme.fg),
            Print(*action),
        )?;
    }
    Ok(())
}

fn render_result_pane(stdout: &mut io::Stdout, app: &App) -> io::Result<()> {
    let theme = &app.theme;
    let base_y = GRID_Y + GRID_HEIGHT + 3;

    execute!(
        stdout,
        MoveTo(GRID_X, base_y),
        SetForegroundColor(theme.border),
        Print("Results"),
    )?;
    for (i, line) in app.result_lines.iter().enumerate() {
        let color = if line.starts_with("There") || line.starts_with("First") {
            theme.info
        } else {
            theme.fg
        };
        execute!(
            stdout,
            MoveTo(GRID_X, base_y + 1 + i as u16),
            SetForegroundColor(color),
            Print(line),
        )?;
    }
    Ok(())
}

// Cell (row, col) is drawn at these offsets inside the frame.
fn cell_x(col: usize) -> u16 {
    (2 + col * 2 + (col / 3) * 2) as u16
}

fn cell_y(row: usize) -> u16 {
    (1 + row + row / 3) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_offsets_skip_separators() {
        assert_eq!(cell_x(0), 2);
        assert_eq!(cell_x(2), 6);
        assert_eq!(cell_x(3), 10);
        assert_eq!(cell_x(8), 22);

        assert_eq!(cell_y(0), 1);
        assert_eq!(cell_y(2), 3);
        assert_eq!(cell_y(3), 5);
        assert_eq!(cell_y(8), 11);
    }
}
