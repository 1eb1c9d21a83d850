mod app;
mod render;
mod theme;

use app::App;
use crossterm::{
    cursor::{Hide, Show},
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    style::ResetColor,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};

fn main() -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, Hide)?;

    let result = run_app(&mut stdout);

    // Restore terminal
    execute!(stdout, ResetColor, Show, LeaveAlternateScreen)?;
    disable_raw_mode()?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
    }

    Ok(())
}

fn run_app(stdout: &mut io::Stdout) -> io::Result<()> {
    let mut app = App::new();

    loop {
        render::render(stdout, &app)?;
        stdout.flush()?;

        if let Event::Key(key) = event::read()? {
            // Terminals may report both press and release events.
            if key.kind == KeyEventKind::Release {
                continue;
            }
            // Handle Ctrl+C
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                break;
            }

            match app.handle_key(key) {
                app::AppAction::Continue => {}
                app::AppAction::Quit => break,
            }
        }
    }

    Ok(())
}
