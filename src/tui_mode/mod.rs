pub mod app;
mod help;
mod helpers;
mod ui;

use anyhow::{Context, Result};
use app::App;
use crossterm::{
    cursor::{SetCursorStyle, Show},
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use rustgraph::SampleGrid;
use std::io;

pub(crate) fn run_tui(grid: SampleGrid, formula: Option<String>, precision: usize) -> Result<()> {
    let mut app = App::new(grid, precision);
    if let Some(formula) = formula {
        app.input = formula;
        app.submit();
    }

    let mut terminal = setup_terminal().context("could not set up the terminal")?;
    let result = ui::run_ui_loop(&mut terminal, &mut app);
    restore_terminal(&mut terminal).context("could not restore the terminal")?;
    result
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    let mut stdout = io::stdout();
    enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, SetCursorStyle::BlinkingBar)?;
    Terminal::new(CrosstermBackend::new(stdout)).map_err(Into::into)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        Show,
        SetCursorStyle::DefaultUserShape
    )?;
    Ok(())
}
