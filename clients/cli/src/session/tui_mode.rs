//! TUI mode execution

use super::{
    SessionData,
    messages::{print_session_exit_success, print_session_shutdown, print_session_starting},
};
use crate::ui::{self, UIConfig};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{error::Error, io};

/// Runs the interactive dashboard
///
/// Sets up the terminal, runs the UI loop until the user quits, and restores
/// the terminal even when the loop fails.
pub async fn run_tui_mode(session: SessionData, with_background: bool) -> Result<(), Box<dyn Error>> {
    print_session_starting("TUI", &session.api_url);

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let ui_config = UIConfig::new(with_background, session.api_url.clone());
    let app = ui::App::new(
        session.loader,
        session.event_receiver,
        session.event_sender,
        session.shutdown_sender.clone(),
        ui_config,
    );

    let result = ui::run(&mut terminal, app).await;

    // Clean up the terminal after running the application
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    let app = result?;

    print_session_shutdown();
    app.shutdown().await;
    print_session_exit_success();

    Ok(())
}
