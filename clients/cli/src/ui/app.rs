//! Main application state and UI loop
//!
//! Contains the App struct, key handling and the main draw loop

use crate::consts::cli_consts::UI_TICK_MS;
use crate::dashboard::{DashboardLoader, EventSender};
use crate::events::WorkerMessage;
use crate::ui::dashboard::{DashboardState, render_dashboard};
use crossterm::event::{self, Event, KeyCode};
use ratatui::{Terminal, backend::Backend};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
    pub api_url: String,
}

impl UIConfig {
    pub fn new(with_background_color: bool, api_url: String) -> Self {
        Self {
            with_background_color,
            api_url,
        }
    }
}

/// What the loop should do after a key press.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    Continue,
    Quit,
}

/// Application state
pub struct App {
    /// Everything the dashboard screen renders.
    state: DashboardState,

    /// Runs load cycles in the background.
    loader: Arc<DashboardLoader>,

    /// Receives activity entries and state transitions from load tasks.
    event_receiver: mpsc::Receiver<WorkerMessage>,

    /// Handed to each load task for posting back to the view.
    event_sender: EventSender,

    /// Broadcasts shutdown signal to load tasks.
    shutdown_sender: broadcast::Sender<()>,

    /// Load tasks that may still be running.
    join_handles: Vec<JoinHandle<()>>,
}

impl App {
    pub fn new(
        loader: Arc<DashboardLoader>,
        event_receiver: mpsc::Receiver<WorkerMessage>,
        event_sender: EventSender,
        shutdown_sender: broadcast::Sender<()>,
        ui_config: UIConfig,
    ) -> Self {
        Self {
            state: DashboardState::new(Instant::now(), ui_config),
            loader,
            event_receiver,
            event_sender,
            shutdown_sender,
            join_handles: Vec::new(),
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    /// Start a new load cycle. Results of any earlier cycle still in flight are discarded.
    pub fn reload(&mut self) {
        let generation = self.state.begin_load();
        self.join_handles.retain(|handle| !handle.is_finished());
        let handle = self.loader.spawn(
            generation,
            self.event_sender.clone(),
            self.shutdown_sender.subscribe(),
        );
        self.join_handles.push(handle);
    }

    /// Queue everything load tasks have posted since the last tick.
    pub fn drain_messages(&mut self) {
        while let Ok(message) = self.event_receiver.try_recv() {
            match message {
                WorkerMessage::Activity(event) => self.state.add_event(event),
                WorkerMessage::Action(action) => self.state.add_action(action),
            }
        }
    }

    pub fn handle_key(&mut self, code: KeyCode) -> KeyOutcome {
        match code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => {
                // Stop load tasks before leaving the view
                let _ = self.shutdown_sender.send(());
                KeyOutcome::Quit
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.reload();
                KeyOutcome::Continue
            }
            _ => KeyOutcome::Continue,
        }
    }

    /// Wait for load tasks to observe shutdown.
    pub async fn shutdown(self) {
        for handle in self.join_handles {
            let _ = handle.await;
        }
    }
}

/// Runs the dashboard UI until the user quits.
///
/// The first load cycle starts immediately; the returned `App` still owns any
/// task that has not yet seen the shutdown signal.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<App> {
    app.reload();

    loop {
        app.drain_messages();
        app.state.update();
        terminal.draw(|f| render_dashboard(f, &app.state))?;

        if event::poll(Duration::from_millis(UI_TICK_MS))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }
                if app.handle_key(key.code) == KeyOutcome::Quit {
                    return Ok(app);
                }
            }
        }

        // Let load tasks make progress between frames
        tokio::task::yield_now().await;
    }
}
