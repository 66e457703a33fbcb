//! Dashboard screen state
//!
//! Wraps the view model with everything the terminal screen needs around it

use crate::consts::cli_consts::MAX_ACTIVITY_LOGS;
use crate::dashboard::{DashboardAction, DashboardModel, ViewState};
use crate::events::{Event as WorkerEvent, EventType};
use crate::logging::LogLevel;
use crate::ui::app::UIConfig;

use std::collections::VecDeque;
use std::time::Instant;

#[derive(Debug)]
pub struct DashboardState {
    /// Base URL the employee list is fetched from.
    pub api_url: String,
    /// The start time of the application, used for computing uptime.
    pub start_time: Instant,
    /// Whether to paint a solid background.
    pub with_background_color: bool,
    /// Queue of activity entries waiting to be processed
    pub pending_events: VecDeque<WorkerEvent>,
    /// Queue of state transitions waiting to be applied
    pub pending_actions: VecDeque<DashboardAction>,
    /// Activity logs for display
    pub activity_logs: VecDeque<WorkerEvent>,
    /// Animation tick counter
    pub tick: usize,
    /// Local time of the last successful load, `HH:MM:SS`
    pub last_loaded_at: Option<String>,

    model: DashboardModel,
}

impl DashboardState {
    pub fn new(start_time: Instant, ui_config: UIConfig) -> Self {
        Self {
            api_url: ui_config.api_url,
            start_time,
            with_background_color: ui_config.with_background_color,
            pending_events: VecDeque::new(),
            pending_actions: VecDeque::new(),
            activity_logs: VecDeque::new(),
            tick: 0,
            last_loaded_at: None,
            model: DashboardModel::new(),
        }
    }

    pub fn view(&self) -> &ViewState {
        self.model.state()
    }

    pub fn generation(&self) -> u64 {
        self.model.generation()
    }

    pub(super) fn model_mut(&mut self) -> &mut DashboardModel {
        &mut self.model
    }

    /// Enter `Loading` for a new cycle and return its generation.
    pub fn begin_load(&mut self) -> u64 {
        let generation = self.model.begin_load();
        self.add_to_activity_log(WorkerEvent::dashboard_with_level(
            format!("Loading dashboard (cycle {})", generation),
            EventType::Refresh,
            LogLevel::Debug,
        ));
        generation
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: WorkerEvent) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Add an event to the processing queue
    pub fn add_event(&mut self, event: WorkerEvent) {
        self.pending_events.push_back(event);
    }

    /// Add a state transition to the processing queue
    pub fn add_action(&mut self, action: DashboardAction) {
        self.pending_actions.push_back(action);
    }
}
