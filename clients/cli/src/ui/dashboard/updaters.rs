//! Dashboard state update logic
//!
//! Drains queued activity entries and state transitions once per tick

use super::state::DashboardState;

use crate::consts::cli_consts::LOAD_ERROR_MESSAGE;
use crate::dashboard::{DashboardAction, ViewState};
use crate::events::{Event as WorkerEvent, EventType};
use crate::logging::LogLevel;

use chrono::Local;

impl DashboardState {
    /// Advance one tick and process everything queued since the last one.
    pub fn update(&mut self) {
        self.tick += 1;

        while let Some(event) = self.pending_events.pop_front() {
            self.add_to_activity_log(event);
        }

        while let Some(action) = self.pending_actions.pop_front() {
            self.process_action(action);
        }
    }

    fn process_action(&mut self, action: DashboardAction) {
        let generation = action.generation();
        if !self.model_mut().apply(action) {
            self.add_to_activity_log(WorkerEvent::dashboard_with_level(
                format!("Ignored result from superseded load (cycle {})", generation),
                EventType::Refresh,
                LogLevel::Debug,
            ));
            return;
        }

        match self.view() {
            ViewState::Ready(snapshot) => {
                let message = format!(
                    "Dashboard updated: {} employees across {} departments",
                    snapshot.total_employees,
                    snapshot.stats.department_distribution.len()
                );
                self.last_loaded_at = Some(Local::now().format("%H:%M:%S").to_string());
                self.add_to_activity_log(WorkerEvent::dashboard_with_level(
                    message,
                    EventType::Success,
                    LogLevel::Info,
                ));
            }
            ViewState::Failed(_) => {
                self.add_to_activity_log(WorkerEvent::dashboard_with_level(
                    LOAD_ERROR_MESSAGE.to_string(),
                    EventType::Error,
                    LogLevel::Error,
                ));
            }
            ViewState::Loading => {}
        }
    }
}
