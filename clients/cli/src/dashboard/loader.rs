//! Employee list loading for the dashboard view

use super::state::{DashboardAction, DashboardModel, ViewState};
use crate::employees::EmployeeSource;
use crate::employees::error::FetchError;
use crate::error_classifier::ErrorClassifier;
use crate::events::{Event, EventType, WorkerMessage};
use crate::logging::LogLevel;
use chrono::{Local, NaiveDate};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;
use tokio::time::timeout;

/// Event sending utilities for load tasks
#[derive(Clone)]
pub struct EventSender {
    sender: mpsc::Sender<WorkerMessage>,
}

impl EventSender {
    pub fn new(sender: mpsc::Sender<WorkerMessage>) -> Self {
        Self { sender }
    }

    /// Send an activity log entry
    pub async fn send_event(&self, event: Event) {
        let _ = self.sender.send(WorkerMessage::Activity(event)).await;
    }

    /// Send a state transition
    pub async fn send_action(&self, action: DashboardAction) {
        let _ = self.sender.send(WorkerMessage::Action(action)).await;
    }

    pub async fn send_loader_event(&self, message: String, event_type: EventType, log_level: LogLevel) {
        self.send_event(Event::loader_with_level(message, event_type, log_level))
            .await;
    }
}

/// Fetches employees and turns the outcome into a dashboard action
pub struct DashboardLoader {
    source: Arc<dyn EmployeeSource>,
    timeout: Duration,
    error_classifier: ErrorClassifier,
}

impl DashboardLoader {
    pub fn new(source: Arc<dyn EmployeeSource>, timeout: Duration) -> Self {
        Self {
            source,
            timeout,
            error_classifier: ErrorClassifier::new(),
        }
    }

    pub fn source_url(&self) -> &str {
        self.source.base_url()
    }

    /// Run one fetch for `generation`.
    ///
    /// Returns the action for the reducer and an activity entry describing the
    /// outcome. Errors are logged here and never reach the user verbatim.
    pub async fn fetch(&self, generation: u64, today: NaiveDate) -> (DashboardAction, Event) {
        let result = match timeout(self.timeout, self.source.fetch_employees()).await {
            Ok(result) => result,
            Err(_) => Err(FetchError::Timeout(self.timeout)),
        };

        match result {
            Ok(records) => {
                log::info!("Fetched {} employee records", records.len());
                let event = Event::loader_with_level(
                    format!("Fetched {} employees", records.len()),
                    EventType::Success,
                    LogLevel::Info,
                );
                let action = DashboardAction::LoadSucceeded {
                    generation,
                    records,
                    today,
                };
                (action, event)
            }
            Err(e) => {
                let log_level = self.error_classifier.classify_fetch_error(&e);
                let level: log::Level = log_level.into();
                log::log!(level, "Dashboard error: {}", e);
                let event = Event::loader_with_level(
                    format!("Failed to load employees: {}", e),
                    EventType::Error,
                    log_level,
                );
                (DashboardAction::LoadFailed { generation }, event)
            }
        }
    }

    /// Run `fetch` on a background task and post the result to the view.
    ///
    /// The task ends without posting anything once `shutdown` fires, and posts
    /// are dropped if the view's receiver is already gone.
    pub fn spawn(
        self: &Arc<Self>,
        generation: u64,
        sender: EventSender,
        mut shutdown: broadcast::Receiver<()>,
    ) -> JoinHandle<()> {
        let loader = Arc::clone(self);
        tokio::spawn(async move {
            sender
                .send_loader_event(
                    "Requesting employee list...".to_string(),
                    EventType::Refresh,
                    LogLevel::Info,
                )
                .await;

            tokio::select! {
                (action, event) = loader.fetch(generation, Local::now().date_naive()) => {
                    sender.send_event(event).await;
                    sender.send_action(action).await;
                }
                _ = shutdown.recv() => {}
            }
        })
    }
}

/// Run one complete load cycle and return the resulting view state.
pub async fn load_dashboard(loader: &DashboardLoader, today: NaiveDate) -> ViewState {
    let mut model = DashboardModel::new();
    let generation = model.begin_load();
    let (action, _) = loader.fetch(generation, today).await;
    model.apply(action);
    model.state().clone()
}
