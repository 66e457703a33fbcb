//! Event System
//!
//! Types for activity events and messages posted by load tasks to the view

use crate::dashboard::DashboardAction;
use crate::logging::{LogLevel, should_log_with_env};
use chrono::Local;
use std::fmt::Display;

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum Worker {
    /// Task that fetches the employee list.
    Loader,
    /// The dashboard view itself (reloads, state transitions).
    Dashboard,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Error,
    Refresh,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub worker: Worker,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
}

impl Event {
    fn new(worker: Worker, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            worker,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
        }
    }

    pub fn loader_with_level(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(Worker::Loader, msg, event_type, log_level)
    }

    pub fn dashboard_with_level(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(Worker::Dashboard, msg, event_type, log_level)
    }

    pub fn should_display(&self) -> bool {
        // Always show success events and info level events
        if self.event_type == EventType::Success || self.log_level >= LogLevel::Info {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.event_type, self.timestamp, self.msg)
    }
}

/// Message posted by a load task to the view.
#[derive(Debug)]
pub enum WorkerMessage {
    /// Entry for the activity log.
    Activity(Event),
    /// State transition for the dashboard reducer.
    Action(DashboardAction),
}
