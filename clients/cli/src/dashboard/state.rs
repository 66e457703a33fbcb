//! Dashboard view state
//!
//! The view moves `Loading -> Ready` or `Loading -> Failed`; a reload re-enters
//! `Loading`. All transitions go through [`reduce`].

use crate::charts::DashboardCharts;
use crate::consts::cli_consts::LOAD_ERROR_MESSAGE;
use crate::employees::EmployeeRecord;
use crate::stats::{DashboardStats, compute_stats};
use chrono::NaiveDate;
use serde::Serialize;

/// Everything rendered from one successful load.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub total_employees: usize,
    pub stats: DashboardStats,
    pub charts: DashboardCharts,
}

impl DashboardSnapshot {
    pub fn from_records(records: &[EmployeeRecord], today: NaiveDate) -> Self {
        let stats = compute_stats(records);
        let charts = DashboardCharts::from_stats(&stats, today);
        Self {
            total_employees: stats.total_employees,
            stats,
            charts,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Loading,
    Ready(Box<DashboardSnapshot>),
    Failed(String),
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn snapshot(&self) -> Option<&DashboardSnapshot> {
        match self {
            ViewState::Ready(snapshot) => Some(&**snapshot),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            ViewState::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }
}

/// Transition request for the view. `generation` identifies the load cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardAction {
    LoadStarted {
        generation: u64,
    },
    LoadSucceeded {
        generation: u64,
        records: Vec<EmployeeRecord>,
        today: NaiveDate,
    },
    LoadFailed {
        generation: u64,
    },
}

impl DashboardAction {
    pub fn generation(&self) -> u64 {
        match self {
            DashboardAction::LoadStarted { generation }
            | DashboardAction::LoadSucceeded { generation, .. }
            | DashboardAction::LoadFailed { generation } => *generation,
        }
    }
}

/// Pure state transition.
pub fn reduce(state: ViewState, action: DashboardAction) -> ViewState {
    match action {
        DashboardAction::LoadStarted { .. } => ViewState::Loading,
        DashboardAction::LoadSucceeded { records, today, .. } => {
            ViewState::Ready(Box::new(DashboardSnapshot::from_records(&records, today)))
        }
        // A failure only replaces an in-flight load; it never wipes rendered data.
        DashboardAction::LoadFailed { .. } => match state {
            ViewState::Loading => ViewState::Failed(LOAD_ERROR_MESSAGE.to_string()),
            other => other,
        },
    }
}

/// View state plus the generation of the load cycle it is waiting on.
#[derive(Debug)]
pub struct DashboardModel {
    state: ViewState,
    generation: u64,
}

impl DashboardModel {
    pub fn new() -> Self {
        Self {
            state: ViewState::Loading,
            generation: 0,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Start a new load cycle and return its generation.
    pub fn begin_load(&mut self) -> u64 {
        self.generation += 1;
        let generation = self.generation;
        self.apply(DashboardAction::LoadStarted { generation });
        generation
    }

    /// Apply an action; returns `false` when it belongs to a superseded cycle.
    pub fn apply(&mut self, action: DashboardAction) -> bool {
        if action.generation() != self.generation {
            return false;
        }
        let state = std::mem::replace(&mut self.state, ViewState::Loading);
        self.state = reduce(state, action);
        true
    }
}

impl Default for DashboardModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 15).unwrap()
    }

    fn records() -> Vec<EmployeeRecord> {
        vec![
            EmployeeRecord {
                id: 1,
                department: "Eng".to_string(),
                salary: 40_000.0,
            },
            EmployeeRecord {
                id: 2,
                department: "HR".to_string(),
                salary: 25_000.0,
            },
        ]
    }

    #[test]
    fn test_load_success_transitions_to_ready() {
        let mut model = DashboardModel::new();
        let generation = model.begin_load();
        assert!(model.state().is_loading());

        assert!(model.apply(DashboardAction::LoadSucceeded {
            generation,
            records: records(),
            today: today(),
        }));

        let snapshot = model.state().snapshot().expect("ready");
        assert_eq!(snapshot.total_employees, 2);
        assert_eq!(snapshot.charts.payroll.values, vec![65_000.0; 6]);
    }

    #[test]
    fn test_load_failure_sets_generic_message() {
        let mut model = DashboardModel::new();
        let generation = model.begin_load();
        model.apply(DashboardAction::LoadFailed { generation });

        assert_eq!(
            model.state().error_message(),
            Some("Error loading dashboard data")
        );
        assert!(model.state().snapshot().is_none());
    }

    #[test]
    fn test_stale_generation_is_ignored() {
        let mut model = DashboardModel::new();
        let first = model.begin_load();
        let second = model.begin_load();

        let applied = model.apply(DashboardAction::LoadSucceeded {
            generation: first,
            records: records(),
            today: today(),
        });
        assert!(!applied);
        assert!(model.state().is_loading());

        model.apply(DashboardAction::LoadFailed { generation: second });
        assert!(model.state().error_message().is_some());
    }

    #[test]
    fn test_reload_from_failed_reenters_loading() {
        let mut model = DashboardModel::new();
        let generation = model.begin_load();
        model.apply(DashboardAction::LoadFailed { generation });

        model.begin_load();
        assert!(model.state().is_loading());
        assert_eq!(model.generation(), 2);
    }

    #[test]
    fn test_reduce_failure_after_ready_keeps_snapshot() {
        let ready = reduce(
            ViewState::Loading,
            DashboardAction::LoadSucceeded {
                generation: 1,
                records: records(),
                today: today(),
            },
        );
        let after = reduce(ready.clone(), DashboardAction::LoadFailed { generation: 1 });
        assert_eq!(after, ready);
    }

    #[test]
    fn test_snapshot_from_empty_records() {
        let snapshot = DashboardSnapshot::from_records(&[], today());
        assert_eq!(snapshot.total_employees, 0);
        assert_eq!(snapshot.charts.salary.values, vec![0.0; 4]);
    }
}
