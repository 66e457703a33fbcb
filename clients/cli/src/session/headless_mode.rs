//! Headless mode execution

use super::{
    SessionData,
    messages::{print_session_exit_success, print_session_shutdown, print_session_starting},
};
use crate::dashboard::{DashboardLoader, DashboardSnapshot, ViewState, load_dashboard};
use crate::logging::init_headless_logger;
use crate::ui::dashboard::utils::format_amount;
use crate::{print_cmd_error, print_cmd_info};
use chrono::{Local, NaiveDate};
use std::error::Error;
use std::fmt::Write;
use std::future::Future;

/// Runs one load cycle without a terminal UI and prints the result
///
/// # Returns
/// * `Ok(())` - the dashboard loaded and was printed
/// * `Err` - the load failed or was interrupted; the caller exits non-zero
pub async fn run_headless_mode(session: SessionData, json: bool) -> Result<(), Box<dyn Error>> {
    init_headless_logger();
    print_session_starting("headless", &session.api_url);

    let today = Local::now().date_naive();
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };
    let Some(state) = load_or_interrupt(&session.loader, today, ctrl_c).await else {
        print_session_shutdown();
        return Err("Interrupted".into());
    };

    match state {
        ViewState::Ready(snapshot) => {
            if snapshot.total_employees == 0 && !json {
                print_cmd_info!("No employees", "The API returned an empty list");
            }
            if json {
                println!("{}", serde_json::to_string_pretty(&*snapshot)?);
            } else {
                print!("{}", format_summary(&snapshot));
            }
            print_session_exit_success();
            Ok(())
        }
        ViewState::Failed(message) => {
            print_cmd_error!("Dashboard unavailable", "{}", message);
            Err(message.into())
        }
        ViewState::Loading => Err("Load did not complete".into()),
    }
}

/// Runs one load cycle unless `interrupt` resolves first.
///
/// The in-flight fetch is dropped on interrupt, so nothing outlives this call.
pub async fn load_or_interrupt(
    loader: &DashboardLoader,
    today: NaiveDate,
    interrupt: impl Future<Output = ()>,
) -> Option<ViewState> {
    tokio::select! {
        state = load_dashboard(loader, today) => Some(state),
        _ = interrupt => None,
    }
}

/// Plain-text rendering of a snapshot for the terminal.
pub fn format_summary(snapshot: &DashboardSnapshot) -> String {
    let mut out = String::new();
    let charts = &snapshot.charts;

    let _ = writeln!(out, "Total Employees: {}", snapshot.total_employees);

    let _ = writeln!(out, "\n{}", charts.department.title);
    let total = charts.department.total();
    for (label, value) in charts.department.points() {
        let share = if total > 0.0 { value / total * 100.0 } else { 0.0 };
        let _ = writeln!(out, "  {:<20} {:>5} ({:.1}%)", label, value as u64, share);
    }

    let _ = writeln!(out, "\n{}", charts.salary.title);
    for (label, value) in charts.salary.points() {
        let _ = writeln!(out, "  {:<20} {:>5}", label, value as u64);
    }

    let _ = writeln!(out, "\n{}", charts.payroll.title);
    for (label, value) in charts.payroll.points() {
        let _ = writeln!(out, "  {:<20} {:>12}", label, format_amount(value));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::employees::error::FetchError;
    use crate::employees::{EmployeeRecord, EmployeeSource, MockEmployeeSource};
    use std::sync::Arc;
    use std::time::Duration;

    fn feb_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 15).unwrap()
    }

    /// Source that answers long after any test gives up.
    struct StalledSource;

    #[async_trait::async_trait]
    impl EmployeeSource for StalledSource {
        fn base_url(&self) -> &str {
            "http://stalled.invalid"
        }

        async fn fetch_employees(&self) -> Result<Vec<EmployeeRecord>, FetchError> {
            tokio::time::sleep(Duration::from_secs(30)).await;
            Ok(Vec::new())
        }
    }

    #[tokio::test]
    async fn test_load_completes_without_interrupt() {
        let mut source = MockEmployeeSource::new();
        source.expect_fetch_employees().returning(|| Ok(Vec::new()));
        let loader = DashboardLoader::new(Arc::new(source), Duration::from_secs(5));

        let state = load_or_interrupt(&loader, feb_2024(), std::future::pending()).await;

        assert_eq!(state.unwrap().snapshot().unwrap().total_employees, 0);
    }

    #[tokio::test]
    async fn test_interrupt_abandons_pending_load() {
        let loader = DashboardLoader::new(Arc::new(StalledSource), Duration::from_secs(60));

        let state = load_or_interrupt(&loader, feb_2024(), std::future::ready(())).await;

        assert!(state.is_none());
    }

    #[test]
    fn test_format_summary_lists_every_chart() {
        let snapshot = DashboardSnapshot::from_records(
            &[
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
            ],
            feb_2024(),
        );

        let text = format_summary(&snapshot);

        assert!(text.starts_with("Total Employees: 2\n"));
        assert!(text.contains("Department Distribution"));
        assert!(text.contains("(50.0%)"));
        assert!(text.contains("80k+"));
        assert!(text.contains(&snapshot.charts.payroll.labels[0]));
        assert!(text.contains("65,000"));
    }
}
