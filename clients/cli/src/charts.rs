//! Chart specifications
//!
//! Framework-agnostic descriptions of the three dashboard charts. The terminal
//! renderer and the JSON summary both consume these.

use crate::stats::{DashboardStats, payroll_months};
use chrono::{Locale, NaiveDate, NaiveTime};
use serde::Serialize;

const DEPARTMENT_PALETTE: [&str; 5] = ["#FF6384", "#36A2EB", "#FFCE56", "#4BC0C0", "#9966FF"];
const SALARY_COLOR: &str = "#36A2EB";
const PAYROLL_COLOR: &str = "#4BC0C0";

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, strum::Display)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Pie,
    Bar,
    Line,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    Hidden,
    Top,
    Right,
}

/// Y-axis options for bar and line charts.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisSpec {
    pub begin_at_zero: bool,
    /// Tick granularity; `None` lets the renderer choose.
    pub step_size: Option<f64>,
}

/// One labelled data series plus presentation hints.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: String,
    pub series_label: Option<String>,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub colors: Vec<String>,
    pub legend: LegendPosition,
    pub y_axis: Option<AxisSpec>,
}

impl ChartSpec {
    /// `(label, value)` pairs in series order.
    pub fn points(&self) -> impl Iterator<Item = (&str, f64)> {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }

    pub fn max_value(&self) -> f64 {
        self.values.iter().copied().fold(0.0, f64::max)
    }

    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }
}

/// The three charts derived from one `DashboardStats`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardCharts {
    pub department: ChartSpec,
    pub salary: ChartSpec,
    pub payroll: ChartSpec,
}

impl DashboardCharts {
    /// Month labels follow the process locale (see [`system_locale`]).
    pub fn from_stats(stats: &DashboardStats, today: NaiveDate) -> Self {
        Self::from_stats_with_locale(stats, today, system_locale())
    }

    pub fn from_stats_with_locale(stats: &DashboardStats, today: NaiveDate, locale: Locale) -> Self {
        Self {
            department: department_chart(stats),
            salary: salary_chart(stats),
            payroll: payroll_chart(stats, today, locale),
        }
    }
}

fn department_chart(stats: &DashboardStats) -> ChartSpec {
    let (labels, values) = stats
        .department_distribution
        .iter()
        .map(|(department, count)| (department.clone(), *count as f64))
        .unzip();

    ChartSpec {
        kind: ChartKind::Pie,
        title: "Department Distribution".to_string(),
        series_label: None,
        labels,
        values,
        colors: DEPARTMENT_PALETTE.iter().map(|c| c.to_string()).collect(),
        legend: LegendPosition::Right,
        y_axis: None,
    }
}

fn salary_chart(stats: &DashboardStats) -> ChartSpec {
    let (labels, values) = stats
        .salary_ranges
        .iter()
        .map(|(bucket, count)| (bucket.to_string(), count as f64))
        .unzip();

    ChartSpec {
        kind: ChartKind::Bar,
        title: "Salary Distribution".to_string(),
        series_label: Some("Employees".to_string()),
        labels,
        values,
        colors: vec![SALARY_COLOR.to_string()],
        legend: LegendPosition::Hidden,
        y_axis: Some(AxisSpec {
            begin_at_zero: true,
            step_size: Some(1.0),
        }),
    }
}

fn payroll_chart(stats: &DashboardStats, today: NaiveDate, locale: Locale) -> ChartSpec {
    ChartSpec {
        kind: ChartKind::Line,
        title: "Monthly Payroll Trend".to_string(),
        series_label: Some("Monthly Payroll".to_string()),
        labels: month_labels(today, locale),
        values: stats.monthly_payroll.to_vec(),
        colors: vec![PAYROLL_COLOR.to_string()],
        legend: LegendPosition::Top,
        y_axis: Some(AxisSpec {
            begin_at_zero: true,
            step_size: None,
        }),
    }
}

/// Short month names for the payroll window in `locale`, oldest first.
pub fn month_labels(today: NaiveDate, locale: Locale) -> Vec<String> {
    payroll_months(today)
        .iter()
        .map(|month| {
            month
                .and_time(NaiveTime::MIN)
                .and_utc()
                .format_localized("%b", locale)
                .to_string()
        })
        .collect()
}

/// Locale from `LC_ALL`, `LC_TIME` or `LANG`, in that order. Falls back to POSIX.
pub fn system_locale() -> Locale {
    ["LC_ALL", "LC_TIME", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find(|value| !value.is_empty())
        .and_then(|value| parse_locale(&value))
        .unwrap_or(Locale::POSIX)
}

/// Parses values like `de_DE.UTF-8` or `fr_FR@euro`, ignoring codeset and modifier.
pub fn parse_locale(value: &str) -> Option<Locale> {
    let name = value.split(['.', '@']).next()?;
    match name {
        "" => None,
        "C" | "POSIX" => Some(Locale::POSIX),
        _ => Locale::try_from(name).ok(),
    }
}
