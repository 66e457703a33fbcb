//! Dashboard statistics
//!
//! Pure derivation of the dashboard summary from a list of employee records.

use crate::consts::cli_consts::PAYROLL_MONTHS;
use crate::employees::EmployeeRecord;
use chrono::{Datelike, Months, NaiveDate};
use serde::Serialize;
use std::collections::BTreeMap;

/// Salary bucket a single employee falls into.
///
/// Upper bounds are inclusive: a salary of exactly 30 000 is `UpTo30k`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, strum::Display)]
pub enum SalaryBucket {
    #[strum(to_string = "0-30k")]
    UpTo30k,
    #[strum(to_string = "30k-50k")]
    From30kTo50k,
    #[strum(to_string = "50k-80k")]
    From50kTo80k,
    #[strum(to_string = "80k+")]
    Above80k,
}

impl SalaryBucket {
    /// All buckets in display order.
    pub const ALL: [SalaryBucket; 4] = [
        SalaryBucket::UpTo30k,
        SalaryBucket::From30kTo50k,
        SalaryBucket::From50kTo80k,
        SalaryBucket::Above80k,
    ];

    pub fn for_salary(salary: f64) -> Self {
        if salary <= 30_000.0 {
            SalaryBucket::UpTo30k
        } else if salary <= 50_000.0 {
            SalaryBucket::From30kTo50k
        } else if salary <= 80_000.0 {
            SalaryBucket::From50kTo80k
        } else {
            SalaryBucket::Above80k
        }
    }
}

/// Employee counts per salary bucket. Every bucket is always present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SalaryRanges {
    counts: [usize; 4],
}

impl SalaryRanges {
    pub fn count(&self, bucket: SalaryBucket) -> usize {
        self.counts[Self::slot(bucket)]
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Iterate `(bucket, count)` pairs in the fixed display order.
    pub fn iter(&self) -> impl Iterator<Item = (SalaryBucket, usize)> + '_ {
        SalaryBucket::ALL
            .iter()
            .map(move |bucket| (*bucket, self.count(*bucket)))
    }

    fn record(&mut self, salary: f64) {
        self.counts[Self::slot(SalaryBucket::for_salary(salary))] += 1;
    }

    fn slot(bucket: SalaryBucket) -> usize {
        match bucket {
            SalaryBucket::UpTo30k => 0,
            SalaryBucket::From30kTo50k => 1,
            SalaryBucket::From50kTo80k => 2,
            SalaryBucket::Above80k => 3,
        }
    }
}

// Serialized as an ordered map keyed by the bucket labels.
impl Serialize for SalaryRanges {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.counts.len()))?;
        for (bucket, count) in self.iter() {
            map.serialize_entry(&bucket.to_string(), &count)?;
        }
        map.end()
    }
}

/// Summary derived from one fetch of employee records.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_employees: usize,
    pub department_distribution: BTreeMap<String, usize>,
    pub salary_ranges: SalaryRanges,
    /// Oldest month first, current month last.
    pub monthly_payroll: [f64; PAYROLL_MONTHS],
}

/// Compute the dashboard summary for a list of employees.
///
/// Total over any input: an empty slice yields zero employees, an empty
/// distribution, all-zero buckets and six zero payroll entries.
pub fn compute_stats(records: &[EmployeeRecord]) -> DashboardStats {
    let mut department_distribution: BTreeMap<String, usize> = BTreeMap::new();
    let mut salary_ranges = SalaryRanges::default();
    let mut payroll_total = 0.0;

    for record in records {
        *department_distribution
            .entry(record.department.clone())
            .or_insert(0) += 1;
        salary_ranges.record(record.salary);
        payroll_total += record.salary;
    }

    debug_assert_eq!(salary_ranges.total(), records.len());

    DashboardStats {
        total_employees: records.len(),
        department_distribution,
        salary_ranges,
        // No payroll history exists upstream; every month carries the current total.
        monthly_payroll: [payroll_total; PAYROLL_MONTHS],
    }
}

/// First day of the current month and the five before it, oldest first.
pub fn payroll_months(today: NaiveDate) -> [NaiveDate; PAYROLL_MONTHS] {
    let current = today.with_day(1).unwrap_or(today);
    std::array::from_fn(|i| {
        let back = (PAYROLL_MONTHS - 1 - i) as u32;
        current
            .checked_sub_months(Months::new(back))
            .unwrap_or(current)
    })
}
