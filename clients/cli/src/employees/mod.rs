use crate::employees::error::FetchError;
use serde::{Deserialize, Serialize};

pub(crate) mod client;
pub use client::EmployeeApiClient;
pub mod error;

#[cfg(test)]
use mockall::automock;

/// One employee as returned by `GET {base_url}/employees`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    pub id: i64,
    pub department: String,
    pub salary: f64,
}

impl EmployeeRecord {
    /// Reject records the dashboard cannot aggregate.
    pub fn validate(&self) -> Result<(), FetchError> {
        if !self.salary.is_finite() || self.salary < 0.0 {
            return Err(FetchError::MalformedResponse(format!(
                "employee {} has invalid salary {}",
                self.id, self.salary
            )));
        }
        Ok(())
    }
}

/// Validate every record, then make sure the salaries can be summed.
///
/// Individually finite salaries can still overflow to infinity once added up,
/// which would poison every payroll figure.
pub fn validate_batch(records: &[EmployeeRecord]) -> Result<(), FetchError> {
    for record in records {
        record.validate()?;
    }
    let total: f64 = records.iter().map(|record| record.salary).sum();
    if !total.is_finite() {
        return Err(FetchError::MalformedResponse(
            "salary total is not finite".to_string(),
        ));
    }
    Ok(())
}

#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait EmployeeSource: Send + Sync {
    /// Base URL the source reads from, for display.
    fn base_url(&self) -> &str;

    /// Fetch the full employee list.
    async fn fetch_employees(&self) -> Result<Vec<EmployeeRecord>, FetchError>;
}
