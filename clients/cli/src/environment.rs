use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// Deployment environments the dashboard can point at when no API URL is configured.
#[derive(Clone, Default, Copy, PartialEq, Eq)]
pub enum Environment {
    /// Employee API running on the developer's machine.
    #[default]
    Local,
    /// Shared pre-production API.
    Staging,
}

impl Environment {
    /// Name of the variable that selects the environment.
    pub const ENV_VAR: &'static str = "DASHBOARD_ENVIRONMENT";

    /// Returns the employee API base URL associated with the environment.
    pub fn api_url(&self) -> String {
        match self {
            Environment::Local => "http://localhost:5000/api".to_string(),
            Environment::Staging => "https://staging.employees.internal/api".to_string(),
        }
    }

    /// Reads `DASHBOARD_ENVIRONMENT`, falling back to the default on absent or unknown values.
    pub fn from_env() -> Self {
        std::env::var(Self::ENV_VAR)
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or_default()
    }
}

impl FromStr for Environment {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "local" => Ok(Environment::Local),
            "staging" => Ok(Environment::Staging),
            _ => Err(()),
        }
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Local => write!(f, "Local"),
            Environment::Staging => write!(f, "Staging"),
        }
    }
}

impl Debug for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Environment::{}, URL: {}", self, self.api_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("STAGING".parse::<Environment>(), Ok(Environment::Staging));
        assert_eq!(" local ".parse::<Environment>(), Ok(Environment::Local));
        assert!("beta".parse::<Environment>().is_err());
    }

    #[test]
    fn test_default_points_at_local_api() {
        assert_eq!(Environment::default().api_url(), "http://localhost:5000/api");
    }
}
