pub mod cli_consts {
    //! Dashboard Configuration Constants
    //!
    //! This module contains the configuration constants for the dashboard,
    //! organized by functional area.

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Buffer size of the channel between load tasks and the UI.
    pub const EVENT_QUEUE_SIZE: usize = 100;

    // =============================================================================
    // DASHBOARD CONFIGURATION
    // =============================================================================

    /// Number of months shown in the payroll trend.
    pub const PAYROLL_MONTHS: usize = 6;

    /// Message shown to the user when a load cycle fails.
    pub const LOAD_ERROR_MESSAGE: &str = "Error loading dashboard data";

    // =============================================================================
    // NETWORK CONFIGURATION
    // =============================================================================

    /// Employee list fetching configuration
    pub mod employee_fetching {
        use std::time::Duration;

        /// Default overall timeout for the employee list request (seconds)
        pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

        /// TCP/TLS connect timeout for the HTTP client (seconds)
        pub const CONNECT_TIMEOUT_SECS: u64 = 10;

        /// Helper function to get the default request timeout
        pub const fn default_timeout() -> Duration {
            Duration::from_secs(DEFAULT_TIMEOUT_SECS)
        }

        pub const fn connect_timeout() -> Duration {
            Duration::from_secs(CONNECT_TIMEOUT_SECS)
        }
    }

    // =============================================================================
    // UI CONFIGURATION
    // =============================================================================

    /// Interval between UI redraws while waiting for key presses (milliseconds)
    pub const UI_TICK_MS: u64 = 100;
}
