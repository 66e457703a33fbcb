//! Dashboard view: state machine plus the task that loads employees into it

pub mod loader;
pub mod state;

pub use loader::{DashboardLoader, EventSender, load_dashboard};
pub use state::{DashboardAction, DashboardModel, DashboardSnapshot, ViewState};
