mod app;
pub mod dashboard;

pub use app::{App, UIConfig, run};
