//! Dashboard component modules
//!
//! One module per panel of the dashboard screen

pub mod charts;
pub mod footer;
pub mod header;
pub mod logs;
pub mod status;
pub mod summary;
