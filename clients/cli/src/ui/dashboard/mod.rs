//! Terminal dashboard
//!
//! Split into state, update logic, the top-level renderer and one module per panel

pub mod components;
pub mod renderer;
pub mod state;
pub mod updaters;
pub mod utils;

pub use renderer::render_dashboard;
pub use state::DashboardState;
