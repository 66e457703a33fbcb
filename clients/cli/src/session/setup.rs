//! Session setup and initialization

use crate::consts::cli_consts::EVENT_QUEUE_SIZE;
use crate::dashboard::{DashboardLoader, EventSender};
use crate::employees::EmployeeApiClient;
use crate::events::WorkerMessage;
use std::error::Error;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{broadcast, mpsc};

/// Session data for both TUI and headless modes
pub struct SessionData {
    /// Fetches the employee list and produces dashboard actions
    pub loader: Arc<DashboardLoader>,
    /// Receives activity entries and actions from load tasks
    pub event_receiver: mpsc::Receiver<WorkerMessage>,
    /// Cloned into every load task
    pub event_sender: EventSender,
    /// Shutdown sender to stop all load tasks
    pub shutdown_sender: broadcast::Sender<()>,
    /// Base URL of the employee API
    pub api_url: String,
}

/// Builds the HTTP client, loader and channels shared by both modes.
///
/// # Errors
/// Fails only if the HTTP client cannot be constructed.
pub fn setup_session(api_url: String, timeout: Duration) -> Result<SessionData, Box<dyn Error>> {
    let client = EmployeeApiClient::new(api_url.clone())?;
    let loader = Arc::new(DashboardLoader::new(Arc::new(client), timeout));
    log::debug!(
        "Using employee API at {} (timeout {}s)",
        loader.source_url(),
        timeout.as_secs()
    );

    let (event_sender, event_receiver) = mpsc::channel(EVENT_QUEUE_SIZE);
    // Create shutdown channel - only one shutdown signal needed
    let (shutdown_sender, _) = broadcast::channel(1);

    Ok(SessionData {
        loader,
        event_receiver,
        event_sender: EventSender::new(event_sender),
        shutdown_sender,
        api_url,
    })
}
