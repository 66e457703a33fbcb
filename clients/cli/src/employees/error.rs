//! Error handling for the employee data source

use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    /// Reqwest error, typically related to network issues or request failures.
    #[error("Reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("HTTP error with status {status}: {message}")]
    Http { status: u16, message: String },

    /// The payload was not a list of well-formed employee records.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// The request did not complete within the configured timeout.
    #[error("Request timed out after {}s", .0.as_secs())]
    Timeout(Duration),
}

impl FetchError {
    pub async fn from_response(response: reqwest::Response) -> FetchError {
        let status = response.status().as_u16();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read response text".to_string());

        FetchError::Http { status, message }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(error: serde_json::Error) -> Self {
        FetchError::MalformedResponse(error.to_string())
    }
}
