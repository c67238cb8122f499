//! Form Submit Port - the send operation behind both forms
//!
//! The contract is deliberately small: one call, resolved or rejected once.
//! Retry, backoff and error classification belong to whatever transport
//! implements it.

use iwe_domain::FormData;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Answer of a successful send
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitReceipt {
    pub success: bool,
}

impl SubmitReceipt {
    pub fn accepted() -> Self {
        Self { success: true }
    }
}

/// Transport-level failure of a send
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubmitError {
    /// Request could not be sent or no response arrived
    #[error("Transport error: {0}")]
    Transport(String),

    /// Endpoint answered with a non-success status
    #[error("Endpoint returned {status}: {body}")]
    Status { status: u16, body: String },

    /// Form data could not be encoded
    #[error("Failed to encode form data: {0}")]
    Serialize(String),
}

/// Port for delivering form data to an endpoint
///
/// Real implementations POST the data as JSON with
/// `Content-Type: application/json`.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait FormSubmitPort: Send + Sync {
    async fn send(&self, endpoint: &str, data: &FormData) -> Result<SubmitReceipt, SubmitError>;
}
