//! Stand-in transport used while the site has no backend.
//!
//! Waits one second and accepts every submission.

use std::sync::Arc;

use iwe_domain::FormData;

use crate::ports::outbound::{FormSubmitPort, PlatformPort, SubmitError, SubmitReceipt};

/// Simulated network latency
pub const SIMULATED_LATENCY_MS: u64 = 1_000;

#[derive(Clone)]
pub struct SimulatedFormSubmitter {
    platform: Arc<dyn PlatformPort>,
    latency_ms: u64,
}

impl SimulatedFormSubmitter {
    pub fn new(platform: Arc<dyn PlatformPort>) -> Self {
        Self {
            platform,
            latency_ms: SIMULATED_LATENCY_MS,
        }
    }

    pub fn with_latency(mut self, latency_ms: u64) -> Self {
        self.latency_ms = latency_ms;
        self
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
impl FormSubmitPort for SimulatedFormSubmitter {
    async fn send(&self, endpoint: &str, data: &FormData) -> Result<SubmitReceipt, SubmitError> {
        tracing::info!(endpoint = %endpoint, fields = data.len(), "Submitting form (simulated)");
        tracing::debug!(?data, "Form data");

        self.platform.sleep_ms(self.latency_ms).await;

        Ok(SubmitReceipt::accepted())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::platform::mock::MockPlatform;

    #[tokio::test]
    async fn test_simulated_send_waits_and_accepts() {
        let mock = MockPlatform::new();
        let submitter = SimulatedFormSubmitter::new(mock.port());

        let receipt = submitter
            .send("/api/contact", &FormData::new().with("name", "Ann"))
            .await;

        assert_eq!(receipt, Ok(SubmitReceipt::accepted()));
        assert_eq!(mock.sleeps(), vec![SIMULATED_LATENCY_MS]);
    }

    #[tokio::test]
    async fn test_custom_latency() {
        let mock = MockPlatform::new();
        let submitter = SimulatedFormSubmitter::new(mock.port()).with_latency(25);

        let receipt = submitter.send("/api/newsletter", &FormData::new()).await;

        assert!(receipt.is_ok());
        assert_eq!(mock.sleeps(), vec![25]);
    }
}
