//! Service providers for the presentation layer
//!
//! The composition root puts a [`Services`] bundle into Dioxus context.
//! Components build their controllers from it and never name an
//! infrastructure adapter.

use dioxus::prelude::*;
use std::sync::Arc;

use crate::ports::outbound::FormSubmitPort;
use crate::runner::config::SiteConfig;

#[derive(Clone)]
pub struct Services {
    pub config: Arc<SiteConfig>,
    /// Transport behind both forms
    pub submitter: Arc<dyn FormSubmitPort>,
}

impl Services {
    pub fn new(config: SiteConfig, submitter: Arc<dyn FormSubmitPort>) -> Self {
        Self {
            config: Arc::new(config),
            submitter,
        }
    }
}

/// Hook to access the service bundle from context
pub fn use_services() -> Services {
    use_context::<Services>()
}
