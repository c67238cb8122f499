use std::sync::Arc;

use crate::ports::outbound::{FormSubmitPort, PlatformPort};
use crate::state::Platform;

/// Configuration types for the site runner.
pub mod config {
    use std::str::FromStr;

    use iwe_domain::FormMessages;
    use serde::{Deserialize, Serialize};

    pub const DEFAULT_CONTACT_ENDPOINT: &str = "/api/contact";
    pub const DEFAULT_NEWSLETTER_ENDPOINT: &str = "/api/newsletter";

    /// How form submissions leave the page
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
    #[serde(rename_all = "lowercase")]
    pub enum Transport {
        /// Wait a second and report success; no request is made
        #[default]
        Simulated,
        /// POST JSON to the configured endpoints
        Http,
    }

    impl FromStr for Transport {
        type Err = String;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            match s.trim().to_ascii_lowercase().as_str() {
                "simulated" => Ok(Self::Simulated),
                "http" => Ok(Self::Http),
                other => Err(format!("unknown transport: {other}")),
            }
        }
    }

    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct SiteConfig {
        pub contact_endpoint: String,
        pub newsletter_endpoint: String,
        pub transport: Transport,
        /// Prefix for relative endpoints; empty means same origin
        pub api_base_url: String,
        pub messages: FormMessages,
    }

    impl Default for SiteConfig {
        fn default() -> Self {
            Self {
                contact_endpoint: DEFAULT_CONTACT_ENDPOINT.to_string(),
                newsletter_endpoint: DEFAULT_NEWSLETTER_ENDPOINT.to_string(),
                transport: Transport::default(),
                api_base_url: String::new(),
                messages: FormMessages::default(),
            }
        }
    }

    impl SiteConfig {
        /// Defaults overridden by `IWE_*` environment variables
        pub fn from_env() -> Self {
            Self::from_lookup(|key| std::env::var(key).ok())
        }

        /// Defaults overridden by whatever `lookup` returns for each `IWE_*` key
        pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
            let mut config = Self::default();

            let string_overrides: [(&str, &mut String); 3] = [
                ("IWE_CONTACT_ENDPOINT", &mut config.contact_endpoint),
                ("IWE_NEWSLETTER_ENDPOINT", &mut config.newsletter_endpoint),
                ("IWE_API_BASE_URL", &mut config.api_base_url),
            ];
            for (key, slot) in string_overrides {
                if let Some(value) = lookup(key) {
                    *slot = value;
                }
            }

            if let Some(raw) = lookup("IWE_TRANSPORT") {
                match raw.parse() {
                    Ok(transport) => config.transport = transport,
                    Err(e) => tracing::warn!(error = %e, "Ignoring IWE_TRANSPORT"),
                }
            }

            let messages = &mut config.messages;
            let message_overrides: [(&str, &mut String); 8] = [
                ("IWE_MSG_SUCCESS", &mut messages.success),
                ("IWE_MSG_ERROR", &mut messages.error),
                ("IWE_MSG_VALIDATION_ERROR", &mut messages.validation_error),
                ("IWE_MSG_EMAIL_ERROR", &mut messages.email_error),
                ("IWE_MSG_SENDING", &mut messages.sending),
                ("IWE_MSG_SUBSCRIBED", &mut messages.subscribed),
                ("IWE_MSG_REQUIRED_FIELD", &mut messages.required_field),
                ("IWE_MSG_INVALID_EMAIL_FIELD", &mut messages.invalid_email_field),
            ];
            for (key, slot) in message_overrides {
                if let Some(value) = lookup(key) {
                    *slot = value;
                }
            }

            config
        }
    }

}

use config::{SiteConfig, Transport};

pub struct RunnerDeps {
    pub platform: Platform,
    pub config: SiteConfig,
}

/// Pick the form transport the configuration asks for
pub fn create_submitter(
    config: &SiteConfig,
    platform: Arc<dyn PlatformPort>,
) -> Arc<dyn FormSubmitPort> {
    match config.transport {
        Transport::Simulated => Arc::new(
            crate::infrastructure::simulated::SimulatedFormSubmitter::new(platform),
        ),
        Transport::Http => Arc::new(crate::infrastructure::http_client::HttpFormSubmitter::new(
            &config.api_base_url,
        )),
    }
}

pub fn run(deps: RunnerDeps) {
    let RunnerDeps { platform, config } = deps;

    // Wrap Platform in Arc<dyn PlatformPort> for UI layer abstraction
    let platform_port: Arc<dyn PlatformPort> = Arc::new(platform);
    let submitter = create_submitter(&config, platform_port.clone());

    tracing::info!(
        transport = ?config.transport,
        contact = %config.contact_endpoint,
        newsletter = %config.newsletter_endpoint,
        "Launching site"
    );

    #[allow(unused_mut)]
    let mut builder = dioxus::LaunchBuilder::new();

    #[cfg(not(target_arch = "wasm32"))]
    {
        let css = load_site_css();
        let head = format!("<style>{}</style>", css);
        let cfg = dioxus_desktop::Config::new().with_custom_head(head);
        builder = builder.with_cfg(cfg);
    }

    builder
        .with_context(platform_port)
        .with_context(crate::ui::presentation::Services::new(config, submitter))
        .launch(crate::ui::app);
}

#[cfg(not(target_arch = "wasm32"))]
fn load_site_css() -> String {
    const FALLBACK_CSS: &str = "";

    let css_path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/css/site.css");
    std::fs::read_to_string(css_path).unwrap_or_else(|_| FALLBACK_CSS.to_string())
}
