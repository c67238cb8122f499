//! IWE site - composition root binary.

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use iwe_site::runner::{config::SiteConfig, run, RunnerDeps};

fn main() -> anyhow::Result<()> {
    #[cfg(not(target_arch = "wasm32"))]
    {
        // A missing .env is fine; a malformed one is not
        match dotenvy::dotenv() {
            Ok(_) => {}
            Err(e) if e.not_found() => {}
            Err(e) => return Err(anyhow::Error::new(e).context("failed to load .env")),
        }

        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "iwe_site=debug,dioxus=info".into()),
            )
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    }

    tracing::info!("Starting IWE site");

    #[cfg(not(target_arch = "wasm32"))]
    let config = SiteConfig::from_env();
    #[cfg(target_arch = "wasm32")]
    let config = SiteConfig::default();

    let platform = iwe_site::infrastructure::create_platform();

    run(RunnerDeps { platform, config });
    Ok(())
}
