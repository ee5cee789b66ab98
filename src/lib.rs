pub mod api; // HTTP surface
pub mod config;
pub mod core_state; // Shared engine state
pub mod models;
pub mod surveillance; // Syndromes, outbreaks, feedback
pub mod triage; // Normalizer, knowledge base, classifier

use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Initialize tracing. `RUST_LOG` wins over the built-in filter.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();
}

/// Run the service until Ctrl-C.
pub async fn run() -> Result<(), api::ServerError> {
    init_tracing();

    let service = config::ServiceConfig::from_env()?;
    let core = Arc::new(core_state::CoreState::with_config(service.engine));
    tracing::info!(
        bind = %service.bind_addr,
        default_location = %core.config().default_location,
        outbreak_threshold = core.config().outbreak_high_threshold,
        "{} starting v{}",
        config::APP_NAME,
        config::APP_VERSION
    );

    let mut server = api::start_api_server(core, service.bind_addr).await?;
    tracing::info!(
        session_id = %server.session.session_id,
        started_at = %server.session.started_at,
        "Serving on {}",
        server.session.base_url()
    );

    tokio::signal::ctrl_c()
        .await
        .map_err(api::ServerError::Signal)?;

    server.shutdown();
    Ok(())
}
