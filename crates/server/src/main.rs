//! trial-survey-server: eligibility survey HTTP server binary entrypoint.

use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use trial_survey_core::DefinitionFile;
use trial_survey_server::config::Config;
use trial_survey_server::grammar::LanguageToolClient;

#[tokio::main]
async fn main() {
    init_tracing();

    // Load configuration
    let config = Config::from_env();

    // Fail fast on a broken definitions file; it is re-read per request.
    match DefinitionFile::load(&config.definitions_path) {
        Ok(file) => tracing::info!(
            path = %config.definitions_path,
            count = file.definitions.len(),
            "Medical definitions loaded"
        ),
        Err(e) => {
            tracing::error!(path = %config.definitions_path, error = %e, "Cannot load medical definitions");
            std::process::exit(1);
        }
    }

    tracing::info!(url = %config.trials_base_url, "Trial registry");
    tracing::info!(
        url = %config.languagetool_url,
        language = %config.languagetool_language,
        "LanguageTool grammar correction"
    );

    let corrector = Arc::new(LanguageToolClient::new(
        config.languagetool_url.clone(),
        config.languagetool_language.clone(),
    ));

    // Build application
    let app = trial_survey_server::build_app(&config, corrector);

    // Start server
    let addr: SocketAddr = config.bind_address.parse().expect("Invalid bind address");
    tracing::info!("Starting survey server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Server shutdown complete");
}

/// JSON logs, filtered by `RUST_LOG`
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().json())
        .init();
}

/// Resolve once Ctrl+C or SIGTERM arrives
async fn shutdown_signal() {
    let interrupt = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Cannot listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Cannot listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    let signal = tokio::select! {
        _ = interrupt => "SIGINT",
        _ = terminate => "SIGTERM",
    };
    tracing::info!(signal, "Shutdown signal received, draining connections");
}
