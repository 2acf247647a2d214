//! trial-survey-server library crate
//!
//! Exposes `build_app`, `config` and the outbound clients for integration
//! tests. The actual binary entrypoint is in `main.rs`.

pub mod config;
mod error;
pub mod grammar;
mod middleware;
mod routes;
pub mod trials;

use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use axum::{Extension, Router, middleware as axum_mw, routing::get};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tower_http::trace::TraceLayer;
use trial_survey_core::{Definition, DefinitionFile, GrammarCorrector, SurveyError, SurveyGenerator};

use config::Config;
use trials::TrialFetcher;

pub use routes::survey::FETCH_FAILED_MESSAGE;

/// Shared per-process services handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub(crate) definitions_path: PathBuf,
    pub(crate) fetcher: TrialFetcher,
    pub(crate) generator: SurveyGenerator,
}

impl AppState {
    pub(crate) fn new(config: &Config, corrector: Arc<dyn GrammarCorrector>) -> Self {
        Self {
            definitions_path: PathBuf::from(&config.definitions_path),
            fetcher: TrialFetcher::new(config.trials_base_url.clone()),
            generator: SurveyGenerator::new(corrector),
        }
    }
}

/// Read the definitions file without blocking the runtime
pub(crate) async fn load_definitions(path: &Path) -> Result<Vec<Definition>, SurveyError> {
    let raw = tokio::fs::read_to_string(path).await?;
    Ok(DefinitionFile::from_json(&raw)?.definitions)
}

/// Handle to the process-wide Prometheus recorder, installed on first use.
///
/// Every router built in the process renders the same recorder on /metrics.
fn prometheus_handle() -> PrometheusHandle {
    static HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

    HANDLE
        .get_or_init(|| {
            let recorder = PrometheusBuilder::new().build_recorder();
            let handle = recorder.handle();
            if let Err(e) = metrics::set_global_recorder(recorder) {
                tracing::warn!(error = %e, "Another metrics recorder is already installed");
            }
            handle
        })
        .clone()
}

/// Build the full application router with all routes and middleware.
///
/// Extracted from `main()` so integration tests can construct the app
/// without binding to a TCP port, and with a stand-in grammar corrector.
pub fn build_app(config: &Config, corrector: Arc<dyn GrammarCorrector>) -> Router {
    let state = AppState::new(config, corrector);

    let prometheus_handle = prometheus_handle();

    Router::new()
        .route(
            "/",
            get(routes::survey::form).post(routes::survey::submit),
        )
        .route("/health", get(routes::health::check))
        .route("/metrics", get(routes::metrics::get))
        .layer(Extension(prometheus_handle))
        .with_state(state)
        .layer(axum_mw::from_fn(middleware::request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(axum_mw::from_fn(middleware::metrics_middleware))
}
