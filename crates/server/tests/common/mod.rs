//! Shared helpers: a stand-in trial registry and stub grammar correctors.

#![allow(dead_code)]

use std::path::PathBuf;

use async_trait::async_trait;
use axum::{Router, http::StatusCode, response::Html, routing::get};
use trial_survey_core::{GrammarCorrector, SurveyError};
use trial_survey_server::config::Config;

pub const DIABETES_CRITERIA: &str = "1. Individuals with severe pain. 2. History of diagnosis.";

/// Returns its input unchanged
pub struct IdentityCorrector;

#[async_trait]
impl GrammarCorrector for IdentityCorrector {
    async fn correct(&self, text: &str) -> Result<String, SurveyError> {
        Ok(text.to_string())
    }
}

/// Always fails, like an unreachable engine
pub struct DownCorrector;

#[async_trait]
impl GrammarCorrector for DownCorrector {
    async fn correct(&self, _text: &str) -> Result<String, SurveyError> {
        Err(SurveyError::Grammar("connection refused".to_string()))
    }
}

fn search_page(items: &str) -> Html<String> {
    Html(format!(
        r#"<html><head><title>Trials</title></head><body>
        <div id="__next">Results</div>
        <script id="__NEXT_DATA__" type="application/json">{{"props":{{"pageProps":{{"getStudies":{{"items":{items}}}}}}}}}</script>
        </body></html>"#
    ))
}

fn detail_page(criteria: &str) -> Html<String> {
    Html(format!(
        r#"<html><body>
        <section class="participation">
          <div class="participation__criteria-wrapper">{criteria}</div>
        </section>
        </body></html>"#
    ))
}

/// Router mimicking the registry's search and detail pages
fn registry_router() -> Router {
    Router::new()
        .route(
            "/trials/type-2-diabetes",
            get(|| async { search_page(r#"[{"path":"/trials/type-2-diabetes/study-1","title":"A"},{"path":"/trials/type-2-diabetes/study-2"}]"#) }),
        )
        .route(
            "/trials/type-2-diabetes/study-1",
            get(|| async {
                detail_page(
                    "<ul><li>1. Individuals with severe pain.</li>\
                     <li>2. History <em>of</em> diagnosis.</li></ul>",
                )
            }),
        )
        .route(
            "/trials/no-script",
            get(|| async { Html("<html><body><div id=\"__next\">Results</div></body></html>") }),
        )
        .route("/trials/no-studies", get(|| async { search_page("[]") }))
        .route(
            "/trials/bad-json",
            get(|| async {
                Html(r#"<script id="__NEXT_DATA__" type="application/json">{"props":</script>"#)
            }),
        )
        .route(
            "/trials/no-criteria",
            get(|| async { search_page(r#"[{"path":"/trials/no-criteria/study-1"}]"#) }),
        )
        .route(
            "/trials/no-criteria/study-1",
            get(|| async { Html("<html><body><div class=\"summary\">Closed</div></body></html>") }),
        )
        .route(
            "/trials/missing-detail",
            get(|| async { search_page(r#"[{"path":"/trials/missing-detail/gone"}]"#) }),
        )
        .route(
            "/trials/server-error",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        )
}

/// Serve `router` on an ephemeral local port and return its base URL
pub async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Failed to read local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("Test server failed");
    });
    format!("http://{}", addr)
}

/// Start the stand-in registry and return its base URL
pub async fn start_registry() -> String {
    serve(registry_router()).await
}

/// Write a definitions file to a unique temp path
pub fn write_definitions(json: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("definitions-{}.json", uuid::Uuid::new_v4()));
    std::fs::write(&path, json).expect("Failed to write definitions file");
    path
}

/// Configuration pointing at the stand-in registry
pub fn test_config(registry_url: &str, definitions_path: &std::path::Path) -> Config {
    Config {
        bind_address: "127.0.0.1:0".to_string(),
        definitions_path: definitions_path.display().to_string(),
        trials_base_url: registry_url.to_string(),
        languagetool_url: "http://127.0.0.1:9".to_string(), // unused, correctors are stubbed
        languagetool_language: "en-US".to_string(),
    }
}
