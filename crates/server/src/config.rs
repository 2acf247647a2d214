//! Server configuration

/// Server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_address: String,
    /// JSON file holding `{"definitions": [...]}`, read on every submission
    pub definitions_path: String,
    /// Origin of the trial registry, without a trailing slash
    pub trials_base_url: String,
    /// LanguageTool server, without a trailing slash
    pub languagetool_url: String,
    pub languagetool_language: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            bind_address: std::env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:8080".into()),
            definitions_path: std::env::var("DEFINITIONS_PATH")
                .unwrap_or_else(|_| "data.json".into()),
            trials_base_url: trim_slash(
                std::env::var("TRIALS_BASE_URL")
                    .unwrap_or_else(|_| "https://unitytrials.org".into()),
            ),
            languagetool_url: trim_slash(
                std::env::var("LANGUAGETOOL_URL")
                    .unwrap_or_else(|_| "http://localhost:8081".into()),
            ),
            languagetool_language: std::env::var("LANGUAGETOOL_LANGUAGE")
                .unwrap_or_else(|_| "en-US".into()),
        }
    }
}

fn trim_slash(url: String) -> String {
    url.trim_end_matches('/').to_string()
}
