use thiserror::Error;

/// Errors raised by the survey pipeline
#[derive(Debug, Error)]
pub enum SurveyError {
    #[error("Failed to read definitions file: {0}")]
    DefinitionsIo(#[from] std::io::Error),

    #[error("Invalid definitions file: {0}")]
    DefinitionsFormat(#[from] serde_json::Error),

    #[error("Invalid substitution pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Grammar correction failed: {0}")]
    Grammar(String),
}
