//! Eligibility criteria retrieval from the trial registry

mod fetcher;
pub mod parse;

pub use fetcher::TrialFetcher;

use thiserror::Error;

/// Why criteria could not be fetched.
///
/// Callers outside this module treat every variant the same way; the
/// distinction only shows up in logs.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected status {status} from {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("Search page has no __NEXT_DATA__ script")]
    MissingScript,

    #[error("Search page payload is not valid JSON: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("No studies listed for this condition")]
    NoStudies,

    #[error("Detail page has no participation criteria")]
    MissingCriteria,
}

/// Lowercase the condition and replace each space with a hyphen
pub fn slugify(condition: &str) -> String {
    condition.to_lowercase().replace(' ', "-")
}
