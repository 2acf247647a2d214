//! Two-step fetch: condition search page, then the first trial's detail page

use reqwest::StatusCode;

use super::{FetchError, parse, slugify};

/// HTTP client for the trial registry
#[derive(Clone)]
pub struct TrialFetcher {
    http: reqwest::Client,
    base_url: String,
}

impl TrialFetcher {
    /// Create a fetcher for the registry at `base_url` (no trailing slash)
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Search page URL for a condition name
    pub fn search_url(&self, condition: &str) -> String {
        format!("{}/trials/{}", self.base_url, slugify(condition))
    }

    /// Fetch the eligibility criteria text of the first trial listed for `condition`
    pub async fn fetch_criteria(&self, condition: &str) -> Result<String, FetchError> {
        let search_url = self.search_url(condition);
        tracing::info!(url = %search_url, "Searching trials");
        let search_html = self.get_page(&search_url).await?;

        let path = parse::first_study_path(&search_html)?;
        let trial_url = format!("{}{}", self.base_url, path);
        tracing::info!(url = %trial_url, "Fetching trial detail page");
        let trial_html = self.get_page(&trial_url).await?;

        parse::criteria_text(&trial_html)
    }

    /// Like [`fetch_criteria`](Self::fetch_criteria), with every failure collapsed into `None`
    pub async fn find_criteria(&self, condition: &str) -> Option<String> {
        match self.fetch_criteria(condition).await {
            Ok(text) => Some(text),
            Err(e) => {
                tracing::warn!(error = %e, condition = condition, "Unable to fetch trial criteria");
                None
            }
        }
    }

    async fn get_page(&self, url: &str) -> Result<String, FetchError> {
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        Ok(response.text().await?)
    }
}
