//! LanguageTool HTTP API client

use async_trait::async_trait;
use serde::Deserialize;
use trial_survey_core::{Correction, GrammarCorrector, SurveyError, apply_corrections};

/// Client for a LanguageTool server (`POST /v2/check`)
#[derive(Clone)]
pub struct LanguageToolClient {
    http: reqwest::Client,
    base_url: String,
    language: String,
}

/// Response from `/v2/check`
#[derive(Debug, Deserialize)]
struct CheckResponse {
    #[serde(default)]
    matches: Vec<CheckMatch>,
}

/// One rule match. Offsets are UTF-16 code units of the submitted text.
#[derive(Debug, Deserialize)]
struct CheckMatch {
    offset: usize,
    length: usize,
    #[serde(default)]
    replacements: Vec<Replacement>,
}

#[derive(Debug, Deserialize)]
struct Replacement {
    value: String,
}

impl CheckResponse {
    /// First suggested replacement of every match that has one, with spans
    /// converted to character offsets into `text`
    fn into_corrections(self, text: &str) -> Vec<Correction> {
        self.matches
            .into_iter()
            .filter_map(|m| {
                let replacement = m.replacements.into_iter().next()?;
                let start = char_index(text, m.offset);
                let end = char_index(text, m.offset + m.length);
                Some(Correction {
                    offset: start,
                    length: end - start,
                    replacement: replacement.value,
                })
            })
            .collect()
    }
}

/// Character index of the first char starting at or after `utf16_offset`
fn char_index(text: &str, utf16_offset: usize) -> usize {
    let mut units = 0;
    for (index, c) in text.chars().enumerate() {
        if units >= utf16_offset {
            return index;
        }
        units += c.len_utf16();
    }
    text.chars().count()
}

impl LanguageToolClient {
    pub fn new(base_url: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            language: language.into(),
        }
    }

    /// Ask the server for corrections to `text`
    pub async fn check(&self, text: &str) -> Result<Vec<Correction>, SurveyError> {
        let url = format!("{}/v2/check", self.base_url);

        let response = self
            .http
            .post(&url)
            .form(&[("text", text), ("language", self.language.as_str())])
            .send()
            .await
            .map_err(|e| SurveyError::Grammar(format!("HTTP request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(SurveyError::Grammar(format!(
                "LanguageTool error ({}): {}",
                status, body
            )));
        }

        let check = response
            .json::<CheckResponse>()
            .await
            .map_err(|e| SurveyError::Grammar(format!("Failed to parse response: {}", e)))?;

        Ok(check.into_corrections(text))
    }
}

#[async_trait]
impl GrammarCorrector for LanguageToolClient {
    async fn correct(&self, text: &str) -> Result<String, SurveyError> {
        let corrections = self.check(text).await?;
        tracing::debug!(corrections = corrections.len(), "LanguageTool check complete");
        Ok(apply_corrections(text, &corrections))
    }
}
