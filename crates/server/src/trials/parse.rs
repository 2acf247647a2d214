//! HTML extraction for the search and detail pages

use scraper::{Html, Selector};
use serde_json::Value as JsonValue;

use super::FetchError;

const NEXT_DATA_SELECTOR: &str = "script#__NEXT_DATA__";
const CRITERIA_SELECTOR: &str = "div.participation__criteria-wrapper";
const STUDY_ITEMS_POINTER: &str = "/props/pageProps/getStudies/items";

/// Return the relative `path` of the first study listed on a search page.
///
/// A study without a `path` field yields an empty string.
pub fn first_study_path(html: &str) -> Result<String, FetchError> {
    let payload = next_data(html)?;

    let first = payload
        .pointer(STUDY_ITEMS_POINTER)
        .and_then(JsonValue::as_array)
        .and_then(|items| items.first())
        .ok_or(FetchError::NoStudies)?;

    Ok(first
        .get("path")
        .and_then(JsonValue::as_str)
        .unwrap_or_default()
        .to_string())
}

/// Parse the JSON embedded in the page's `__NEXT_DATA__` script
fn next_data(html: &str) -> Result<JsonValue, FetchError> {
    let document = Html::parse_document(html);
    let selector = Selector::parse(NEXT_DATA_SELECTOR).expect("valid script selector");

    let script = document
        .select(&selector)
        .next()
        .ok_or(FetchError::MissingScript)?;
    let raw: String = script.text().collect();

    Ok(serde_json::from_str(&raw)?)
}

/// Visible text of the criteria wrapper: each text node trimmed, blanks dropped, space-joined
pub fn criteria_text(html: &str) -> Result<String, FetchError> {
    let document = Html::parse_document(html);
    let selector = Selector::parse(CRITERIA_SELECTOR).expect("valid criteria selector");

    let wrapper = document
        .select(&selector)
        .next()
        .ok_or(FetchError::MissingCriteria)?;

    Ok(wrapper
        .text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" "))
}
