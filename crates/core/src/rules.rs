//! Ordered regex substitution rules
//!
//! Both the term simplifier and the question rephraser are expressed as a
//! list of rules applied strictly in sequence, each one seeing the output
//! of the rule before it.

use regex::{NoExpand, Regex, RegexBuilder};

use crate::error::SurveyError;

/// A single substitution: every match of `pattern` becomes `replacement`
#[derive(Debug, Clone)]
pub struct Rule {
    pattern: Regex,
    replacement: String,
    /// Lowercase substring that must occur in the lowercased text for the rule to run
    guard: Option<String>,
}

impl Rule {
    /// Build a rule from a regex source.
    pub fn new(
        pattern: &str,
        replacement: impl Into<String>,
        case_insensitive: bool,
    ) -> Result<Self, SurveyError> {
        let pattern = RegexBuilder::new(pattern)
            .case_insensitive(case_insensitive)
            .build()?;
        Ok(Self {
            pattern,
            replacement: replacement.into(),
            guard: None,
        })
    }

    /// Build a case-insensitive rule matching `word` literally between word boundaries
    pub fn whole_word(word: &str, replacement: impl Into<String>) -> Result<Self, SurveyError> {
        Self::new(&format!(r"\b{}\b", regex::escape(word)), replacement, true)
    }

    /// Only run the rule when `needle` occurs in the lowercased text
    pub fn guarded_by(mut self, needle: &str) -> Self {
        self.guard = Some(needle.to_lowercase());
        self
    }

    /// Apply the rule. The replacement is inserted verbatim, `$` is not expanded.
    pub fn apply(&self, text: &str) -> String {
        if let Some(needle) = &self.guard {
            if !text.to_lowercase().contains(needle.as_str()) {
                return text.to_string();
            }
        }
        self.pattern
            .replace_all(text, NoExpand(&self.replacement))
            .into_owned()
    }
}

/// Apply `rules` in order, feeding each rule the previous result
pub fn apply_all<'a>(rules: impl IntoIterator<Item = &'a Rule>, text: &str) -> String {
    rules
        .into_iter()
        .fold(text.to_string(), |acc, rule| rule.apply(&acc))
}
