//! Replace medical terms with plain-language definitions

use crate::definitions::Definition;
use crate::error::SurveyError;
use crate::rules::{self, Rule};

/// Term simplifier built from an ordered definition list.
///
/// Each definition becomes one whole-word, case-insensitive rule. Rules run
/// in storage order, so a later definition is matched against text already
/// rewritten by earlier ones.
#[derive(Debug, Clone, Default)]
pub struct TermSimplifier {
    rules: Vec<Rule>,
}

impl TermSimplifier {
    pub fn new(definitions: &[Definition]) -> Result<Self, SurveyError> {
        let rules = definitions
            .iter()
            .filter(|d| !d.term.trim().is_empty())
            .map(|d| Rule::whole_word(&d.term.to_lowercase(), d.definition.as_str()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { rules })
    }

    pub fn simplify(&self, text: &str) -> String {
        rules::apply_all(&self.rules, text)
    }
}
