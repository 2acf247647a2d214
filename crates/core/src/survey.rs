//! Survey question generation from numbered eligibility text

use std::fmt;
use std::sync::Arc;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::definitions::Definition;
use crate::error::SurveyError;
use crate::grammar::GrammarCorrector;
use crate::rephrase::rephrase_as_question;
use crate::simplify::TermSimplifier;

static LIST_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\.\s*").expect("valid list marker pattern"));

/// One generated yes/no question
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SurveyQuestion {
    /// Position of the source clause in the split text, 1-based
    pub index: usize,
    pub text: String,
}

impl fmt::Display for SurveyQuestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Question {}: {} (Yes/No)", self.index, self.text)
    }
}

/// Split eligibility text on numeric list markers (`1. `, `2. `, ...).
///
/// Returns trimmed, non-empty clauses paired with their position in the raw
/// split. Blank clauses are dropped without renumbering the rest. A blank
/// segment in front of the first marker is not counted at all.
pub fn split_clauses(text: &str) -> Vec<(usize, &str)> {
    let mut segments = LIST_MARKER.split(text).peekable();
    segments.next_if(|s| s.trim().is_empty());

    segments
        .enumerate()
        .map(|(i, segment)| (i + 1, segment.trim()))
        .filter(|(_, clause)| !clause.is_empty())
        .collect()
}

/// Runs simplify → rephrase → grammar-correct over every clause
#[derive(Clone)]
pub struct SurveyGenerator {
    corrector: Arc<dyn GrammarCorrector>,
}

impl SurveyGenerator {
    pub fn new(corrector: Arc<dyn GrammarCorrector>) -> Self {
        Self { corrector }
    }

    /// Generate questions for `content`. The first failing clause aborts the whole run.
    pub async fn generate(
        &self,
        content: &str,
        definitions: &[Definition],
    ) -> Result<Vec<SurveyQuestion>, SurveyError> {
        let simplifier = TermSimplifier::new(definitions)?;
        let mut questions = Vec::new();

        for (index, clause) in split_clauses(content) {
            let simplified = simplifier.simplify(clause);
            let rephrased = rephrase_as_question(&simplified);
            let text = self.corrector.correct(&rephrased).await?;
            questions.push(SurveyQuestion { index, text });
        }

        tracing::debug!(count = questions.len(), "Generated survey questions");
        Ok(questions)
    }
}
