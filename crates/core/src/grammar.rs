//! Grammar correction seam
//!
//! The survey generator only depends on [`GrammarCorrector`]. Engines that
//! report suggestions as spans (LanguageTool and friends) can turn them into
//! [`Correction`]s and reuse [`apply_corrections`].

use async_trait::async_trait;

use crate::error::SurveyError;

/// An external grammar-correction engine
#[async_trait]
pub trait GrammarCorrector: Send + Sync {
    /// Return a corrected copy of `text`
    async fn correct(&self, text: &str) -> Result<String, SurveyError>;
}

/// A suggested replacement for `length` characters starting at `offset`
///
/// Offsets refer to the text the engine was given, in characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Correction {
    pub offset: usize,
    pub length: usize,
    pub replacement: String,
}

/// Apply corrections in order, shifting later offsets by earlier edits.
///
/// A correction is skipped when its span is out of range, or when the text at
/// its shifted position no longer matches the span it was reported against
/// (an earlier correction already rewrote it).
pub fn apply_corrections(text: &str, corrections: &[Correction]) -> String {
    let original: Vec<char> = text.chars().collect();
    let mut corrected = original.clone();
    let mut delta: isize = 0;

    for correction in corrections {
        let Some(error) = original.get(correction.offset..correction.offset + correction.length)
        else {
            continue;
        };

        let start = correction.offset as isize + delta;
        if start < 0 {
            continue;
        }
        let start = start as usize;
        let end = start + correction.length;
        if corrected.get(start..end) != Some(error) {
            continue;
        }

        let replacement: Vec<char> = correction.replacement.chars().collect();
        delta += replacement.len() as isize - correction.length as isize;
        corrected.splice(start..end, replacement);
    }

    corrected.into_iter().collect()
}
