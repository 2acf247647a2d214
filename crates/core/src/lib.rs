//! trial-survey-core: eligibility text to survey question pipeline
//!
//! This crate holds the text logic shared by the server: the definition
//! store, the term simplifier, the question rephraser, the grammar
//! corrector seam and the survey generator that chains them.

pub mod definitions;
pub mod error;
pub mod grammar;
pub mod rephrase;
pub mod rules;
pub mod simplify;
pub mod survey;

pub use definitions::{Definition, DefinitionFile};
pub use error::SurveyError;
pub use grammar::{Correction, GrammarCorrector, apply_corrections};
pub use rephrase::rephrase_as_question;
pub use simplify::TermSimplifier;
pub use survey::{SurveyGenerator, SurveyQuestion, split_clauses};
