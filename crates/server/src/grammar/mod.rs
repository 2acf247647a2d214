//! Grammar correction backends

pub mod languagetool;

pub use languagetool::LanguageToolClient;
