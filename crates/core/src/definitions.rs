//! Medical term definitions loaded from a JSON file

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SurveyError;

/// A medical term and its plain-language definition
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Definition {
    pub term: String,
    pub definition: String,
}

/// On-disk shape of the definitions file: `{"definitions": [...]}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefinitionFile {
    #[serde(default)]
    pub definitions: Vec<Definition>,
}

impl DefinitionFile {
    /// Parse a definitions document. A missing `definitions` key yields an empty list.
    pub fn from_json(raw: &str) -> Result<Self, SurveyError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Read and parse a definitions file from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SurveyError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_definitions_in_storage_order() {
        let file = DefinitionFile::from_json(
            r#"{"definitions": [
                {"term": "Hypertension", "definition": "high blood pressure"},
                {"term": "edema", "definition": "swelling"}
            ]}"#,
        )
        .unwrap();

        assert_eq!(file.definitions.len(), 2);
        assert_eq!(file.definitions[0].term, "Hypertension");
        assert_eq!(file.definitions[1].definition, "swelling");
    }

    #[test]
    fn missing_key_is_empty() {
        let file = DefinitionFile::from_json("{}").unwrap();
        assert!(file.definitions.is_empty());
    }

    #[test]
    fn malformed_document_is_rejected() {
        let err = DefinitionFile::from_json(r#"{"definitions": [{"term": 1}]}"#).unwrap_err();
        assert!(matches!(err, SurveyError::DefinitionsFormat(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = DefinitionFile::load("/nonexistent/definitions.json").unwrap_err();
        assert!(matches!(err, SurveyError::DefinitionsIo(_)));
    }
}
