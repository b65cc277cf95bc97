//! Discovery document loading and structural validation.
//!
//! The NetAlly export has the required shape
//! `{ "Detail": { "host_list": [ ... ] } }`. Syntax problems and missing
//! structure are the only fatal failures in the crate; everything below the
//! `host_list` level is handled entry-by-entry in the engine.
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("malformed JSON input: {0}")]
    MalformedInput(#[from] serde_json::Error),
    #[error("invalid document structure: missing or mistyped `{path}`")]
    Structure { path: &'static str },
}

/// A parsed discovery export, structurally unvalidated beyond JSON syntax.
#[derive(Debug)]
pub struct DiscoveryDocument {
    root: Value,
}

pub fn load(input: &str) -> Result<DiscoveryDocument, DocumentError> {
    let root: Value = serde_json::from_str(input)?;
    Ok(DiscoveryDocument { root })
}

impl DiscoveryDocument {
    /// Borrow the `Detail.host_list` array, checking the required shape.
    pub fn host_list(&self) -> Result<&Vec<Value>, DocumentError> {
        let detail = self
            .root
            .get("Detail")
            .and_then(Value::as_object)
            .ok_or(DocumentError::Structure { path: "Detail" })?;
        detail
            .get("host_list")
            .and_then(Value::as_array)
            .ok_or(DocumentError::Structure {
                path: "Detail.host_list",
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_rejects_non_json() {
        let err = load("not json").unwrap_err();
        assert!(matches!(err, DocumentError::MalformedInput(_)));
    }

    #[test]
    fn missing_detail_is_a_structure_error() {
        let doc = load(r#"{"Summary": {}}"#).unwrap();
        let err = doc.host_list().unwrap_err();
        assert!(matches!(err, DocumentError::Structure { path: "Detail" }));
    }

    #[test]
    fn detail_of_wrong_type_is_a_structure_error() {
        let doc = load(r#"{"Detail": 42}"#).unwrap();
        let err = doc.host_list().unwrap_err();
        assert!(matches!(err, DocumentError::Structure { path: "Detail" }));
    }

    #[test]
    fn missing_host_list_names_the_full_path() {
        let doc = load(r#"{"Detail": {}}"#).unwrap();
        let err = doc.host_list().unwrap_err();
        assert!(matches!(
            err,
            DocumentError::Structure {
                path: "Detail.host_list"
            }
        ));
        assert!(err.to_string().contains("Detail.host_list"));
    }

    #[test]
    fn host_list_of_wrong_type_is_a_structure_error() {
        let doc = load(r#"{"Detail": {"host_list": {}}}"#).unwrap();
        assert!(doc.host_list().is_err());
    }

    #[test]
    fn well_formed_document_exposes_the_list() {
        let doc = load(r#"{"Detail": {"host_list": [{"host_id": "h1"}]}}"#).unwrap();
        assert_eq!(doc.host_list().unwrap().len(), 1);
    }
}
