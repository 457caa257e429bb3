//! Read-side model of a serialized schema document.
//!
//! The generator deliberately does not depend on the builder crate: a
//! document is read as plain data, with `kind` kept as an open string so
//! field kinds introduced after this tool shipped degrade to `unknown`
//! instead of failing deserialization. Unrecognized properties are ignored.

use crate::error::ParseError;
use serde::Deserialize;
use std::path::Path;

/// A serialized schema document: top-level fields plus the reusable blocks
/// they reference.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaDocument {
    #[serde(default)]
    pub api_fields: Vec<DocumentField>,
    #[serde(default)]
    pub custom_fields: Vec<DocumentCustomField>,
}

/// One field of a document, top-level or inside a block. Only the
/// properties the generator consumes are modeled.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentField {
    #[serde(default)]
    pub field_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub required: Option<bool>,
    #[serde(default)]
    pub select_items: Option<Vec<DocumentSelectItem>>,
    #[serde(default)]
    pub multiple_select: Option<bool>,
    #[serde(default)]
    pub custom_field_created_at: Option<String>,
    #[serde(default)]
    pub custom_field_created_at_list: Option<Vec<String>>,
}

/// A select choice; only the literal value matters for type generation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DocumentSelectItem {
    #[serde(default)]
    pub value: String,
}

/// A reusable block as stored in `customFields`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentCustomField {
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub field_id: String,
    #[serde(default)]
    pub fields: Vec<DocumentField>,
}

impl SchemaDocument {
    /// Load a document from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ParseError> {
        let content = std::fs::read_to_string(path).map_err(|source| ParseError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ParseError::Json {
            path: path.to_path_buf(),
            source,
        })
    }
}
