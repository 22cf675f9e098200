//! Codelist document and manifest formats

use crate::error::Result;
use crate::kode::Produksjonskode;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// On-disk codelist document (JSON or YAML)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KodelisteDocument {
    /// Version label of the document, e.g. "2024"
    pub version: String,

    /// Codes supplied by the document
    #[serde(default)]
    pub codes: Vec<Produksjonskode>,
}

impl KodelisteDocument {
    /// Load a codelist document from a JSON or YAML file.
    ///
    /// The format is picked from the file extension; anything that is not
    /// `.json` is parsed as YAML.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        let document: Self = if is_json {
            serde_json::from_str(&content)?
        } else {
            serde_yaml::from_str(&content)?
        };
        Ok(document)
    }

    /// Validate every code in the document
    pub fn validate(&self) -> Result<()> {
        for kode in &self.codes {
            kode.validate()?;
        }
        Ok(())
    }

    /// Code values in document order
    pub fn code_values(&self) -> Vec<&str> {
        self.codes.iter().map(|kode| kode.code.as_str()).collect()
    }
}

/// Generated snapshot of a full codelist
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KodelisteManifest {
    /// All codes in the snapshot
    pub codes: Vec<Produksjonskode>,

    /// Version label of the snapshot
    pub version: String,

    /// Generation timestamp (RFC 3339)
    pub generated_at: String,
}

impl KodelisteManifest {
    /// Build a manifest stamped with the current time
    pub fn new(codes: Vec<Produksjonskode>, version: impl Into<String>) -> Self {
        Self {
            codes,
            version: version.into(),
            generated_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}
