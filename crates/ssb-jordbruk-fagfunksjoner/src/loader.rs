//! KodelisteLoader - load codelist documents from JSON/YAML files

use crate::produksjonstilskudd::Produksjonstilskudd;
use shared::{KodelisteDocument, KodelisteManifest, Produksjonskode, Result};
use std::path::Path;

/// Codelist loader
#[derive(Debug, Default)]
pub struct KodelisteLoader {
    codes: Vec<Produksjonskode>,
}

impl KodelisteLoader {
    /// Create a new KodelisteLoader
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every codelist document in a directory.
    ///
    /// Files without a `.json`, `.yaml` or `.yml` extension are skipped.
    /// A missing directory is not an error. Returns the number of codes
    /// loaded.
    pub fn load_from_directory(&mut self, dir: &Path) -> Result<usize> {
        if !dir.exists() {
            return Ok(0);
        }

        let mut loaded = 0;
        for entry in std::fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();

            if !path.is_file() {
                continue;
            }
            let is_codelist = path
                .extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| matches!(ext, "json" | "yaml" | "yml"))
                .unwrap_or(false);
            if is_codelist {
                loaded += self.load_file(&path)?;
            }
        }

        Ok(loaded)
    }

    /// Load a single codelist document.
    ///
    /// The document is validated before its codes are accepted. Returns
    /// the number of codes loaded.
    pub fn load_file(&mut self, path: &Path) -> Result<usize> {
        let document = KodelisteDocument::from_file(path)?;
        document.validate()?;
        let count = document.codes.len();
        self.codes.extend(document.codes);
        Ok(count)
    }

    /// Codes loaded so far
    pub fn codes(&self) -> &[Produksjonskode] {
        &self.codes
    }

    /// Register every loaded code in a registry.
    ///
    /// Stops at the first duplicate, so loading the same document twice
    /// is an error.
    pub fn apply_to(&self, registry: &mut Produksjonstilskudd) -> Result<()> {
        registry.register_all(self.codes.iter().cloned())
    }

    /// Turn the loaded codes into a standalone registry
    pub fn into_registry(self) -> Result<Produksjonstilskudd> {
        let mut registry = Produksjonstilskudd::empty();
        registry.register_all(self.codes)?;
        Ok(registry)
    }

    /// Generate a manifest of the loaded codes
    pub fn to_manifest(&self, version: &str) -> KodelisteManifest {
        KodelisteManifest::new(self.codes.clone(), version)
    }
}
