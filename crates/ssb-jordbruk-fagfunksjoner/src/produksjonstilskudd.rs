//! Produksjonstilskudd - registry and queries for production subsidy codes

use crate::dataset;
use serde::{Deserialize, Serialize};
use shared::{
    DuplicateCodeError, KodelisteManifest, MeasurementUnit, Produksjonskode, Result,
    UnknownCategoryError,
};
use std::collections::BTreeSet;
use std::fmt;

/// Filter for code lookups, combinable field by field
#[derive(Debug, Clone, Default)]
pub struct CodeQuery {
    /// Match codes in any of these categories (None means no category filter)
    pub categories: Option<Vec<String>>,
    /// Match codes reported in this unit
    pub measured_in: Option<MeasurementUnit>,
    /// Match codes valid in this year
    pub valid_in: Option<u16>,
    /// Return code values with the "pk_" column prefix
    pub prefix: bool,
}

impl CodeQuery {
    /// Create an empty query that matches every code
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to codes in any of the given categories
    pub fn with_categories(mut self, categories: Vec<String>) -> Self {
        self.categories = Some(categories);
        self
    }

    /// Add a single category to the filter
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.categories
            .get_or_insert_with(Vec::new)
            .push(category.into());
        self
    }

    /// Restrict to codes reported in the given unit
    pub fn with_measurement(mut self, unit: MeasurementUnit) -> Self {
        self.measured_in = Some(unit);
        self
    }

    /// Restrict to codes valid in the given year
    pub fn for_year(mut self, year: u16) -> Self {
        self.valid_in = Some(year);
        self
    }

    /// Return code values with the "pk_" column prefix
    pub fn with_prefix(mut self) -> Self {
        self.prefix = true;
        self
    }
}

/// Registry totals, used for the CLI summary output
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KodelisteSummary {
    pub code_count: usize,
    pub category_count: usize,
}

/// Produksjonstilskudd holds the registered codes and their category index
#[derive(Debug, Clone)]
pub struct Produksjonstilskudd {
    /// All registered codes in registration order
    codes: Vec<Produksjonskode>,
    /// Sorted unique category groups across all codes
    categories: Vec<String>,
}

impl Produksjonstilskudd {
    /// Create a registry preloaded with the built-in codelist
    pub fn new() -> Self {
        let mut registry = Self::empty();
        // Built-in entries are unique and valid, see the dataset tests.
        registry.codes.extend(dataset::builtin_codes());
        registry.rebuild_categories();
        registry
    }

    /// Create a registry without any codes
    pub fn empty() -> Self {
        Self {
            codes: Vec::new(),
            categories: Vec::new(),
        }
    }

    /// Register a code after validating it
    pub fn register(&mut self, kode: Produksjonskode) -> Result<()> {
        kode.validate()?;
        if self.has_code(&kode.code) {
            return Err(DuplicateCodeError {
                code: kode.code.clone(),
            }
            .into());
        }
        self.codes.push(kode);
        self.rebuild_categories();
        Ok(())
    }

    /// Register several codes, stopping at the first invalid one
    pub fn register_all(&mut self, codes: impl IntoIterator<Item = Produksjonskode>) -> Result<()> {
        for kode in codes {
            self.register(kode)?;
        }
        Ok(())
    }

    fn rebuild_categories(&mut self) {
        let unique: BTreeSet<&String> = self.codes.iter().flat_map(|k| &k.groups).collect();
        self.categories = unique.into_iter().cloned().collect();
    }

    /// All registered codes in registration order
    pub fn codes(&self) -> &[Produksjonskode] {
        &self.codes
    }

    /// Number of registered codes
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Check whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Sorted unique categories across all registered codes
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Look up a code by its value
    pub fn get(&self, code: &str) -> Option<&Produksjonskode> {
        self.codes.iter().find(|k| k.code == code)
    }

    /// Check whether a code value is registered
    pub fn has_code(&self, code: &str) -> bool {
        self.get(code).is_some()
    }

    /// All code values in registration order
    pub fn get_codes(&self) -> Vec<String> {
        self.codes.iter().map(|k| k.code.clone()).collect()
    }

    /// Code values belonging to any of the given categories.
    ///
    /// Categories that are not in the registry match nothing.
    pub fn get_codes_in<S: AsRef<str>>(&self, categories: &[S]) -> Vec<String> {
        self.codes
            .iter()
            .filter(|k| k.in_any_group(categories))
            .map(|k| k.code.clone())
            .collect()
    }

    /// Like [`Produksjonstilskudd::get_codes_in`], but rejects categories
    /// that are not in the registry
    pub fn try_get_codes_in<S: AsRef<str>>(&self, categories: &[S]) -> Result<Vec<String>> {
        self.ensure_known_categories(categories)?;
        Ok(self.get_codes_in(categories))
    }

    fn ensure_known_categories<S: AsRef<str>>(&self, categories: &[S]) -> Result<()> {
        for category in categories {
            if !self.categories.iter().any(|c| c == category.as_ref()) {
                return Err(UnknownCategoryError {
                    category: category.as_ref().to_string(),
                    available: self.categories.clone(),
                }
                .into());
            }
        }
        Ok(())
    }

    /// Code values reported in the given unit
    pub fn get_codes_by_measurement(&self, unit: MeasurementUnit) -> Vec<String> {
        self.codes
            .iter()
            .filter(|k| k.measured_in == unit)
            .map(|k| k.code.clone())
            .collect()
    }

    /// Code values reported in the given unit, parsed from its lowercase name
    pub fn get_codes_by_measurement_str(&self, unit: &str) -> Result<Vec<String>> {
        let unit: MeasurementUnit = unit.parse()?;
        Ok(self.get_codes_by_measurement(unit))
    }

    /// Codes valid in the given year
    pub fn codes_valid_in(&self, year: u16) -> Vec<&Produksjonskode> {
        self.codes.iter().filter(|k| k.is_valid_in(year)).collect()
    }

    /// Code values matching every field of the query
    pub fn query(&self, query: &CodeQuery) -> Vec<String> {
        self.codes
            .iter()
            .filter(|k| match &query.categories {
                Some(categories) => k.in_any_group(categories),
                None => true,
            })
            .filter(|k| query.measured_in.map_or(true, |unit| k.measured_in == unit))
            .filter(|k| query.valid_in.map_or(true, |year| k.is_valid_in(year)))
            .map(|k| {
                if query.prefix {
                    k.prefixed()
                } else {
                    k.code.clone()
                }
            })
            .collect()
    }

    /// Like [`Produksjonstilskudd::query`], but rejects categories that
    /// are not in the registry
    pub fn try_query(&self, query: &CodeQuery) -> Result<Vec<String>> {
        if let Some(categories) = &query.categories {
            self.ensure_known_categories(categories)?;
        }
        Ok(self.query(query))
    }

    /// Follow replaced_by links from a code, in traversal order.
    ///
    /// Returns an empty list when the starting code is not registered.
    /// Successors that are referenced but not registered still appear in
    /// the chain, since a code can be superseded by one from a newer
    /// codelist. Circular links terminate.
    pub fn replacement_chain(&self, code: &str) -> Vec<String> {
        let mut chain = Vec::new();
        if !self.has_code(code) {
            return chain;
        }
        let mut visited = std::collections::HashSet::new();
        self.collect_replacements(code, &mut chain, &mut visited);
        chain
    }

    fn collect_replacements(
        &self,
        code: &str,
        chain: &mut Vec<String>,
        visited: &mut std::collections::HashSet<String>,
    ) {
        if visited.contains(code) {
            return; // Circular replacement protection
        }
        visited.insert(code.to_string());
        chain.push(code.to_string());

        if let Some(kode) = self.get(code) {
            for successor in &kode.replaced_by {
                self.collect_replacements(successor, chain, visited);
            }
        }
    }

    /// Registry totals
    pub fn summary(&self) -> KodelisteSummary {
        KodelisteSummary {
            code_count: self.codes.len(),
            category_count: self.categories.len(),
        }
    }

    /// Snapshot the registry as a versioned manifest
    pub fn to_manifest(&self, version: &str) -> KodelisteManifest {
        KodelisteManifest::new(self.codes.clone(), version)
    }
}

impl Default for Produksjonstilskudd {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Produksjonstilskudd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Produksjonstilskudd with {} Produksjonskoder registered.\nCodes are organized in a total of {} categories.",
            self.codes.len(),
            self.categories.len()
        )
    }
}
