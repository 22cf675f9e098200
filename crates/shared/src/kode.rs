//! Produksjonskode entity for the produksjonstilskudd codelist

use crate::error::{InvalidCodeError, JordbrukError, Result};
use crate::measurement::MeasurementUnit;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Column prefix used when codes are materialized as dataframe columns
pub const PK_PREFIX: &str = "pk_";

/// A single production subsidy code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Produksjonskode {
    /// Three digit code value, e.g. "120"
    pub code: String,
    /// Short Norwegian label, e.g. "Melkekyr"
    pub label: String,
    /// Longer free-text description
    #[serde(default)]
    pub description: Option<String>,
    /// Category groups the code belongs to, e.g. "storfe"
    #[serde(default)]
    pub groups: Vec<String>,
    /// Unit the code is reported in
    pub measured_in: MeasurementUnit,
    /// First year the code is valid, inclusive
    #[serde(default)]
    pub valid_from: Option<u16>,
    /// Last year the code is valid, inclusive
    #[serde(default)]
    pub valid_to: Option<u16>,
    /// Codes this code replaced
    #[serde(default)]
    pub replaces: Vec<String>,
    /// Codes that replaced this code
    #[serde(default)]
    pub replaced_by: Vec<String>,
}

impl Produksjonskode {
    /// Create a new validated produksjonskode
    pub fn new(
        code: impl Into<String>,
        label: impl Into<String>,
        groups: Vec<String>,
        measured_in: MeasurementUnit,
    ) -> Result<Self> {
        let kode = Self {
            code: code.into(),
            label: label.into(),
            description: None,
            groups,
            measured_in,
            valid_from: None,
            valid_to: None,
            replaces: Vec::new(),
            replaced_by: Vec::new(),
        };
        kode.validate()?;
        Ok(kode)
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the validity window
    pub fn with_validity(mut self, valid_from: Option<u16>, valid_to: Option<u16>) -> Self {
        self.valid_from = valid_from;
        self.valid_to = valid_to;
        self
    }

    /// Set the codes this code replaced
    pub fn with_replaces(mut self, codes: Vec<String>) -> Self {
        self.replaces = codes;
        self
    }

    /// Set the codes that replaced this code
    pub fn with_replaced_by(mut self, codes: Vec<String>) -> Self {
        self.replaced_by = codes;
        self
    }

    /// Check the codelist invariants.
    ///
    /// Deserialized codes bypass [`Produksjonskode::new`], so loaders call
    /// this before accepting a document.
    pub fn validate(&self) -> Result<()> {
        if self.code.len() != 3 || !self.code.chars().all(|c| c.is_ascii_digit()) {
            return Err(InvalidCodeError {
                code: self.code.clone(),
            }
            .into());
        }
        if self.groups.iter().any(|group| group.trim().is_empty()) {
            return Err(JordbrukError::EmptyGroup {
                code: self.code.clone(),
            });
        }
        Ok(())
    }

    /// Check membership in a single category group (case sensitive)
    pub fn in_group(&self, group: &str) -> bool {
        self.groups.iter().any(|g| g == group)
    }

    /// Check membership in any of the given category groups
    pub fn in_any_group<S: AsRef<str>>(&self, groups: &[S]) -> bool {
        groups.iter().any(|wanted| self.in_group(wanted.as_ref()))
    }

    /// Check whether the code is valid in the given year.
    ///
    /// An open end of the validity window matches every year.
    pub fn is_valid_in(&self, year: u16) -> bool {
        self.valid_from.map_or(true, |from| year >= from)
            && self.valid_to.map_or(true, |to| year <= to)
    }

    /// Code value with the dataframe column prefix, e.g. "pk_120"
    pub fn prefixed(&self) -> String {
        format!("{}{}", PK_PREFIX, self.code)
    }
}

fn format_year(year: Option<u16>) -> String {
    year.map(|y| y.to_string()).unwrap_or_else(|| "N/A".to_string())
}

fn format_code_list(codes: &[String]) -> String {
    if codes.is_empty() {
        "None".to_string()
    } else {
        codes.join(", ")
    }
}

impl fmt::Display for Produksjonskode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Produksjonskode {}: {}", self.code, self.label)?;
        if let Some(description) = &self.description {
            writeln!(f, "  Description: {}", description)?;
        }
        writeln!(f, "  Groups: {}", format_code_list(&self.groups))?;
        writeln!(f, "  Measured in: {}", self.measured_in)?;
        writeln!(f, "  Valid from: {}", format_year(self.valid_from))?;
        writeln!(f, "  Valid to: {}", format_year(self.valid_to))?;
        writeln!(f, "  Replaces: {}", format_code_list(&self.replaces))?;
        write!(f, "  Replaced by: {}", format_code_list(&self.replaced_by))
    }
}
