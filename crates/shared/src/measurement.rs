//! Measurement units used by produksjonskoder

use crate::error::InvalidMeasurementUnitError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unit a produksjonskode is reported in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementUnit {
    /// Head count (animals, plants, bee colonies)
    Antall,
    /// Area in decares
    Dekar,
    /// Weight in kilograms
    Kilo,
}

impl MeasurementUnit {
    /// All units accepted by the codelist
    pub const ALL: [MeasurementUnit; 3] = [
        MeasurementUnit::Antall,
        MeasurementUnit::Dekar,
        MeasurementUnit::Kilo,
    ];

    /// Lowercase name as it appears in codelist documents
    pub fn as_str(&self) -> &'static str {
        match self {
            MeasurementUnit::Antall => "antall",
            MeasurementUnit::Dekar => "dekar",
            MeasurementUnit::Kilo => "kilo",
        }
    }

    /// Names of all valid units, for error messages
    pub fn valid_unit_names() -> Vec<String> {
        Self::ALL.iter().map(|unit| unit.as_str().to_string()).collect()
    }
}

impl fmt::Display for MeasurementUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MeasurementUnit {
    type Err = InvalidMeasurementUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "antall" => Ok(MeasurementUnit::Antall),
            "dekar" => Ok(MeasurementUnit::Dekar),
            "kilo" => Ok(MeasurementUnit::Kilo),
            _ => Err(InvalidMeasurementUnitError {
                unit: s.to_string(),
                valid_units: MeasurementUnit::valid_unit_names(),
            }),
        }
    }
}
