//! # SSB Jordbruk Fagfunksjoner
//!
//! Subject matter functions for agricultural statistics at Statistics
//! Norway. Ships the produksjonstilskudd codelist with category and
//! measurement queries, and a loader for supplementary codelist
//! documents.

pub mod dataset;
pub mod loader;
pub mod produksjonstilskudd;

// Re-exports
pub use loader::KodelisteLoader;
pub use produksjonstilskudd::{CodeQuery, KodelisteSummary, Produksjonstilskudd};
pub use shared::{
    JordbrukError, KodelisteDocument, KodelisteManifest, MeasurementUnit, Produksjonskode,
    Result, PK_PREFIX,
};
