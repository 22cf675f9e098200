//! # Jordbruk Shared
//!
//! Common types for the SSB agriculture codelists.

pub mod error;
pub mod kode;
pub mod kodeliste;
pub mod measurement;

// Re-exports
pub use error::*;
pub use kode::*;
pub use kodeliste::*;
pub use measurement::*;
