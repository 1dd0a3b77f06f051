//! Domain types used throughout the calculator.
//!
//! This module defines:
//!
//! - input representations (`InputMode`, `FractionInput`, `CarrierInput`)
//! - computed distributions (`PairingDistribution`, `OutcomeDistribution`)
//! - the JSON export schema (`ReportFile`)

pub mod types;

pub use types::*;
