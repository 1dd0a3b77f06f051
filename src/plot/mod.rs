//! ASCII rendering for plain-terminal output.

pub mod ascii;

pub use ascii::*;
