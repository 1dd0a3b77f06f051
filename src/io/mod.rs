//! File output (JSON report export).

pub mod export;
