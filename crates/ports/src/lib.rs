//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`source`]: access to delimited tabular sources (header + raw rows)
//!
//! The use-case layer only sees these traits, never a concrete reader.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod source;

pub use source::{DEFAULT_DELIMITER, LoadPlan, RawTable, RecordSource};
