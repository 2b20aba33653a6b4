// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod delimited;
pub mod persistence;

pub use delimited::DelimitedFileSource;
