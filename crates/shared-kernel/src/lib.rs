// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{
    ErrorContext, InfraResult, InfrastructureError, PresentationError, PresentationResult, Result,
    SalesSummaryError,
};

pub mod error;
pub mod value_objects;

pub use value_objects::{Amount, Region};
