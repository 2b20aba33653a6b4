pub mod columns;
pub mod record;

pub use record::{SalesRecord, SalesRecordBuilder};
