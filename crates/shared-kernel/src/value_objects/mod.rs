// crates/shared-kernel/src/value_objects/mod.rs
pub mod amount;
pub mod region;

pub use amount::Amount;
pub use region::Region;
