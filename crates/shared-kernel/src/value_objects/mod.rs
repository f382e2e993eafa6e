// crates/shared-kernel/src/value_objects/mod.rs
pub mod length;
pub mod quantity;

pub use length::{FeetInches, INCHES_PER_FOOT, Inches};
pub use quantity::Quantity;
