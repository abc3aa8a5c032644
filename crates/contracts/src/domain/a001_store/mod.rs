pub mod aggregate;

pub use aggregate::{AmountType, Store};
