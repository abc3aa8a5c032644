//! Common serde helpers shared by the listing DTOs

pub mod amount;
pub mod flag;

pub use amount::deserialize_lenient_amount;
pub use flag::deserialize_flag;
