pub mod selector;

pub use selector::CategorySelector;
