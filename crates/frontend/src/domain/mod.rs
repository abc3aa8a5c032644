pub mod a001_store;
pub mod a002_category;
