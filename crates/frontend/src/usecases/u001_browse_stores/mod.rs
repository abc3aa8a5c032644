pub mod favorites_storage;
pub mod scroll_observer;
pub mod url_sync;
pub mod view;

pub use view::StoreBrowser;
