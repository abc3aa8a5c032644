//! Browsing the store catalogue: filters, URL contract, listing query,
//! incremental pagination and the local favorites set.

pub mod favorites;
pub mod filter;
pub mod query;
pub mod scroll;
pub mod state;
pub mod url_params;

pub use favorites::{FavoritesSet, FavoritesStorage, FAVORITES_STORAGE_KEY};
pub use filter::{tri_state_code, tri_state_from_code, FilterState, SortBy, SortOrder};
pub use query::{StoreListQuery, PAGE_SIZE};
pub use scroll::{is_near_bottom, SCROLL_THRESHOLD_PX};
pub use state::{FetchTicket, PageOutcome, PageState, StoreBrowserState};
