//! List/pagination/filter state machine of the store browser.
//!
//! The machine never performs I/O. Every transition that needs data returns a
//! [`FetchTicket`]; the caller runs the request and feeds the result back with
//! [`StoreBrowserState::apply_page`] or [`StoreBrowserState::apply_failure`].
//!
//! Each filter change bumps `generation`. Tickets carry the generation they
//! were issued under, so a response for an outdated filter set is dropped
//! instead of overwriting the list.

use super::filter::{FilterState, SortBy, SortOrder};
use super::query::StoreListQuery;
use crate::domain::a001_store::Store;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    /// 1-based page number of the last requested page
    pub page: u32,
    pub has_more: bool,
    pub loading: bool,
    pub generation: u64,
    pub last_error: Option<String>,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            page: 1,
            has_more: true,
            loading: false,
            generation: 0,
            last_error: None,
        }
    }
}

/// One listing request issued by the state machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub generation: u64,
    pub page: u32,
    pub query: StoreListQuery,
}

/// What a fetch result did to the list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageOutcome {
    /// Page 1 replaced the list (number of stores)
    Replaced(usize),
    /// A later page was appended (number of stores)
    Appended(usize),
    /// Empty page: no more pages for the current filters
    Exhausted,
    Failed,
    /// Response belongs to an older filter set and was ignored
    Stale,
}

#[derive(Debug, Clone, Default)]
pub struct StoreBrowserState {
    pub filters: FilterState,
    pub page: PageState,
    pub stores: Vec<Store>,
}

impl StoreBrowserState {
    /// Mount-time initialisation from `location.search`.
    ///
    /// Returns the state together with the single page-1 fetch for the
    /// hydrated filters.
    pub fn hydrate(query_string: &str) -> (Self, FetchTicket) {
        let mut state = Self {
            filters: FilterState::from_query_string(query_string),
            ..Default::default()
        };
        let ticket = state.reset();
        (state, ticket)
    }

    /// Applies `change` to the filters. When the filters actually changed,
    /// pagination and the list are reset and a page-1 fetch is returned.
    pub fn update_filters(&mut self, change: impl FnOnce(&mut FilterState)) -> Option<FetchTicket> {
        let mut next = self.filters.clone();
        change(&mut next);
        if next == self.filters {
            return None;
        }
        self.filters = next;
        Some(self.reset())
    }

    pub fn set_category(&mut self, category: Option<i64>) -> Option<FetchTicket> {
        self.update_filters(|f| f.category = category)
    }

    pub fn set_search_query(&mut self, search_query: String) -> Option<FetchTicket> {
        self.update_filters(|f| f.search_query = search_query)
    }

    /// Switches the sort field. Picking the current field again is a no-op,
    /// so an explicitly chosen direction survives.
    pub fn set_sort_by(&mut self, sort_by: SortBy) -> Option<FetchTicket> {
        if self.filters.sort_by == sort_by {
            return None;
        }
        self.update_filters(|f| f.set_sort_by(sort_by))
    }

    pub fn set_order(&mut self, order: SortOrder) -> Option<FetchTicket> {
        self.update_filters(|f| f.order = order)
    }

    pub fn set_cashback_enabled(&mut self, value: Option<bool>) -> Option<FetchTicket> {
        self.update_filters(|f| f.cashback_enabled = value)
    }

    pub fn set_promoted(&mut self, value: Option<bool>) -> Option<FetchTicket> {
        self.update_filters(|f| f.is_promoted = value)
    }

    /// Scroll reached the bottom: advance one page unless a fetch is in
    /// flight or the listing is exhausted.
    ///
    /// After a failed fetch the failed page is requested again instead of
    /// skipping ahead.
    pub fn request_next_page(&mut self) -> Option<FetchTicket> {
        if self.page.loading || !self.page.has_more {
            return None;
        }
        if self.page.last_error.is_none() {
            self.page.page += 1;
        }
        Some(self.start_fetch())
    }

    /// Re-issues the page that failed last. Dropped while a fetch is in flight.
    pub fn retry(&mut self) -> Option<FetchTicket> {
        if self.page.loading || self.page.last_error.is_none() {
            return None;
        }
        Some(self.start_fetch())
    }

    pub fn apply_page(&mut self, ticket: &FetchTicket, stores: Vec<Store>) -> PageOutcome {
        if ticket.generation != self.page.generation {
            return PageOutcome::Stale;
        }
        self.page.loading = false;
        self.page.last_error = None;

        if stores.is_empty() {
            self.page.has_more = false;
            return PageOutcome::Exhausted;
        }

        let count = stores.len();
        if ticket.page == 1 {
            self.stores = stores;
            PageOutcome::Replaced(count)
        } else {
            self.stores.extend(stores);
            PageOutcome::Appended(count)
        }
    }

    /// Records a failed fetch. List and `has_more` stay as they were.
    pub fn apply_failure(&mut self, ticket: &FetchTicket, error: String) -> PageOutcome {
        if ticket.generation != self.page.generation {
            return PageOutcome::Stale;
        }
        self.page.loading = false;
        self.page.last_error = Some(error);
        PageOutcome::Failed
    }

    pub fn is_loading(&self) -> bool {
        self.page.loading
    }

    pub fn has_more(&self) -> bool {
        self.page.has_more
    }

    fn reset(&mut self) -> FetchTicket {
        self.page = PageState {
            generation: self.page.generation + 1,
            ..Default::default()
        };
        self.stores.clear();
        self.start_fetch()
    }

    fn start_fetch(&mut self) -> FetchTicket {
        self.page.loading = true;
        FetchTicket {
            generation: self.page.generation,
            page: self.page.page,
            query: StoreListQuery::new(&self.filters, self.page.page),
        }
    }
}
