//! Page URL as a projection of the browser filters.
//!
//! Read once on mount, then rewritten with `history.replaceState` after every
//! filter change, so no history entries pile up.

use web_sys::window;

/// `location.search` of the current page (with the leading `?`, or empty)
pub fn current_query_string() -> String {
    window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

/// Relative URL with `query` in place of the current search part. Path and
/// `#fragment` are carried over; an empty query drops the `?` entirely.
pub(crate) fn build_url(pathname: &str, query: &str, hash: &str) -> String {
    if query.is_empty() {
        format!("{}{}", pathname, hash)
    } else {
        format!("{}?{}{}", pathname, query, hash)
    }
}

/// Replaces the query part of the current URL with `query` (no leading `?`).
pub fn replace_query_string(query: &str) {
    let Some(w) = window() else { return };
    let location = w.location();

    // Only touch history when the URL actually changes
    let current_search = location.search().unwrap_or_default();
    if current_search.trim_start_matches('?') == query {
        return;
    }

    let pathname = location.pathname().unwrap_or_else(|_| "/".to_string());
    let hash = location.hash().unwrap_or_default();
    let new_url = build_url(&pathname, query, &hash);

    match w.history() {
        Ok(history) => {
            if let Err(e) =
                history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&new_url))
            {
                log::warn!("replaceState failed: {:?}", e);
            }
        }
        Err(e) => log::warn!("History API unavailable: {:?}", e),
    }
}
