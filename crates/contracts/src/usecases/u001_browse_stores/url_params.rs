//! URL query contract of the store browser page.
//!
//! Recognized keys: `category`, `sort`, `order`, `search`. The URL is a
//! projection of [`FilterState`]: it is read once on mount and rewritten after
//! every filter change with non-default values only.

use super::filter::{FilterState, SortBy, SortOrder};
use serde::Serialize;
use url::form_urlencoded;

#[derive(Debug, Default, Serialize)]
struct UrlFilterParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sort: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    order: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    search: Option<String>,
}

/// First value of `key`, like `URLSearchParams.get`. Later repeats and
/// every other pair are ignored; an empty first value counts as absent.
fn first_value(query: &str, key: &str) -> Option<String> {
    form_urlencoded::parse(query.as_bytes())
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
        .filter(|v| !v.is_empty())
}

impl FilterState {
    /// Builds filters from `location.search` (leading `?` optional).
    ///
    /// Each recognized key is looked up on its own, so repeated, bracketed or
    /// bare foreign keys never disturb it. Absent, empty or unrecognized values
    /// keep their defaults. A non-numeric `category` is treated as absent.
    pub fn from_query_string(query: &str) -> Self {
        let query = query.trim_start_matches('?');
        let mut filters = FilterState::default();

        if let Some(category) = first_value(query, "category") {
            filters.category = category.trim().parse::<i64>().ok();
        }
        if let Some(sort_by) = first_value(query, "sort").and_then(|s| SortBy::from_code(&s)) {
            filters.sort_by = sort_by;
        }
        if let Some(order) = first_value(query, "order").and_then(|s| SortOrder::from_code(&s)) {
            filters.order = order;
        }
        if let Some(search) = first_value(query, "search") {
            filters.search_query = search;
        }

        filters
    }

    /// Query string (without `?`) reflecting the non-default filters.
    ///
    /// `cashback_enabled` and `is_promoted` are not part of the URL contract.
    pub fn to_query_string(&self) -> String {
        let defaults = FilterState::default();
        let params = UrlFilterParams {
            category: self.category.map(|c| c.to_string()),
            sort: (self.sort_by != defaults.sort_by).then(|| self.sort_by.as_str().to_string()),
            order: (self.order != defaults.order).then(|| self.order.as_str().to_string()),
            search: (!self.search_query.is_empty()).then(|| self.search_query.clone()),
        };
        serde_qs::to_string(&params).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_query() {
        let f = FilterState::from_query_string("?category=5&sort=clicks&order=desc&search=foo");
        assert_eq!(
            f,
            FilterState {
                category: Some(5),
                sort_by: SortBy::Clicks,
                order: SortOrder::Desc,
                search_query: "foo".to_string(),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_full_query_roundtrip_is_exact() {
        let raw = "category=5&sort=clicks&order=desc&search=foo";
        let f = FilterState::from_query_string(raw);
        assert_eq!(f.to_query_string(), raw);
    }

    #[test]
    fn test_defaults_produce_empty_query() {
        assert_eq!(FilterState::default().to_query_string(), "");
        assert!(FilterState::from_query_string("").is_default());
        assert!(FilterState::from_query_string("?").is_default());
    }

    #[test]
    fn test_default_values_are_omitted() {
        let f = FilterState {
            category: Some(2),
            ..Default::default()
        };
        assert_eq!(f.to_query_string(), "category=2");

        let mut f = FilterState::default();
        f.set_sort_by(SortBy::Featured);
        assert_eq!(f.to_query_string(), "sort=featured&order=desc");
    }

    #[test]
    fn test_non_numeric_category_is_absent() {
        let f = FilterState::from_query_string("?category=abc&search=shoes");
        assert_eq!(f.category, None);
        assert_eq!(f.search_query, "shoes");
    }

    #[test]
    fn test_unknown_values_and_keys_keep_defaults() {
        let f = FilterState::from_query_string("?sort=price&order=sideways&page=3&utm_source=mail");
        assert!(f.is_default());
    }

    #[test]
    fn test_empty_values_keep_defaults() {
        let f = FilterState::from_query_string("?category=&sort=&order=&search=");
        assert!(f.is_default());
    }

    #[test]
    fn test_partial_query_only_overrides_present_keys() {
        let f = FilterState::from_query_string("?order=desc");
        assert_eq!(f.order, SortOrder::Desc);
        assert_eq!(f.sort_by, SortBy::Name);
        assert_eq!(f.category, None);
    }

    #[test]
    fn test_repeated_foreign_key_keeps_recognized_keys() {
        let f = FilterState::from_query_string("?category=5&sort=clicks&utm=a&utm=b");
        assert_eq!(f.category, Some(5));
        assert_eq!(f.sort_by, SortBy::Clicks);
    }

    #[test]
    fn test_repeated_recognized_key_takes_first_value() {
        let f = FilterState::from_query_string("?category=5&sort=clicks&search=a&search=b");
        assert_eq!(f.category, Some(5));
        assert_eq!(f.sort_by, SortBy::Clicks);
        assert_eq!(f.search_query, "a");

        let f = FilterState::from_query_string("?search=&search=b");
        assert_eq!(f.search_query, "");
    }

    #[test]
    fn test_bracketed_and_bare_keys_are_ignored() {
        let f = FilterState::from_query_string("?tags[]=x&tags[]=y&debug&order=desc&category=9");
        assert_eq!(f.order, SortOrder::Desc);
        assert_eq!(f.category, Some(9));

        let f = FilterState::from_query_string("?&&sort=featured&=oops&search=red+shoes%21");
        assert_eq!(f.sort_by, SortBy::Featured);
        assert_eq!(f.search_query, "red shoes!");
    }

    #[test]
    fn test_category_zero_is_a_real_category() {
        let f = FilterState::from_query_string("?category=0");
        assert_eq!(f.category, Some(0));
        assert_eq!(f.to_query_string(), "category=0");
    }

    #[test]
    fn test_tri_state_filters_stay_out_of_url() {
        let f = FilterState {
            cashback_enabled: Some(true),
            is_promoted: Some(false),
            ..Default::default()
        };
        assert_eq!(f.to_query_string(), "");
    }
}
