use super::filter::FilterState;
use serde::Serialize;

/// Fixed listing page size (`_limit`)
pub const PAGE_SIZE: u32 = 20;

/// Query parameters of `GET /stores`
///
/// Optional filters are sent only when set; boolean filters go over the wire
/// as `0`/`1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoreListQuery {
    #[serde(rename = "_page")]
    pub page: u32,
    #[serde(rename = "_limit")]
    pub limit: u32,
    #[serde(rename = "_sort")]
    pub sort: &'static str,
    #[serde(rename = "_order")]
    pub order: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cats: Option<i64>,
    /// Case-insensitive substring match on the store name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_like: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cashback_enabled: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_promoted: Option<u8>,
}

impl StoreListQuery {
    pub fn new(filters: &FilterState, page: u32) -> Self {
        Self {
            page,
            limit: PAGE_SIZE,
            sort: filters.sort_by.as_str(),
            order: filters.order.as_str(),
            cats: filters.category,
            name_like: (!filters.search_query.is_empty()).then(|| filters.search_query.clone()),
            cashback_enabled: filters.cashback_enabled.map(u8::from),
            is_promoted: filters.is_promoted.map(u8::from),
        }
    }

    /// Encoded query string without the leading `?`
    pub fn to_query_string(&self) -> String {
        serde_qs::to_string(self).unwrap_or_default()
    }
}
