use serde::{Deserialize, Serialize};

/// Поле сортировки листинга магазинов
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    #[default]
    Name,
    Featured,
    Clicks,
    CashbackAmount,
}

impl SortBy {
    /// Wire value used in `_sort` and in the `sort` URL key
    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::Name => "name",
            SortBy::Featured => "featured",
            SortBy::Clicks => "clicks",
            SortBy::CashbackAmount => "cashback_amount",
        }
    }

    /// Label for the sort select
    pub fn display_name(&self) -> &'static str {
        match self {
            SortBy::Name => "Name",
            SortBy::Featured => "Featured",
            SortBy::Clicks => "Popularity",
            SortBy::CashbackAmount => "Cashback",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "name" => Some(SortBy::Name),
            "featured" => Some(SortBy::Featured),
            "clicks" => Some(SortBy::Clicks),
            "cashback_amount" => Some(SortBy::CashbackAmount),
            _ => None,
        }
    }

    pub fn all() -> [SortBy; 4] {
        [
            SortBy::Name,
            SortBy::Featured,
            SortBy::Clicks,
            SortBy::CashbackAmount,
        ]
    }

    /// Direction forced when the user picks this field: names read A→Z,
    /// everything else shows the biggest values first.
    pub fn default_order(&self) -> SortOrder {
        match self {
            SortBy::Name => SortOrder::Asc,
            _ => SortOrder::Desc,
        }
    }
}

/// Направление сортировки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "asc" => Some(SortOrder::Asc),
            "desc" => Some(SortOrder::Desc),
            _ => None,
        }
    }
}

/// Состояние фильтров браузера магазинов
///
/// Owned by the store browser. Changed only by user input or by the
/// one-time hydration from the page URL.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub category: Option<i64>,
    pub sort_by: SortBy,
    pub order: SortOrder,
    pub search_query: String,
    pub cashback_enabled: Option<bool>,
    pub is_promoted: Option<bool>,
}

impl FilterState {
    /// Changes the sort field and applies its default direction.
    pub fn set_sort_by(&mut self, sort_by: SortBy) {
        self.sort_by = sort_by;
        self.order = sort_by.default_order();
    }

    pub fn is_default(&self) -> bool {
        *self == FilterState::default()
    }
}

/// Tri-state select value: "" (any), "1" (yes), "0" (no).
pub fn tri_state_code(value: Option<bool>) -> &'static str {
    match value {
        None => "",
        Some(true) => "1",
        Some(false) => "0",
    }
}

pub fn tri_state_from_code(code: &str) -> Option<bool> {
    match code {
        "1" => Some(true),
        "0" => Some(false),
        _ => None,
    }
}
