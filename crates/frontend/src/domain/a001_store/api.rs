use crate::shared::api_utils::{api_url, get_json, ApiError};
use contracts::domain::a001_store::Store;
use contracts::usecases::u001_browse_stores::StoreListQuery;

/// Одна страница листинга магазинов. Пустой массив означает конец списка.
pub async fn fetch_stores(query: &StoreListQuery) -> Result<Vec<Store>, ApiError> {
    let url = format!("{}?{}", api_url("/stores"), query.to_query_string());
    get_json::<Vec<Store>>(&url).await
}
