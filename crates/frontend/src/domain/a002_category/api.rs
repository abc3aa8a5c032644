use crate::shared::api_utils::{api_url, get_json, ApiError};
use contracts::domain::a002_category::Category;

/// Полный список категорий (без пагинации)
pub async fn fetch_categories() -> Result<Vec<Category>, ApiError> {
    get_json::<Vec<Category>>(&api_url("/categories")).await
}
