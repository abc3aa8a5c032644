use serde::{Deserialize, Serialize};

/// Категория магазинов (группа для фильтра в сайдбаре)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}
