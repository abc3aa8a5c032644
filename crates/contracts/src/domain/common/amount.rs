use rust_decimal::Decimal;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum AmountRepr {
    Number(Decimal),
    Unparsable(IgnoredAny),
}

/// Сумма кэшбэка: число или строка с числом.
///
/// Anything else (`""`, `"n/a"`, objects) becomes `None` so that one bad
/// record does not fail the whole page.
pub fn deserialize_lenient_amount<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let repr = Option::<AmountRepr>::deserialize(deserializer)?;
    Ok(match repr {
        Some(AmountRepr::Number(value)) => Some(value),
        Some(AmountRepr::Unparsable(_)) | None => None,
    })
}
