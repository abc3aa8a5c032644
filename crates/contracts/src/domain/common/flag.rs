use serde::{Deserialize, Deserializer};

/// Флаг в JSON приходит либо как `true/false`, либо как `0/1`
#[derive(Deserialize)]
#[serde(untagged)]
enum FlagRepr {
    Bool(bool),
    Int(i64),
}

/// Accepts `true`, `false`, `0`, `1` (any non-zero integer is truthy) and `null` (false).
pub fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let repr = Option::<FlagRepr>::deserialize(deserializer)?;
    Ok(match repr {
        Some(FlagRepr::Bool(value)) => value,
        Some(FlagRepr::Int(value)) => value != 0,
        None => false,
    })
}
