use crate::domain::common::{deserialize_flag, deserialize_lenient_amount};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Тип суммы кэшбэка
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AmountType {
    /// Фиксированная сумма в валюте
    Fixed,
    /// Процент от покупки
    Percent,
    /// Неизвестное значение с сервера
    #[default]
    #[serde(other)]
    Other,
}

impl AmountType {
    /// Currency prefix placed before the amount
    pub fn prefix(&self) -> &'static str {
        match self {
            AmountType::Fixed => "$",
            _ => "",
        }
    }

    /// Unit suffix placed after the amount
    pub fn suffix(&self) -> &'static str {
        match self {
            AmountType::Percent => "%",
            _ => "",
        }
    }
}

/// Магазин из листинга `/stores`
///
/// Records are immutable once fetched; identity is `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Store {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub logo: String,
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub cashback_enabled: bool,
    #[serde(default)]
    pub rate_type: String,
    #[serde(default)]
    pub amount_type: AmountType,
    #[serde(default, deserialize_with = "deserialize_lenient_amount")]
    pub cashback_amount: Option<Decimal>,
    /// ID категории
    #[serde(default)]
    pub cats: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub is_promoted: bool,
    #[serde(default)]
    pub clicks: i64,
}

impl Store {
    /// Cashback line shown under the store name on the card.
    ///
    /// ```text
    /// enabled, percent, 2.5  -> "Standard 2.50% cashback"
    /// enabled, fixed, 3      -> "Bonus $3.00 cashback"
    /// disabled               -> "No cashback available"
    /// ```
    pub fn cashback_text(&self) -> String {
        if !self.cashback_enabled {
            return "No cashback available".to_string();
        }

        let amount = self
            .cashback_amount
            .unwrap_or_default()
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

        format!(
            "{} {}{:.2}{} cashback",
            self.rate_type,
            self.amount_type.prefix(),
            amount,
            self.amount_type.suffix()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn store(enabled: bool, amount_type: AmountType, amount: &str) -> Store {
        Store {
            id: 1,
            name: "Acme".to_string(),
            url: "https://acme.example".to_string(),
            logo: String::new(),
            cashback_enabled: enabled,
            rate_type: "Standard".to_string(),
            amount_type,
            cashback_amount: Some(Decimal::from_str(amount).unwrap()),
            cats: Some(3),
            is_promoted: false,
            clicks: 0,
        }
    }

    #[test]
    fn test_cashback_text_percent() {
        let s = store(true, AmountType::Percent, "2.5");
        assert_eq!(s.cashback_text(), "Standard 2.50% cashback");
    }

    #[test]
    fn test_cashback_text_fixed() {
        let mut s = store(true, AmountType::Fixed, "3");
        s.rate_type = "Bonus".to_string();
        assert_eq!(s.cashback_text(), "Bonus $3.00 cashback");
    }

    #[test]
    fn test_cashback_text_disabled() {
        let s = store(false, AmountType::Percent, "10");
        assert_eq!(s.cashback_text(), "No cashback available");
    }

    #[test]
    fn test_cashback_text_rounds_half_away_from_zero() {
        let s = store(true, AmountType::Percent, "1.005");
        assert_eq!(s.cashback_text(), "Standard 1.01% cashback");
        let s = store(true, AmountType::Fixed, "7.123");
        assert_eq!(s.cashback_text(), "Standard $7.12 cashback");
    }

    #[test]
    fn test_store_from_listing_json() {
        let raw = r#"{
            "id": 42,
            "name": "Acme",
            "url": "https://acme.example",
            "logo": "https://acme.example/logo.png",
            "cashback_enabled": 1,
            "rate_type": "Standard",
            "amount_type": "percent",
            "cashback_amount": "2.5",
            "cats": 3,
            "is_promoted": 0,
            "clicks": 1200
        }"#;
        let s: Store = serde_json::from_str(raw).unwrap();
        assert_eq!(s.id, 42);
        assert!(s.cashback_enabled);
        assert!(!s.is_promoted);
        assert_eq!(s.amount_type, AmountType::Percent);
        assert_eq!(s.cashback_amount, Some(Decimal::from_str("2.5").unwrap()));
        assert_eq!(s.cashback_text(), "Standard 2.50% cashback");
    }

    #[test]
    fn test_store_numeric_amount_and_unknown_type() {
        let raw = r#"{"id":7,"name":"Odd","cashback_enabled":true,"amount_type":"points","cashback_amount":4}"#;
        let s: Store = serde_json::from_str(raw).unwrap();
        assert_eq!(s.amount_type, AmountType::Other);
        assert_eq!(s.cashback_amount, Some(Decimal::from(4)));
        assert_eq!(s.cats, None);
    }

    #[test]
    fn test_bad_amount_does_not_fail_the_page() {
        let raw = r#"[
            {"id":1,"name":"Good","cashback_enabled":1,"amount_type":"percent","cashback_amount":"3"},
            {"id":2,"name":"Blank","cashback_enabled":1,"amount_type":"fixed","cashback_amount":""}
        ]"#;
        let page: Vec<Store> = serde_json::from_str(raw).unwrap();
        assert_eq!(page.len(), 2);
        assert_eq!(page[0].cashback_amount, Some(Decimal::from(3)));
        assert_eq!(page[1].cashback_amount, None);
        assert_eq!(page[1].cashback_text(), " $0.00 cashback");
    }

    #[test]
    fn test_store_survives_storage_roundtrip() {
        let s = store(true, AmountType::Fixed, "5.25");
        let raw = serde_json::to_string(&s).unwrap();
        let back: Store = serde_json::from_str(&raw).unwrap();
        assert_eq!(back, s);
    }
}
