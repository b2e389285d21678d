//! An incoming order as supplied by the problem server.
//!
//! Orders are immutable once received. The kitchen wraps each one in an
//! [`OrderRecord`](crate::record::OrderRecord) to track where it lives and how
//! much freshness it has left.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Ideal storage temperature of an order.
///
/// The problem server sends this as free text. Anything that is not `hot` or
/// `cold` (after trimming and lowercasing) is treated as [`Temperature::Room`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Temperature {
    Hot,
    Cold,
    Room,
}

impl Temperature {
    /// Normalizes a raw temperature string. Never fails.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "hot" => Temperature::Hot,
            "cold" => Temperature::Cold,
            _ => Temperature::Room,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Temperature::Hot => "hot",
            Temperature::Cold => "cold",
            Temperature::Room => "room",
        }
    }
}

impl Display for Temperature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub name: String,
    /// Raw temperature requirement; missing or null means room temperature.
    #[serde(default)]
    pub temp: Option<String>,
    /// Price in dollars.
    pub price: u64,
    /// Initial freshness budget in seconds.
    pub freshness: u64,
}

impl Order {
    /// Creates a new Order instance.
    ///
    /// # Arguments
    /// * `id` - Unique order identifier
    /// * `name` - Food name
    /// * `temp` - Ideal temperature (`hot`, `cold`, `room`; case-insensitive)
    /// * `price` - Price in dollars
    /// * `freshness` - Freshness budget in seconds
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        temp: impl Into<String>,
        price: u64,
        freshness: u64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            temp: Some(temp.into()),
            price,
            freshness,
        }
    }

    pub fn temperature(&self) -> Temperature {
        Temperature::parse(self.temp.as_deref().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_normalizes_case_and_whitespace() {
        assert_eq!(Temperature::parse("  HOT "), Temperature::Hot);
        assert_eq!(Temperature::parse("Cold"), Temperature::Cold);
        assert_eq!(Temperature::parse("room"), Temperature::Room);
    }

    #[test]
    fn test_parse_defaults_to_room() {
        assert_eq!(Temperature::parse(""), Temperature::Room);
        assert_eq!(Temperature::parse("   "), Temperature::Room);
        assert_eq!(Temperature::parse("lukewarm"), Temperature::Room);
    }

    #[test]
    fn test_order_deserializes_without_temp() {
        let order: Order =
            serde_json::from_str(r#"{"id":"a1","name":"Salad","price":7,"freshness":30}"#).unwrap();
        assert_eq!(order.temp, None);
        assert_eq!(order.temperature(), Temperature::Room);

        let order: Order = serde_json::from_str(
            r#"{"id":"a2","name":"Soup","temp":"hot","price":9,"freshness":45}"#,
        )
        .unwrap();
        assert_eq!(order.temperature(), Temperature::Hot);
        assert_eq!(order.freshness, 45);
    }
}
