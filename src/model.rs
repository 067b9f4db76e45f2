use serde::{Deserialize, Serialize};

/// A single market entry as reported by tarkov.dev.
///
/// Field names follow the upstream GraphQL schema and double as the Mongo
/// document field names, hence the camelCase rename.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    pub name: String,
    pub short_name: String,
    /// Upstream declares prices as plain JSON numbers, so decimals are
    /// accepted even though observed values are whole rouble amounts.
    pub base_price: f64,
    /// Most recent observed low market price. Upstream reports `null` for
    /// items with no current listings; those entries are dropped before
    /// persistence, so stored documents always carry a value here.
    pub last_low_price: Option<f64>,
}
