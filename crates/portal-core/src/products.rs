use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Catalogue-assigned product identifier.
///
/// The catalogue API is not consistent about id types across endpoints, so
/// both JSON integers and strings are accepted and echoed back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    Number(i64),
    Text(String),
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductId::Number(n) => write!(f, "{n}"),
            ProductId::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for ProductId {
    fn from(value: i64) -> Self {
        ProductId::Number(value)
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        ProductId::Text(value.to_owned())
    }
}

/// A single catalogue product as returned by the remote catalogue service.
///
/// Only `name` and `rate` are interpreted by the grouping pipeline; every
/// other field (stock, tax rate, images, brand, category, ...) is kept in
/// [`ProductRecord::extra`] and serialized back out untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: ProductId,
    /// Free-text display name, e.g. `"FIDA AUTOBRAKE Leash 5M - S White (Max 12kgs)"`.
    ///
    /// A missing or `null` name is read as the empty string.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    /// Unit price. Accepts JSON numbers or numeric strings; missing or `null`
    /// is read as zero.
    #[serde(default, deserialize_with = "null_as_zero")]
    pub rate: Decimal,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ProductRecord {
    /// Builds a record with no extra payload. Mostly useful for callers that
    /// assemble products by hand (tests, CLI inspection).
    #[must_use]
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, rate: Decimal) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            rate,
            extra: Map::new(),
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn null_as_zero<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Decimal>::deserialize(deserializer).map(Option::unwrap_or_default)
}
