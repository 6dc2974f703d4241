use crate::domain::catalog::Product;
use serde::Deserialize;
use time::OffsetDateTime;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Review {
    pub id: u64,
    pub product_id: u64,
    pub rating: u8,
    #[serde(default)]
    pub title: Option<String>,
    pub comment: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WishlistItem {
    pub id: u64,
    pub product: Product,
}
