use serde::Serialize;

/// Product payload for the back-office create/update forms.
#[derive(Debug, Default, Clone, Serialize)]
pub struct ProductPayload {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Decimal string, matching the wire representation.
    pub price: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub is_featured: bool,
}
