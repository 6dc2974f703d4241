use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct NewReview {
    pub product_id: u64,
    pub rating: u8,
    pub comment: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AddToWishlistRequest {
    pub product_id: u64,
}
