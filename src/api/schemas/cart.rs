use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct AddToCartRequest {
    pub product_id: u64,
    pub quantity: u32,
}

#[derive(Debug, Serialize)]
pub struct UpdateCartItemRequest {
    pub quantity: u32,
}
