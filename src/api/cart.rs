use crate::api::ApiClient;
use crate::api::schemas::cart::{AddToCartRequest, UpdateCartItemRequest};
use crate::domain::cart::{Cart, CartItem};
use crate::error::Result;
use reqwest::Method;
use serde_json::to_value;

impl ApiClient {
    pub async fn cart(&self) -> Result<Cart> {
        self.request(Method::GET, "/cart", None, None).await
    }

    pub async fn add_to_cart(&self, product_id: u64, quantity: u32) -> Result<CartItem> {
        let body = to_value(AddToCartRequest { product_id, quantity })?;
        self.request(Method::POST, "/cart/add", None, Some(&body)).await
    }

    pub async fn update_cart_item(&self, item_id: u64, quantity: u32) -> Result<CartItem> {
        let body = to_value(UpdateCartItemRequest { quantity })?;
        self.request(Method::PATCH, &format!("/cart/items/{item_id}"), None, Some(&body)).await
    }

    pub async fn remove_from_cart(&self, item_id: u64) -> Result<()> {
        self.request_empty(Method::DELETE, &format!("/cart/items/{item_id}"), None).await
    }

    pub async fn clear_cart(&self) -> Result<()> {
        self.request_empty(Method::DELETE, "/cart/clear", None).await
    }
}
