use crate::api::ApiClient;
use crate::api::schemas::catalog::Listing;
use crate::api::schemas::reviews::{AddToWishlistRequest, NewReview};
use crate::domain::catalog::Page;
use crate::domain::review::{Review, WishlistItem};
use crate::error::Result;
use reqwest::Method;
use serde_json::to_value;

impl ApiClient {
    pub async fn wishlist(&self) -> Result<Vec<WishlistItem>> {
        let listing: Listing<WishlistItem> = self.request(Method::GET, "/wishlist", None, None).await?;
        Ok(listing.into_items())
    }

    pub async fn add_to_wishlist(&self, product_id: u64) -> Result<WishlistItem> {
        let body = to_value(AddToWishlistRequest { product_id })?;
        self.request(Method::POST, "/wishlist/add", None, Some(&body)).await
    }

    pub async fn remove_from_wishlist(&self, item_id: u64) -> Result<()> {
        self.request_empty(Method::DELETE, &format!("/wishlist/{item_id}"), None).await
    }

    pub async fn add_review(&self, review: &NewReview) -> Result<Review> {
        let body = to_value(review)?;
        self.request(Method::POST, "/reviews", None, Some(&body)).await
    }

    pub async fn product_reviews(&self, product_id: u64, page: u64) -> Result<Page<Review>> {
        let query = [("page", page.to_string())];
        self.request(Method::GET, &format!("/products/{product_id}/reviews"), Some(query.as_slice()), None).await
    }
}
