use crate::api::ApiClient;
use crate::api::schemas::catalog::Listing;
use crate::domain::catalog::{ActivityKind, Category, Page, Product, ProductFilters};
use crate::error::Result;
use reqwest::Method;
use serde_json::{Value, json};
use std::time::{SystemTime, UNIX_EPOCH};

/// Millisecond timestamp appended to cacheable listings to bypass stale
/// intermediary caches.
fn cache_bust() -> (&'static str, String) {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis();
    ("_t", millis.to_string())
}

impl ApiClient {
    pub async fn products(&self, filters: &ProductFilters, page: u64) -> Result<Page<Product>> {
        let mut query = filters.to_query(page);
        query.push(cache_bust());
        self.request(Method::GET, "/products", Some(query.as_slice()), None).await
    }

    pub async fn product(&self, id: u64) -> Result<Product> {
        self.request(Method::GET, &format!("/products/{id}"), None, None).await
    }

    pub async fn featured_products(&self) -> Result<Vec<Product>> {
        let query = [cache_bust()];
        let listing: Listing<Product> =
            self.request(Method::GET, "/products/featured", Some(query.as_slice()), None).await?;
        Ok(listing.into_items())
    }

    pub async fn categories(&self) -> Result<Vec<Category>> {
        let listing: Listing<Category> = self.request(Method::GET, "/categories", None, None).await?;
        Ok(listing.into_items())
    }

    pub async fn recommendations(&self, user_id: Option<u64>) -> Result<Vec<Product>> {
        let path = user_id.map_or_else(
            || "/recommendations".to_string(),
            |id| format!("/recommendations/user/{id}"),
        );
        let listing: Listing<Product> = self.request(Method::GET, &path, None, None).await?;
        Ok(listing.into_items())
    }

    /// Fire-and-forget interaction report for the recommendation backend.
    /// Failures are logged and never surfaced to the caller.
    pub async fn track_activity(&self, kind: ActivityKind, product_id: u64, metadata: Option<Value>) {
        let mut body = json!({
            "activity_type": kind.as_str(),
            "product_id": product_id,
        });
        if let (Some(map), Some(metadata)) = (body.as_object_mut(), metadata) {
            map.insert("metadata".to_string(), metadata);
        }

        if let Err(e) = self.request_empty(Method::POST, "/activity/track", Some(&body)).await {
            tracing::debug!(error = %e, activity = kind.as_str(), "activity tracking failed");
        }
    }
}
