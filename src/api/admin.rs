use crate::api::ApiClient;
use crate::api::schemas::admin::ProductPayload;
use crate::domain::catalog::{Page, Product};
use crate::domain::order::{Order, OrderStatus};
use crate::domain::user::UserProfile;
use crate::error::Result;
use reqwest::Method;
use serde_json::{Value, json, to_value};

/// Back-office endpoints. The backend enforces the admin role; these
/// wrappers add no client-side gating beyond what the UI chooses to do.
impl ApiClient {
    pub async fn admin_users(&self, page: u64) -> Result<Page<UserProfile>> {
        let query = [("page", page.to_string())];
        self.request(Method::GET, "/admin/users", Some(query.as_slice()), None).await
    }

    pub async fn admin_order(&self, order_id: u64) -> Result<Order> {
        self.request(Method::GET, &format!("/admin/orders/{order_id}"), None, None).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn set_order_status(&self, order_id: u64, status: OrderStatus) -> Result<Order> {
        let body = json!({ "status": status });
        self.request(Method::PATCH, &format!("/admin/orders/{order_id}"), None, Some(&body)).await
    }

    pub async fn create_product(&self, product: &ProductPayload) -> Result<Product> {
        let body = to_value(product)?;
        self.request(Method::POST, "/products", None, Some(&body)).await
    }

    pub async fn update_product(&self, id: u64, product: &ProductPayload) -> Result<Product> {
        let body = to_value(product)?;
        self.request(Method::PUT, &format!("/products/{id}"), None, Some(&body)).await
    }

    pub async fn delete_product(&self, id: u64) -> Result<()> {
        self.request_empty(Method::DELETE, &format!("/products/{id}"), None).await
    }

    pub async fn admin_settings(&self) -> Result<Value> {
        self.request(Method::GET, "/admin/settings", None, None).await
    }

    pub async fn update_admin_settings(&self, settings: &Value) -> Result<Value> {
        self.request(Method::PUT, "/admin/settings", None, Some(settings)).await
    }
}
