use crate::api::ApiClient;
use crate::api::schemas::orders::{
    CreateOrderRequest, PaymentInitiated, PaymentService, PaymentStatusResponse,
};
use crate::domain::order::Order;
use crate::error::Result;
use reqwest::Method;
use serde_json::{json, to_value};
use uuid::Uuid;

impl ApiClient {
    #[tracing::instrument(skip(self, order))]
    pub async fn create_order(&self, order: &CreateOrderRequest) -> Result<Order> {
        let body = to_value(order)?;
        self.request(Method::POST, "/orders/create", None, Some(&body)).await
    }

    pub async fn orders(&self, page: u64) -> Result<crate::domain::catalog::Page<Order>> {
        let query = [("page", page.to_string())];
        self.request(Method::GET, "/orders", Some(query.as_slice()), None).await
    }

    pub async fn order(&self, id: u64) -> Result<Order> {
        self.request(Method::GET, &format!("/orders/{id}"), None, None).await
    }

    /// Kicks off a mobile-money payment for an order. The gateway exchange
    /// itself happens server-side; the client only polls the outcome.
    #[tracing::instrument(skip(self, phone_number))]
    pub async fn initiate_payment(
        &self,
        order_id: u64,
        phone_number: &str,
        service: PaymentService,
    ) -> Result<PaymentInitiated> {
        let body = json!({
            "order_id": order_id,
            "phone_number": phone_number,
            "service": service.as_str(),
        });
        self.request(Method::POST, "/payments/initiate", None, Some(&body)).await
    }

    pub async fn payment_status(&self, transaction_id: Uuid) -> Result<PaymentStatusResponse> {
        self.request(Method::GET, &format!("/payments/status/{transaction_id}"), None, None).await
    }
}
