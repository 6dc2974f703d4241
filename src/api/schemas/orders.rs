use crate::domain::order::PaymentStatus;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize)]
pub struct CreateOrderRequest {
    pub shipping_address: String,
    pub phone_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Mobile-money services the payment backend accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaymentService {
    #[default]
    Mtn,
    Orange,
}

impl PaymentService {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mtn => "MTN",
            Self::Orange => "ORANGE",
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct PaymentInitiated {
    pub transaction_id: Uuid,
    pub status: PaymentStatus,
}

#[derive(Debug, Deserialize)]
pub struct PaymentStatusResponse {
    pub transaction_id: Uuid,
    pub status: PaymentStatus,
}
