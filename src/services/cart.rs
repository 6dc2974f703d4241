use crate::api::ApiClient;
use crate::domain::cart::Cart;
use crate::domain::catalog::ActivityKind;
use crate::error::{ClientError, Result};
use crate::services::session::SessionStore;
use reqwest::StatusCode;
use std::sync::{Arc, PoisonError, RwLock};

/// In-memory mirror of the server-side cart.
///
/// The server owns cart contents; this store caches the latest fetch and
/// refetches after every mutation rather than patching locally.
#[derive(Debug)]
pub struct CartStore {
    api: Arc<ApiClient>,
    state: RwLock<Cart>,
}

impl CartStore {
    #[must_use]
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api, state: RwLock::new(Cart::default()) }
    }

    /// Wires this store to reset when the session ends.
    pub fn subscribe_session_end(self: &Arc<Self>, session: &SessionStore) {
        let weak = Arc::downgrade(self);
        session.on_session_end(move || {
            if let Some(store) = weak.upgrade() {
                store.reset();
            }
        });
    }

    /// Pulls the cart from the server. Anonymous clients get an empty cart
    /// without a network call; a 401 empties the local mirror.
    #[tracing::instrument(skip(self))]
    pub async fn fetch(&self) -> Result<()> {
        if self.api.credentials().access_token().is_none() {
            self.reset();
            return Ok(());
        }

        match self.api.cart().await {
            Ok(mut cart) => {
                // Totals are derived from the line items; backend versions
                // that omit them still yield a consistent cart.
                cart.recalculate();
                *self.write_state() = cart;
                Ok(())
            }
            Err(e) if e.is_unauthorized() => {
                self.reset();
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    /// Adds a product to the cart. Requires an established session; the
    /// returned unauthorized error carries the message the UI shows before
    /// redirecting to login.
    #[tracing::instrument(skip(self))]
    pub async fn add_item(&self, product_id: u64, quantity: u32) -> Result<()> {
        if self.api.credentials().access_token().is_none() {
            return Err(ClientError::Api {
                status: StatusCode::UNAUTHORIZED,
                message: "Please login to add items to cart".to_string(),
            });
        }

        self.api.add_to_cart(product_id, quantity).await?;
        self.api.track_activity(ActivityKind::AddCart, product_id, None).await;
        self.fetch().await
    }

    /// Updates a line item's quantity; a quantity below one removes it.
    pub async fn update_item(&self, item_id: u64, quantity: u32) -> Result<()> {
        if quantity < 1 {
            return self.remove_item(item_id).await;
        }
        self.api.update_cart_item(item_id, quantity).await?;
        self.fetch().await
    }

    pub async fn remove_item(&self, item_id: u64) -> Result<()> {
        self.api.remove_from_cart(item_id).await?;
        self.fetch().await
    }

    /// Empties the cart server-side and locally.
    pub async fn clear(&self) -> Result<()> {
        self.api.clear_cart().await?;
        self.reset();
        Ok(())
    }

    /// Local-only reset, used on logout.
    pub fn reset(&self) {
        *self.write_state() = Cart::default();
    }

    #[must_use]
    pub fn snapshot(&self) -> Cart {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    #[must_use]
    pub fn contains(&self, product_id: u64) -> bool {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .item_for_product(product_id)
            .is_some()
    }

    #[must_use]
    pub fn item_quantity(&self, product_id: u64) -> u32 {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .item_for_product(product_id)
            .map_or(0, |i| i.quantity)
    }

    fn write_state(&self) -> std::sync::RwLockWriteGuard<'_, Cart> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}
