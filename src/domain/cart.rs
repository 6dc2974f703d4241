use crate::domain::catalog::Product;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CartItem {
    pub id: u64,
    pub product: Product,
    pub quantity: u32,
    /// Unit price at the time the item was added, decimal string.
    pub price: String,
}

impl CartItem {
    #[must_use]
    pub fn line_total(&self) -> f64 {
        self.price.parse::<f64>().unwrap_or(0.0) * f64::from(self.quantity)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Cart {
    #[serde(default)]
    pub items: Vec<CartItem>,
    #[serde(default)]
    pub total_items: u32,
    #[serde(default)]
    pub subtotal: f64,
}

impl Cart {
    /// Recomputes totals from line items. Run after every deserialization
    /// since not every backend version sends `total_items`/`subtotal`.
    pub fn recalculate(&mut self) {
        self.total_items = self.items.iter().map(|i| i.quantity).sum();
        self.subtotal = self.items.iter().map(CartItem::line_total).sum();
    }

    #[must_use]
    pub fn item_for_product(&self, product_id: u64) -> Option<&CartItem> {
        self.items.iter().find(|i| i.product.id == product_id)
    }
}
