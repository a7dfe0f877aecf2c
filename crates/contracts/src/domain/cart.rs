use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::product::{Product, ProductId};

/// One product's aggregated quantity within the cart.
///
/// `id` always equals `product.id`. `quantity` is at least 1 while the line
/// exists; a line dropping to zero is removed rather than stored. `added_at`
/// records the first addition and travels over the wire as an ISO-8601 string
/// under `addedAt`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: ProductId,

    /// Product snapshot taken when the line was first added.
    pub product: Product,

    pub quantity: u32,

    #[serde(rename = "addedAt")]
    pub added_at: DateTime<Utc>,
}

impl CartItem {
    /// New line with quantity 1 for a product not yet in the cart.
    pub fn new(product: Product, added_at: DateTime<Utc>) -> Self {
        Self {
            id: product.id.clone(),
            product,
            quantity: 1,
            added_at,
        }
    }

    pub fn line_total(&self) -> f64 {
        self.product.price * self.quantity as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn product(id: &str, price: f64) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            price,
            original_price: None,
            rating: 4.5,
            image: String::new(),
            shop: "Fresh Market".to_string(),
            distance: 0.5,
            delivery_time: "15-25 min".to_string(),
            in_stock: true,
            category: "fruits".to_string(),
            discount: None,
            unit: "per lb".to_string(),
            brand: "Local Farm".to_string(),
            product_type: vec!["Fresh".to_string()],
        }
    }

    #[test]
    fn round_trips_through_json() {
        let added_at = Utc.with_ymd_and_hms(2024, 3, 15, 14, 2, 26).unwrap();
        let mut line = CartItem::new(product("A", 2.99), added_at);
        line.quantity = 3;
        let items = vec![line, CartItem::new(product("B", 5.0), added_at)];

        let raw = serde_json::to_string(&items).unwrap();
        let restored: Vec<CartItem> = serde_json::from_str(&raw).unwrap();

        assert_eq!(restored, items);
    }

    #[test]
    fn added_at_is_iso_8601_under_camel_case_key() {
        let added_at = Utc.with_ymd_and_hms(2024, 3, 15, 14, 2, 26).unwrap();
        let line = CartItem::new(product("A", 2.99), added_at);

        let value = serde_json::to_value(&line).unwrap();
        assert_eq!(value["addedAt"], "2024-03-15T14:02:26Z");
        assert_eq!(value["id"], "A");
        assert_eq!(value["quantity"], 1);
    }

    #[test]
    fn line_total_scales_with_quantity() {
        let added_at = Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).unwrap();
        let mut line = CartItem::new(product("A", 3.0), added_at);
        line.quantity = 2;
        assert_eq!(line.line_total(), 6.0);
    }
}
