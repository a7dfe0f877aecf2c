use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Delivered,
    InTransit,
    Processing,
    Cancelled,
}

impl OrderStatus {
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Delivered => "Delivered",
            OrderStatus::InTransit => "In transit",
            OrderStatus::Processing => "Processing",
            OrderStatus::Cancelled => "Cancelled",
        }
    }
}

/// One line of a placed order. Carries its own copy of the product name and
/// price; orders are historical records, not catalog references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub name: String,
    pub price: f64,
    pub quantity: u32,
    /// Portion label, e.g. "230g".
    pub weight: String,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub status: OrderStatus,
    pub lines: Vec<OrderLine>,
    #[serde(rename = "deliveryFee")]
    pub delivery_fee: f64,
}

impl Order {
    pub fn subtotal(&self) -> f64 {
        self.lines
            .iter()
            .map(|line| line.price * line.quantity as f64)
            .sum()
    }

    pub fn total(&self) -> f64 {
        self.subtotal() + self.delivery_fee
    }

    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn totals_include_delivery_fee() {
        let order = Order {
            id: "1".to_string(),
            status: OrderStatus::Delivered,
            lines: vec![
                OrderLine {
                    name: "Burger Farsh".to_string(),
                    price: 13.0,
                    quantity: 2,
                    weight: "230g".to_string(),
                    image: String::new(),
                },
                OrderLine {
                    name: "Chicken burger".to_string(),
                    price: 5.30,
                    quantity: 1,
                    weight: "220g".to_string(),
                    image: String::new(),
                },
            ],
            delivery_fee: 2.50,
        };

        assert_eq!(order.item_count(), 3);
        assert!((order.subtotal() - 31.30).abs() < 1e-9);
        assert!((order.total() - 33.80).abs() < 1e-9);
    }
}
