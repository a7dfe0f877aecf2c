use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

/// Catalog product identifier. The cart reuses it as the line-item id, so at
/// most one line item can exist per product.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub String);

impl ProductId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Product
// ============================================================================

/// Read-only catalog product. The cart stores a snapshot of this value at the
/// time of addition, independent of later catalog changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,

    pub name: String,

    /// Unit price in dollars.
    pub price: f64,

    /// Pre-discount price, when the product is on sale.
    #[serde(rename = "originalPrice", default)]
    pub original_price: Option<f64>,

    pub rating: f64,

    pub image: String,

    pub shop: String,

    /// Distance to the shop in miles.
    pub distance: f64,

    #[serde(rename = "deliveryTime")]
    pub delivery_time: String,

    #[serde(rename = "inStock", default)]
    pub in_stock: bool,

    pub category: String,

    /// Discount percentage, when on sale.
    #[serde(default)]
    pub discount: Option<u32>,

    /// Unit label shown next to the price, e.g. "per lb" or "1 gallon".
    pub unit: String,

    pub brand: String,

    #[serde(rename = "productType", default)]
    pub product_type: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_camel_case_field_names() {
        let product = Product {
            id: ProductId::new("1"),
            name: "Organic Bananas".to_string(),
            price: 2.99,
            original_price: Some(3.49),
            rating: 4.8,
            image: "https://example.com/bananas.jpg".to_string(),
            shop: "Fresh Market".to_string(),
            distance: 0.5,
            delivery_time: "15-25 min".to_string(),
            in_stock: true,
            category: "fruits".to_string(),
            discount: Some(15),
            unit: "per lb".to_string(),
            brand: "Organic Valley".to_string(),
            product_type: vec!["Organic".to_string()],
        };

        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(value["id"], "1");
        assert_eq!(value["originalPrice"], 3.49);
        assert_eq!(value["deliveryTime"], "15-25 min");
        assert_eq!(value["inStock"], true);
        assert_eq!(value["productType"][0], "Organic");
    }

    #[test]
    fn optional_fields_may_be_absent() {
        let raw = r#"{
            "id": "2",
            "name": "Fresh Milk",
            "price": 4.29,
            "rating": 4.7,
            "image": "",
            "shop": "Green Grocers",
            "distance": 0.8,
            "deliveryTime": "20-30 min",
            "inStock": true,
            "category": "dairy",
            "unit": "1 gallon",
            "brand": "Farm Fresh",
            "productType": ["Fresh"]
        }"#;

        let product: Product = serde_json::from_str(raw).unwrap();
        assert_eq!(product.original_price, None);
        assert_eq!(product.discount, None);
    }
}
