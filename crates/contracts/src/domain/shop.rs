use serde::{Deserialize, Serialize};

/// A nearby shop shown on the shops screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shop {
    pub id: String,
    pub name: String,
    pub rating: f64,
    #[serde(rename = "reviewCount")]
    pub review_count: u32,
    /// Distance in miles.
    pub distance: f64,
    pub address: String,
    pub phone: String,
    #[serde(rename = "deliveryTime")]
    pub delivery_time: String,
    pub image: String,
    pub categories: Vec<String>,
    #[serde(rename = "isOpen")]
    pub is_open: bool,
    #[serde(rename = "openHours")]
    pub open_hours: String,
    #[serde(rename = "productCount")]
    pub product_count: u32,
}
