//! Hard-coded catalog. There is no server; screens filter this list locally.

use contracts::domain::product::{Product, ProductId};

pub const SEARCH_SUGGESTIONS: &[&str] = &[
    "Organic Bananas",
    "Fresh Milk",
    "Whole Wheat Bread",
    "Greek Yogurt",
    "Red Apples",
    "Orange Juice",
    "Chicken Breast",
    "Brown Rice",
];

/// Category chips shown on the home and search screens; `all` disables the
/// category predicate.
pub const CATEGORIES: &[(&str, &str)] = &[
    ("all", "All"),
    ("fruits", "Fruits"),
    ("vegetables", "Vegetables"),
    ("dairy", "Dairy"),
    ("beverages", "Beverages"),
    ("bakery", "Bakery"),
    ("meat", "Meat"),
    ("pantry", "Pantry"),
];

#[allow(clippy::too_many_arguments)]
fn product(
    id: &str,
    name: &str,
    price: f64,
    original_price: Option<f64>,
    rating: f64,
    image: &str,
    shop: &str,
    distance: f64,
    delivery_time: &str,
    in_stock: bool,
    category: &str,
    discount: Option<u32>,
    unit: &str,
    brand: &str,
    product_type: &[&str],
) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        price,
        original_price,
        rating,
        image: image.to_string(),
        shop: shop.to_string(),
        distance,
        delivery_time: delivery_time.to_string(),
        in_stock,
        category: category.to_string(),
        discount,
        unit: unit.to_string(),
        brand: brand.to_string(),
        product_type: product_type.iter().map(|t| t.to_string()).collect(),
    }
}

pub fn products() -> Vec<Product> {
    vec![
        product(
            "1",
            "Organic Bananas",
            2.99,
            Some(3.49),
            4.8,
            "https://images.pexels.com/photos/2872755/pexels-photo-2872755.jpeg?auto=compress&cs=tinysrgb&w=400",
            "Fresh Market",
            0.5,
            "15-25 min",
            true,
            "fruits",
            Some(15),
            "per lb",
            "Organic Valley",
            &["Organic"],
        ),
        product(
            "2",
            "Fresh Milk",
            4.29,
            None,
            4.7,
            "https://images.pexels.com/photos/236010/pexels-photo-236010.jpeg?auto=compress&cs=tinysrgb&w=400",
            "Green Grocers",
            0.8,
            "20-30 min",
            true,
            "dairy",
            None,
            "1 gallon",
            "Farm Fresh",
            &["Fresh"],
        ),
        product(
            "3",
            "Whole Wheat Bread",
            3.99,
            None,
            4.6,
            "https://images.pexels.com/photos/209206/pexels-photo-209206.jpeg?auto=compress&cs=tinysrgb&w=400",
            "City Market",
            1.2,
            "25-35 min",
            false,
            "bakery",
            None,
            "1 loaf",
            "Healthy Choice",
            &["Whole Grain"],
        ),
        product(
            "4",
            "Greek Yogurt",
            5.99,
            None,
            4.8,
            "https://images.pexels.com/photos/1435735/pexels-photo-1435735.jpeg?auto=compress&cs=tinysrgb&w=400",
            "Green Grocers",
            0.8,
            "20-30 min",
            true,
            "dairy",
            None,
            "32 oz",
            "Greek Gods",
            &["Organic", "Protein"],
        ),
        product(
            "5",
            "Red Apples",
            3.49,
            None,
            4.9,
            "https://images.pexels.com/photos/102104/pexels-photo-102104.jpeg?auto=compress&cs=tinysrgb&w=400",
            "Fresh Market",
            0.5,
            "15-25 min",
            true,
            "fruits",
            None,
            "per lb",
            "Local Farm",
            &["Fresh"],
        ),
        product(
            "6",
            "Orange Juice",
            4.79,
            None,
            4.5,
            "https://images.pexels.com/photos/1435735/pexels-photo-1435735.jpeg?auto=compress&cs=tinysrgb&w=400",
            "City Market",
            1.2,
            "25-35 min",
            true,
            "beverages",
            None,
            "64 fl oz",
            "Tropicana",
            &["Fresh"],
        ),
        product(
            "7",
            "Mixed Vegetables Pack",
            5.99,
            None,
            4.4,
            "https://images.pexels.com/photos/1300972/pexels-photo-1300972.jpeg?auto=compress&cs=tinysrgb&w=400",
            "Green Grocers",
            0.8,
            "20-30 min",
            true,
            "vegetables",
            None,
            "1 pack",
            "Garden Pick",
            &["Fresh"],
        ),
        product(
            "8",
            "Brown Rice",
            6.49,
            Some(7.99),
            4.3,
            "https://images.pexels.com/photos/723198/pexels-photo-723198.jpeg?auto=compress&cs=tinysrgb&w=400",
            "City Market",
            1.2,
            "25-35 min",
            true,
            "pantry",
            Some(18),
            "2 lb bag",
            "Healthy Choice",
            &["Whole Grain"],
        ),
    ]
}
