//! Hard-coded nearby shops shown on the shops screen.

use contracts::domain::shop::Shop;

#[allow(clippy::too_many_arguments)]
fn shop(
    id: &str,
    name: &str,
    rating: f64,
    review_count: u32,
    distance: f64,
    address: &str,
    phone: &str,
    delivery_time: &str,
    image: &str,
    categories: &[&str],
    is_open: bool,
    open_hours: &str,
    product_count: u32,
) -> Shop {
    Shop {
        id: id.to_string(),
        name: name.to_string(),
        rating,
        review_count,
        distance,
        address: address.to_string(),
        phone: phone.to_string(),
        delivery_time: delivery_time.to_string(),
        image: image.to_string(),
        categories: categories.iter().map(|c| c.to_string()).collect(),
        is_open,
        open_hours: open_hours.to_string(),
        product_count,
    }
}

pub fn nearby_shops() -> Vec<Shop> {
    vec![
        shop(
            "1",
            "Fresh Market",
            4.8,
            324,
            0.5,
            "123 Main Street, Downtown",
            "+1 (555) 123-4567",
            "15-25 min",
            "https://images.pexels.com/photos/264636/pexels-photo-264636.jpeg?auto=compress&cs=tinysrgb&w=400",
            &["Organic", "Fresh Produce", "Dairy"],
            true,
            "7:00 AM - 10:00 PM",
            1250,
        ),
        shop(
            "2",
            "Green Grocers",
            4.6,
            189,
            0.8,
            "456 Oak Avenue, Midtown",
            "+1 (555) 234-5678",
            "20-30 min",
            "https://images.pexels.com/photos/1435904/pexels-photo-1435904.jpeg?auto=compress&cs=tinysrgb&w=400",
            &["Organic", "Local", "Vegetables"],
            true,
            "6:00 AM - 11:00 PM",
            890,
        ),
        shop(
            "3",
            "City Market",
            4.5,
            267,
            1.2,
            "789 Pine Road, Uptown",
            "+1 (555) 345-6789",
            "25-35 min",
            "https://images.pexels.com/photos/1435904/pexels-photo-1435904.jpeg?auto=compress&cs=tinysrgb&w=400",
            &["Supermarket", "Bulk", "International"],
            false,
            "8:00 AM - 9:00 PM",
            2100,
        ),
        shop(
            "4",
            "Corner Store Plus",
            4.3,
            156,
            1.5,
            "321 Elm Street, Westside",
            "+1 (555) 456-7890",
            "30-40 min",
            "https://images.pexels.com/photos/264636/pexels-photo-264636.jpeg?auto=compress&cs=tinysrgb&w=400",
            &["Convenience", "Snacks", "Beverages"],
            true,
            "24/7",
            450,
        ),
        shop(
            "5",
            "Organic Haven",
            4.9,
            98,
            2.1,
            "654 Maple Drive, Eastside",
            "+1 (555) 567-8901",
            "35-45 min",
            "https://images.pexels.com/photos/1435904/pexels-photo-1435904.jpeg?auto=compress&cs=tinysrgb&w=400",
            &["Organic", "Health Foods", "Vegan"],
            true,
            "9:00 AM - 8:00 PM",
            680,
        ),
    ]
}
