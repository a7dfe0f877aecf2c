//! Hard-coded order history shown on the orders screen.

use contracts::domain::order::{Order, OrderLine, OrderStatus};

fn line(name: &str, price: f64, quantity: u32, weight: &str, image: &str) -> OrderLine {
    OrderLine {
        name: name.to_string(),
        price,
        quantity,
        weight: weight.to_string(),
        image: image.to_string(),
    }
}

pub fn orders() -> Vec<Order> {
    vec![
        Order {
            id: "1042".to_string(),
            status: OrderStatus::InTransit,
            lines: vec![
                line(
                    "Burger Farsh",
                    13.00,
                    2,
                    "230g",
                    "https://images.pexels.com/photos/1633578/pexels-photo-1633578.jpeg?auto=compress&cs=tinysrgb&w=200",
                ),
                line(
                    "Chicken burger",
                    5.30,
                    1,
                    "220g",
                    "https://images.pexels.com/photos/1639557/pexels-photo-1639557.jpeg?auto=compress&cs=tinysrgb&w=200",
                ),
                line(
                    "Burger Corporate",
                    6.00,
                    1,
                    "260g",
                    "https://images.pexels.com/photos/1633578/pexels-photo-1633578.jpeg?auto=compress&cs=tinysrgb&w=200",
                ),
            ],
            delivery_fee: 2.50,
        },
        Order {
            id: "1017".to_string(),
            status: OrderStatus::Delivered,
            lines: vec![
                line(
                    "Organic Bananas",
                    2.99,
                    3,
                    "per lb",
                    "https://images.pexels.com/photos/2872755/pexels-photo-2872755.jpeg?auto=compress&cs=tinysrgb&w=200",
                ),
                line(
                    "Fresh Milk",
                    4.29,
                    1,
                    "1 gallon",
                    "https://images.pexels.com/photos/236010/pexels-photo-236010.jpeg?auto=compress&cs=tinysrgb&w=200",
                ),
            ],
            delivery_fee: 2.50,
        },
    ]
}
