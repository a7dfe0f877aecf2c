pub mod filter_panel;
pub mod home;
pub mod product_card;
pub mod search;
