pub mod data;
pub mod filter;
pub mod ui;
