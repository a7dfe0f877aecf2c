pub mod controller;
pub mod widget;

pub use widget::BottomNav;
