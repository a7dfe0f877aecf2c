pub mod context;
pub mod reducer;
pub mod storage;
pub mod ui;
