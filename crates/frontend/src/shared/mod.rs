pub mod format;
pub mod icons;
