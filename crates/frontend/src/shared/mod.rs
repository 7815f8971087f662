pub mod components;
pub mod config;
pub mod format;
pub mod icons;
pub mod styles;
