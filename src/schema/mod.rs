pub mod config;
pub mod style;
