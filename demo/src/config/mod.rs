pub mod app;
pub mod log;

pub use app::{AppConfig, Variant};
