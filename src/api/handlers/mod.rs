//! HTTP request handlers.

pub mod health;
pub mod views;

pub use health::health_handler;
pub use views::view_handler;
