//! Data Transfer Objects for the state host.

pub mod health;
pub mod view;
