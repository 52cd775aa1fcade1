//! Pointshop Web — axum front-end for the remote commerce shop.

pub mod error;
pub mod identity;
pub mod render;
pub mod routes;
pub mod state;
