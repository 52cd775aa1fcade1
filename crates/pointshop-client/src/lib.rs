//! Pointshop Client — reqwest adapter for the remote commerce API.
//!
//! This crate owns transport details only: URL construction with the shared
//! API credential, percent-encoding of path segments, request timeout, and
//! JSON decoding into envelope types. Everything it returns is either a
//! decoded envelope or a [`GatewayError`](pointshop_core::gateway::GatewayError).

mod http_api;

pub use http_api::{ClientBuildError, HttpCommerceApi};
