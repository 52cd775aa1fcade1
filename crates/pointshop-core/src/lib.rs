//! Pointshop Core — domain types and the purchase workflow.
//!
//! This crate defines the storefront's data model, error taxonomy, and the
//! purchase-then-view orchestration logic. It contains no HTTP-framework or
//! transport code; the remote commerce API is reached through the
//! [`gateway::CommerceApi`] seam.

pub mod catalog;
pub mod config;
pub mod envelope;
pub mod error;
pub mod gateway;
pub mod purchase;
pub mod workflow;
