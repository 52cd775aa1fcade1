//! Shared test mocks for the pointshop workspace.

mod api;

pub use api::{FailingCommerceApi, RecordedCall, RecordingCommerceApi};
