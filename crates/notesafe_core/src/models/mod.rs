//! Data models for API requests, responses and persistence.

/// Note rows, views and request payloads.
pub mod note;
/// Page requests and pagination metadata.
pub mod page;
