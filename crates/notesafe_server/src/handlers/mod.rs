//! HTTP request handlers.

/// Note endpoints.
pub mod note;
pub(crate) mod params;
