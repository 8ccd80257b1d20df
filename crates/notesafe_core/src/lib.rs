//! Core domain library for NoteSafe (config, codec, storage, listing, service).

/// Reversible XOR-stream obfuscation for note content at rest.
pub mod codec;
/// Configuration loading and defaults.
pub mod config;
/// Shared constants used across NoteSafe crates.
pub mod constants;
/// Database access layer backed by redb.
pub mod db;
/// Environment mutation helpers (tests and tooling).
pub mod env;
/// Application error types (storage/domain).
pub mod error;
/// Paginated, optionally searched note listing.
pub mod listing;
/// Data models for API requests, responses and persistence.
pub mod models;
/// Note orchestration over codec, listing and storage.
pub mod service;
/// Shared text normalization helpers.
pub mod text;

#[cfg(test)]
pub(crate) mod test_support;

pub use codec::XorCodec;
pub use config::Config;
pub use constants::{DEFAULT_PORT, DEFAULT_XOR_KEY};
pub use db::Database;
pub use error::AppError;
pub use service::NoteService;
