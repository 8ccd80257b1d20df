//! Shared constants used across NoteSafe crates.

/// Default API port for NoteSafe.
pub const DEFAULT_PORT: u16 = 3000;

/// Fallback XOR key used when `XOR_KEY` is unset.
///
/// This is a weak, publicly known literal. It keeps a fresh checkout usable
/// and offers no confidentiality.
pub const DEFAULT_XOR_KEY: &str = "DEFAULT_XOR_KEY";

/// Default browser origin allowed by CORS.
pub const DEFAULT_FRONTEND_ORIGIN: &str = "http://localhost:5173";

/// Default maximum request body accepted by the API layer.
pub const DEFAULT_MAX_NOTE_SIZE: usize = 1024 * 1024;

/// Page size used when a page request carries no usable limit.
pub const DEFAULT_PAGE_LIMIT: u64 = 10;

/// Page size used by the list endpoint when the client sends no `limit`.
pub const LIST_ENDPOINT_DEFAULT_LIMIT: u64 = 12;

/// Largest page size a client may request.
pub const MAX_PAGE_LIMIT: u64 = 100;
