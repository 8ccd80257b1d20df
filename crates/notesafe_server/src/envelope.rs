//! Response envelope shared by every API endpoint.

use chrono::{SecondsFormat, Utc};
use notesafe_core::models::page::PaginationMeta;
use serde::{Deserialize, Serialize};

/// `{success, message, data?, meta?, timestamp}` wrapper around API payloads.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<PaginationMeta>,
    pub timestamp: String,
}

/// Current time as an ISO-8601 UTC string with millisecond precision.
pub fn response_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

impl<T> ApiResponse<T> {
    /// Successful response carrying `data`.
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
            meta: None,
            timestamp: response_timestamp(),
        }
    }

    /// Successful response carrying one page of `data` and its metadata.
    pub fn paginated(data: T, meta: PaginationMeta, message: impl Into<String>) -> Self {
        Self {
            meta: Some(meta),
            ..Self::success(data, message)
        }
    }

    /// Failed response with no payload.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
            meta: None,
            timestamp: response_timestamp(),
        }
    }
}
