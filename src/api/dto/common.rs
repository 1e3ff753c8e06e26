//! Common API DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Standard API response wrapper for errors and single-object results.
///
/// On success: `{"success": true, "data": {...}}`,
/// on failure: `{"success": false, "error": "description"}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// `true` if the request succeeded
    pub success: bool,
    /// Payload. `null` on failure
    pub data: Option<T>,
    /// Error description. `null` on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Paginated response envelope
///
/// Contains one window of data plus the page metadata. `totalCount` always
/// reflects the full collection size, not the window.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PaginatedResponse<T> {
    /// Items on the current page
    pub data: Vec<T>,
    /// Current page (1-based), echoed from the request
    pub page: u32,
    /// Page size, echoed from the request
    pub limit: u32,
    /// Total item count across all pages
    #[serde(rename = "totalCount")]
    pub total_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_response_skips_data() {
        let resp: ApiResponse<()> = ApiResponse::error("boom");
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "boom");
        assert!(json["data"].is_null());
    }

    #[test]
    fn paginated_envelope_uses_total_count_key() {
        let resp = PaginatedResponse::<u32> {
            data: vec![1, 2],
            page: 1,
            limit: 2,
            total_count: 7,
        };
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["totalCount"], 7);
        assert!(json.get("total_count").is_none());
    }
}
