//! Pagination request normalization and result envelope

use serde::Deserialize;
use utoipa::IntoParams;

use crate::domain::{DomainError, DomainResult};

/// Page number used when the query param is absent
pub const DEFAULT_PAGE: u32 = 1;
/// Page size used when the query param is absent
pub const DEFAULT_LIMIT: u32 = 50;

/// Raw pagination query parameters, as received from the client.
///
/// Kept as strings so that malformed input is rejected by [`PageQuery::normalize`]
/// instead of silently coercing into the offset arithmetic.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct PageQuery {
    /// Page number (1-based). Default: 1
    pub page: Option<String>,
    /// Items per page. Default: 50
    pub limit: Option<String>,
}

impl PageQuery {
    /// Coerce the raw parameters into a validated `{page, limit}` pair.
    ///
    /// Missing parameters take the defaults; non-numeric or non-positive
    /// values fail with [`DomainError::InvalidPagination`].
    pub fn normalize(&self) -> DomainResult<PageRequest> {
        let page = parse_param("page", self.page.as_deref(), DEFAULT_PAGE)?;
        let limit = parse_param("limit", self.limit.as_deref(), DEFAULT_LIMIT)?;
        Ok(PageRequest { page, limit })
    }
}

fn parse_param(name: &'static str, raw: Option<&str>, default: u32) -> DomainResult<u32> {
    let Some(raw) = raw else {
        return Ok(default);
    };
    match raw.trim().parse::<u32>() {
        Ok(value) if value >= 1 => Ok(value),
        _ => Err(DomainError::InvalidPagination(format!(
            "{} must be a positive integer, got '{}'",
            name, raw
        ))),
    }
}

/// Normalized pagination parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Page number, 1-based
    pub page: u32,
    /// Maximum item count per page
    pub limit: u32,
}

impl PageRequest {
    /// Number of rows to skip: `(page - 1) * limit`.
    ///
    /// `page >= 1` is guaranteed by the normalizer, so this never underflows.
    pub fn offset(&self) -> u64 {
        (self.page as u64 - 1) * self.limit as u64
    }
}

/// One page of results plus the metadata the caller needs to page further
#[derive(Debug)]
pub struct PaginatedResult<T> {
    /// Items in the requested window, at most `limit` of them
    pub data: Vec<T>,
    /// Echoed page number
    pub page: u32,
    /// Echoed page size
    pub limit: u32,
    /// Total item count across all pages
    pub total_count: u64,
}

impl<T> PaginatedResult<T> {
    pub fn new(data: Vec<T>, page: u32, limit: u32, total_count: u64) -> Self {
        Self {
            data,
            page,
            limit,
            total_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(page: Option<&str>, limit: Option<&str>) -> PageQuery {
        PageQuery {
            page: page.map(String::from),
            limit: limit.map(String::from),
        }
    }

    #[test]
    fn missing_params_take_defaults() {
        let req = query(None, None).normalize().unwrap();
        assert_eq!(req.page, DEFAULT_PAGE);
        assert_eq!(req.limit, DEFAULT_LIMIT);
    }

    #[test]
    fn numeric_params_pass_through() {
        let req = query(Some("3"), Some("10")).normalize().unwrap();
        assert_eq!(req.page, 3);
        assert_eq!(req.limit, 10);
    }

    #[test]
    fn non_numeric_page_is_rejected() {
        let err = query(Some("abc"), Some("10")).normalize().unwrap_err();
        assert!(matches!(err, DomainError::InvalidPagination(_)));
    }

    #[test]
    fn zero_page_is_rejected() {
        let err = query(Some("0"), Some("10")).normalize().unwrap_err();
        assert!(matches!(err, DomainError::InvalidPagination(_)));
    }

    #[test]
    fn negative_limit_is_rejected() {
        let err = query(Some("1"), Some("-5")).normalize().unwrap_err();
        assert!(matches!(err, DomainError::InvalidPagination(_)));
    }

    #[test]
    fn offset_is_page_minus_one_times_limit() {
        let req = PageRequest { page: 3, limit: 10 };
        assert_eq!(req.offset(), 20);
        let first = PageRequest { page: 1, limit: 50 };
        assert_eq!(first.offset(), 0);
    }

    #[test]
    fn offset_does_not_overflow_u32_product() {
        let req = PageRequest {
            page: u32::MAX,
            limit: u32::MAX,
        };
        assert_eq!(
            req.offset(),
            (u32::MAX as u64 - 1) * u32::MAX as u64
        );
    }
}
