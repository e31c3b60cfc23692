//! `?page=&limit=` query extractor.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use database::{MAX_ROWS, PageRequest};
use serde::Deserialize;
use utoipa::IntoParams;

/// Raw query parameters, kept as strings so a non-numeric value yields a
/// field-level validation error instead of a generic query rejection.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageParams {
    /// One-based page number (default 1)
    #[param(value_type = Option<u64>, minimum = 1, example = 1)]
    pub page: Option<String>,
    /// Page size (default 10)
    #[param(value_type = Option<u64>, minimum = 1, example = 10)]
    pub limit: Option<String>,
}

impl PageParams {
    pub fn into_page_request(self) -> Result<PageRequest, AppError> {
        let defaults = PageRequest::default();
        let page = parse_positive("page", self.page.as_deref(), defaults.page)?;
        let limit = parse_positive("limit", self.limit.as_deref(), defaults.limit)?;

        if limit > MAX_ROWS {
            return Err(AppError::invalid_field(
                format!("limit must not exceed {MAX_ROWS}"),
                "limit",
                "max",
            ));
        }

        // Positive and within range, so only the page can push the offset out of bounds.
        PageRequest::new(page, limit).ok_or_else(|| {
            AppError::invalid_field(
                format!("page {page} starts beyond row {MAX_ROWS}"),
                "page",
                "max",
            )
        })
    }
}

fn parse_positive(field: &str, raw: Option<&str>, default: u64) -> Result<u64, AppError> {
    let Some(raw) = raw else {
        return Ok(default);
    };

    match raw.trim().parse::<u64>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(AppError::invalid_field(
            format!("{field} must be a positive integer"),
            field,
            "positive",
        )),
    }
}

/// Validated paging parameters.
///
/// # Example
/// ```ignore
/// async fn list_materials(PageQuery(page): PageQuery) -> String {
///     format!("page {} of size {}", page.page, page.limit)
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageQuery(pub PageRequest);

impl<S> FromRequestParts<S> for PageQuery
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<PageParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        params.into_page_request().map(PageQuery)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(page: Option<&str>, limit: Option<&str>) -> PageParams {
        PageParams {
            page: page.map(str::to_string),
            limit: limit.map(str::to_string),
        }
    }

    #[test]
    fn test_defaults_when_absent() {
        let request = PageParams::default().into_page_request().unwrap();
        assert_eq!(request, PageRequest { page: 1, limit: 10 });
    }

    #[test]
    fn test_explicit_values() {
        let request = params(Some("3"), Some("25")).into_page_request().unwrap();
        assert_eq!(request, PageRequest { page: 3, limit: 25 });
    }

    fn rejected_field(page: Option<&str>, limit: Option<&str>) -> (String, String) {
        match params(page, limit).into_page_request().unwrap_err() {
            AppError::Validation { details, .. } => {
                (details[0].field.clone(), details[0].constraint.clone())
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_rejects_limit_beyond_bigint() {
        let (field, constraint) = rejected_field(None, Some("9223372036854775808"));
        assert_eq!((field.as_str(), constraint.as_str()), ("limit", "max"));

        let request = params(None, Some("9223372036854775807"))
            .into_page_request()
            .unwrap();
        assert_eq!(request.limit, MAX_ROWS);
    }

    #[test]
    fn test_rejects_page_whose_offset_overflows() {
        let (field, constraint) = rejected_field(Some("922337203685477582"), Some("10"));
        assert_eq!((field.as_str(), constraint.as_str()), ("page", "max"));

        let request = params(Some("922337203685477581"), Some("10"))
            .into_page_request()
            .unwrap();
        assert_eq!(request.offset(), 9_223_372_036_854_775_800);
    }

    #[test]
    fn test_rejects_non_positive_or_non_numeric() {
        for (page, limit, field) in [
            (Some("0"), None, "page"),
            (Some("-1"), None, "page"),
            (None, Some("ten"), "limit"),
            (None, Some("0"), "limit"),
        ] {
            let err = params(page, limit).into_page_request().unwrap_err();
            match err {
                AppError::Validation { details, .. } => assert_eq!(details[0].field, field),
                other => panic!("unexpected error: {other:?}"),
            }
        }
    }
}
