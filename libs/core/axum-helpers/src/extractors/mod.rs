//! Custom extractors for Axum handlers.
//!
//! Every rejection is an [`crate::errors::AppError`], so malformed ids,
//! query strings and bodies produce the same 400 `VAL_001` body as DTO
//! validation.

pub mod id_path;
pub mod page_query;
pub mod validated_json;

pub use id_path::IdPath;
pub use page_query::PageQuery;
pub use validated_json::ValidatedJson;
