//! Common utilities shared by every repository implementation

pub mod error;
pub mod pagination;

pub use error::{DatabaseError, DatabaseResult};
pub use pagination::{MAX_ROWS, PageRequest, Paginated};
