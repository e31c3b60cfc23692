//! Database library providing the PostgreSQL connector, pagination types and
//! the transaction boundary shared by every domain repository.
//!
//! # Features
//!
//! - `postgres` (default) - PostgreSQL support with SeaORM
//! - `config` - Configuration support with `core_config::FromEnv`
//!
//! # Examples
//!
//! ```ignore
//! use database::postgres;
//! use database::TransactionManager;
//! use migration::Migrator;
//!
//! let db = postgres::connect_from_config(PostgresConfig::from_env()?).await?;
//! postgres::run_migrations::<Migrator>(&db, "inventory_api").await?;
//!
//! // One pool, shared by handle.
//! let transactions = TransactionManager::new(db.clone());
//! ```

pub mod common;

#[cfg(feature = "postgres")]
pub mod postgres;

#[cfg(feature = "postgres")]
pub mod transaction;

pub use common::{DatabaseError, DatabaseResult, MAX_ROWS, PageRequest, Paginated};

#[cfg(feature = "postgres")]
pub use transaction::{TransactionManager, UnitOfWork};
