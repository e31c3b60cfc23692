//! Users Domain
//!
//! Borrowers of inventory materials. `role` is stored as given; no access
//! policy is derived from it.
//!
//! # Architecture
//!
//! ```text
//! handlers ──► use_cases ──► UserRepository ──► Postgres / in-memory
//!                  │
//!                  └──► TransactionManager (writes only)
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use database::TransactionManager;
//! use domain_users::{handlers, PgUserRepository, UserUseCases};
//! use sea_orm::DatabaseConnection;
//!
//! fn routes(db: DatabaseConnection) -> axum::Router {
//!     let use_cases =
//!         UserUseCases::new(PgUserRepository::new(db.clone()), TransactionManager::new(db));
//!     handlers::router(use_cases)
//! }
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod serializer;
pub mod use_cases;

pub use error::{UserError, UserResult};
pub use models::{CreateUser, UpdateUser, User};
pub use postgres::PgUserRepository;
pub use repository::{InMemoryUserRepository, UserRepository};
pub use serializer::UserResponse;
pub use use_cases::{
    CreateUserUseCase, DeleteUserUseCase, FindUserByIdUseCase, FindUsersUseCase,
    UpdateUserUseCase, UserUseCases,
};
