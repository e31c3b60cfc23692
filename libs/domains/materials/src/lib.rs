//! Materials Domain
//!
//! Inventory items that can be lent out: CRUD with pagination and soft delete.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, path/query/body extraction
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │  Use-cases  │  ← One per operation: validate, locate, transact, log
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + in-memory and Postgres impls)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entity, DTOs, serializer
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use database::TransactionManager;
//! use domain_materials::{handlers, MaterialUseCases, PgMaterialRepository};
//! use sea_orm::DatabaseConnection;
//!
//! fn routes(db: DatabaseConnection) -> axum::Router {
//!     let repository = PgMaterialRepository::new(db.clone());
//!     let use_cases = MaterialUseCases::new(repository, TransactionManager::new(db));
//!
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

// Re-export commonly used types
pub use error::{MaterialError, MaterialResult};
pub use models::{CreateMaterial, Material, UpdateMaterial};
pub use postgres::PgMaterialRepository;
pub use repository::{InMemoryMaterialRepository, MaterialRepository};
pub use serializer::MaterialResponse;
pub use use_cases::{
    CreateMaterialUseCase, DeleteMaterialUseCase, FindMaterialByIdUseCase, FindMaterialsUseCase,
    MaterialUseCases, UpdateMaterialUseCase,
};
