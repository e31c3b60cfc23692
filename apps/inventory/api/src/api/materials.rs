use axum::Router;
use database::TransactionManager;
use domain_materials::{MaterialUseCases, PgMaterialRepository, handlers};

pub fn router(state: &crate::state::AppState) -> Router {
    let repository = PgMaterialRepository::new(state.db.clone());
    let use_cases = MaterialUseCases::new(repository, TransactionManager::new(state.db.clone()));
    handlers::router(use_cases)
}
