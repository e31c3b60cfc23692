use axum::Router;
use database::TransactionManager;
use domain_users::{PgUserRepository, UserUseCases, handlers};

pub fn router(state: &crate::state::AppState) -> Router {
    let repository = PgUserRepository::new(state.db.clone());
    let use_cases = UserUseCases::new(repository, TransactionManager::new(state.db.clone()));
    handlers::router(use_cases)
}
