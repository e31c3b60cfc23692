use database::{PageRequest, Paginated};
use std::sync::Arc;
use tracing::error;

use crate::error::{UserError, UserResult};
use crate::models::User;
use crate::repository::UserRepository;
use axum_helpers::ErrorCode;

pub struct FindUsersUseCase<R> {
    repository: Arc<R>,
}

impl<R: UserRepository> FindUsersUseCase<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Empty pages are returned as is, never as `NotFound`.
    pub async fn execute(&self, page: PageRequest) -> UserResult<Paginated<User>> {
        self.repository.find_all(page).await.map_err(|source| {
            error!(error_code = %ErrorCode::ReadFailed, error = %source, "Failed to fetch users");
            UserError::Database {
                message: "Failed to fetch users",
                code: ErrorCode::ReadFailed,
                source,
            }
        })
    }
}
