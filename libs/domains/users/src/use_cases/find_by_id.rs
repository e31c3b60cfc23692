use std::sync::Arc;
use tracing::error;

use crate::error::{UserError, UserResult};
use crate::models::User;
use crate::repository::UserRepository;
use axum_helpers::ErrorCode;

pub struct FindUserByIdUseCase<R> {
    repository: Arc<R>,
}

impl<R: UserRepository> FindUserByIdUseCase<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, id: i32) -> UserResult<User> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(|source| {
                error!(user_id = id, error_code = %ErrorCode::ReadFailed, error = %source, "Failed to fetch user");
                UserError::Database {
                    message: "Failed to fetch user",
                    code: ErrorCode::ReadFailed,
                    source,
                }
            })?
            .ok_or(UserError::NotFound(id))
    }
}
