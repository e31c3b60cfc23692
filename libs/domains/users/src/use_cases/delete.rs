use chrono::Utc;
use database::{DatabaseError, TransactionManager};
use std::sync::Arc;
use tracing::{error, info};

use crate::error::{UserError, UserResult};
use crate::models::User;
use crate::repository::UserRepository;
use axum_helpers::ErrorCode;

pub struct DeleteUserUseCase<R> {
    repository: Arc<R>,
    transactions: TransactionManager,
}

impl<R: UserRepository + 'static> DeleteUserUseCase<R> {
    pub fn new(repository: Arc<R>, transactions: TransactionManager) -> Self {
        Self {
            repository,
            transactions,
        }
    }

    /// Locates user `id`, marks it deleted and persists the marker.
    pub async fn execute(&self, id: i32) -> UserResult<User> {
        let existing = self
            .repository
            .find_by_id(id)
            .await
            .map_err(|source| Self::failed(id, source))?
            .ok_or(UserError::NotFound(id))?;

        let user = existing.mark_deleted(Utc::now());
        let repository = Arc::clone(&self.repository);

        let deleted = self
            .transactions
            .run_in_transaction(move |txn| {
                Box::pin(async move { repository.delete(user, Some(txn)).await })
            })
            .await
            .map_err(|source| Self::failed(id, source))?;

        info!(user_id = id, "User deleted");
        Ok(deleted)
    }

    fn failed(id: i32, source: DatabaseError) -> UserError {
        if let DatabaseError::RecordNotFound(_) = source {
            // Soft-deleted between the lookup and the write
            info!(user_id = id, "User vanished before delete");
            return UserError::NotFound(id);
        }

        error!(user_id = id, error_code = %ErrorCode::DeleteFailed, error = %source, "Failed to delete user");
        UserError::Database {
            message: "Failed to delete user",
            code: ErrorCode::DeleteFailed,
            source,
        }
    }
}
