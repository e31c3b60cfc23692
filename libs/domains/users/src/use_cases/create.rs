use database::{DatabaseError, TransactionManager};
use std::sync::Arc;
use tracing::{error, info, warn};
use validator::Validate;

use crate::error::{UserError, UserResult};
use crate::models::{CreateUser, User};
use crate::repository::UserRepository;
use axum_helpers::ErrorCode;

pub struct CreateUserUseCase<R> {
    repository: Arc<R>,
    transactions: TransactionManager,
}

impl<R: UserRepository + 'static> CreateUserUseCase<R> {
    pub fn new(repository: Arc<R>, transactions: TransactionManager) -> Self {
        Self {
            repository,
            transactions,
        }
    }

    /// Validates `input` and inserts the user in a transaction.
    ///
    /// A username already held by a live user is `DuplicateUsername`.
    pub async fn execute(&self, input: CreateUser) -> UserResult<User> {
        if let Err(errors) = input.validate() {
            warn!(error_code = %ErrorCode::ValidationError, "Rejected user create");
            return Err(errors.into());
        }

        let username = input.username.clone();
        let user = User::new(input);
        let repository = Arc::clone(&self.repository);

        let created = self
            .transactions
            .run_in_transaction(move |txn| {
                Box::pin(async move { repository.create(user, Some(txn)).await })
            })
            .await
            .map_err(|source| match source {
                DatabaseError::UniqueViolation(_) => {
                    warn!(username = %username, error_code = %ErrorCode::Conflict, "Username already exists");
                    UserError::DuplicateUsername(username)
                }
                source => {
                    error!(error_code = %ErrorCode::CreateFailed, error = %source, "Failed to create user");
                    UserError::Database {
                        message: "Failed to create user",
                        code: ErrorCode::CreateFailed,
                        source,
                    }
                }
            })?;

        info!(user_id = created.id, "User created");
        Ok(created)
    }
}
