use database::{DatabaseError, TransactionManager};
use std::sync::Arc;
use tracing::{error, info, warn};
use validator::Validate;

use crate::error::{UserError, UserResult};
use crate::models::{UpdateUser, User};
use crate::repository::UserRepository;
use axum_helpers::ErrorCode;

pub struct UpdateUserUseCase<R> {
    repository: Arc<R>,
    transactions: TransactionManager,
}

impl<R: UserRepository + 'static> UpdateUserUseCase<R> {
    pub fn new(repository: Arc<R>, transactions: TransactionManager) -> Self {
        Self {
            repository,
            transactions,
        }
    }

    /// Replaces the profile of user `id`; `username` and `createdAt` are kept.
    pub async fn execute(&self, id: i32, input: UpdateUser) -> UserResult<User> {
        let existing = self
            .repository
            .find_by_id(id)
            .await
            .map_err(|source| Self::failed(id, source))?
            .ok_or(UserError::NotFound(id))?;

        if let Err(errors) = input.validate() {
            warn!(user_id = id, error_code = %ErrorCode::ValidationError, "Rejected user update");
            return Err(errors.into());
        }

        let user = existing.with_update(input);
        let repository = Arc::clone(&self.repository);

        let updated = self
            .transactions
            .run_in_transaction(move |txn| {
                Box::pin(async move { repository.update(user, Some(txn)).await })
            })
            .await
            .map_err(|source| Self::failed(id, source))?;

        info!(user_id = id, "User updated");
        Ok(updated)
    }

    fn failed(id: i32, source: DatabaseError) -> UserError {
        if let DatabaseError::RecordNotFound(_) = source {
            // Soft-deleted between the lookup and the write
            info!(user_id = id, "User vanished before update");
            return UserError::NotFound(id);
        }

        error!(user_id = id, error_code = %ErrorCode::UpdateFailed, error = %source, "Failed to update user");
        UserError::Database {
            message: "Failed to update user",
            code: ErrorCode::UpdateFailed,
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryUserRepository;
    use crate::use_cases::fixtures::{StaleReads, create_input, transactions, update_input};

    #[tokio::test]
    async fn test_updates_profile() {
        let repo = InMemoryUserRepository::new();
        let created = repo
            .create(User::new(create_input("admin1")), None)
            .await
            .unwrap();
        let use_case = UpdateUserUseCase::new(Arc::new(repo), transactions());

        let updated = use_case
            .execute(created.id, update_input("Johnny"))
            .await
            .unwrap();

        assert_eq!(updated.username, "admin1");
        assert_eq!(updated.first_name, "Johnny");
        assert_eq!(updated.role, "borrower");
        assert_eq!(updated.department, None);
        assert_eq!(updated.created_at, created.created_at);
    }

    #[tokio::test]
    async fn test_missing_user_performs_no_write() {
        let repo = InMemoryUserRepository::new();
        let use_case = UpdateUserUseCase::new(Arc::new(repo.clone()), transactions());

        let err = use_case.execute(99, update_input("Johnny")).await.unwrap_err();

        assert!(matches!(err, UserError::NotFound(99)));
        assert_eq!(repo.writes(), 0);
    }

    #[tokio::test]
    async fn test_missing_phone_is_rejected() {
        let repo = InMemoryUserRepository::new();
        let created = repo
            .create(User::new(create_input("admin1")), None)
            .await
            .unwrap();
        let use_case = UpdateUserUseCase::new(Arc::new(repo), transactions());

        let mut input = update_input("Johnny");
        input.phone = None;
        let err = use_case.execute(created.id, input).await.unwrap_err();

        match err {
            UserError::Validation(details) => assert_eq!(details[0].field, "phone"),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_user_deleted_after_lookup_is_not_found() {
        let repo = InMemoryUserRepository::new();
        let created = repo
            .create(User::new(create_input("admin1")), None)
            .await
            .unwrap();
        repo.delete(created.clone().mark_deleted(chrono::Utc::now()), None)
            .await
            .unwrap();
        let stale = StaleReads {
            inner: repo,
            snapshot: created.clone(),
        };

        let err = UpdateUserUseCase::new(Arc::new(stale), transactions())
            .execute(created.id, update_input("Johnny"))
            .await
            .unwrap_err();

        assert!(matches!(err, UserError::NotFound(id) if id == created.id));
        assert_eq!(err.code(), ErrorCode::NotFound);
    }
}
