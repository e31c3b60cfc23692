use std::future::Future;
use std::pin::Pin;

use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionError, TransactionTrait};
use tracing::debug;

use crate::common::DatabaseError;

/// Boxed unit of work borrowing the open transaction for `'c`.
pub type UnitOfWork<'c, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'c>>;

/// Runs units of work atomically against the shared connection pool.
///
/// Cloning is cheap: the pool handle is reference counted, so every
/// use-case can hold its own copy.
///
/// # Example
///
/// ```ignore
/// let created = transactions
///     .run_in_transaction(move |txn| {
///         Box::pin(async move { repository.create(material, Some(txn)).await })
///     })
///     .await?;
/// ```
#[derive(Clone, Debug)]
pub struct TransactionManager {
    db: DatabaseConnection,
}

impl TransactionManager {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Begins a transaction, runs `work` with it and commits on `Ok`.
    ///
    /// On `Err` the transaction is rolled back and the unit of work's error
    /// is returned unchanged. Failures to begin or commit are converted into
    /// `E` through `From<DatabaseError>`.
    pub async fn run_in_transaction<F, T, E>(&self, work: F) -> Result<T, E>
    where
        F: for<'c> FnOnce(&'c DatabaseTransaction) -> UnitOfWork<'c, T, E> + Send,
        T: Send,
        E: std::error::Error + From<DatabaseError> + Send,
    {
        debug!("Beginning transaction");
        let result = self.db.transaction(work).await;

        match result {
            Ok(value) => {
                debug!("Transaction committed");
                Ok(value)
            }
            Err(TransactionError::Transaction(err)) => {
                debug!(error = %err, "Transaction rolled back");
                Err(err)
            }
            Err(TransactionError::Connection(err)) => {
                Err(E::from(DatabaseError::Postgres(err)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn mock_manager() -> TransactionManager {
        TransactionManager::new(MockDatabase::new(DatabaseBackend::Postgres).into_connection())
    }

    #[tokio::test]
    async fn test_returns_unit_of_work_value() {
        let manager = mock_manager();

        let value = manager
            .run_in_transaction(|_txn| Box::pin(async { Ok::<_, DatabaseError>(41 + 1) }))
            .await
            .unwrap();

        assert_eq!(value, 42);
    }

    #[tokio::test]
    async fn test_propagates_unit_of_work_error_unchanged() {
        let manager = mock_manager();

        let err = manager
            .run_in_transaction(|_txn| {
                Box::pin(async {
                    Err::<(), _>(DatabaseError::RecordNotFound("materials id=9".to_string()))
                })
            })
            .await
            .unwrap_err();

        assert!(matches!(err, DatabaseError::RecordNotFound(ref what) if what == "materials id=9"));
    }
}
