use chrono::Utc;
use database::TransactionManager;
use std::sync::Arc;
use tracing::{error, info};

use crate::error::{MaterialError, MaterialResult};
use crate::models::Material;
use crate::repository::MaterialRepository;
use axum_helpers::ErrorCode;

pub struct DeleteMaterialUseCase<R> {
    repository: Arc<R>,
    transactions: TransactionManager,
}

impl<R: MaterialRepository + 'static> DeleteMaterialUseCase<R> {
    pub fn new(repository: Arc<R>, transactions: TransactionManager) -> Self {
        Self {
            repository,
            transactions,
        }
    }

    /// Soft-deletes material `id` and returns the marked snapshot.
    ///
    /// Deleting an already deleted id is `NotFound`.
    pub async fn execute(&self, id: i32) -> MaterialResult<Material> {
        let existing = self
            .repository
            .find_by_id(id)
            .await
            .map_err(|source| Self::failed(id, source))?
            .ok_or(MaterialError::NotFound(id))?;

        let material = existing.mark_deleted(Utc::now());
        let repository = Arc::clone(&self.repository);

        let deleted = self
            .transactions
            .run_in_transaction(move |txn| {
                Box::pin(async move { repository.delete(material, Some(txn)).await })
            })
            .await
            .map_err(|source| Self::failed(id, source))?;

        info!(material_id = id, "Material deleted");
        Ok(deleted)
    }

    fn failed(id: i32, source: database::DatabaseError) -> MaterialError {
        if let database::DatabaseError::RecordNotFound(_) = source {
            // Soft-deleted between the lookup and the write
            info!(material_id = id, "Material vanished before delete");
            return MaterialError::NotFound(id);
        }

        error!(material_id = id, error_code = %ErrorCode::DeleteFailed, error = %source, "Failed to delete material");
        MaterialError::Database {
            message: "Failed to delete material",
            code: ErrorCode::DeleteFailed,
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryMaterialRepository;
    use crate::use_cases::fixtures::{StaleReads, create_input, transactions};

    #[tokio::test]
    async fn test_second_delete_is_not_found() {
        let repo = InMemoryMaterialRepository::new();
        let created = repo
            .create(Material::new(create_input("Material A", 100)), None)
            .await
            .unwrap();
        let use_case = DeleteMaterialUseCase::new(Arc::new(repo.clone()), transactions());

        let deleted = use_case.execute(created.id).await.unwrap();
        assert!(deleted.deleted_at.is_some());
        assert_eq!(deleted.name, "Material A");

        let writes = repo.writes();
        let err = use_case.execute(created.id).await.unwrap_err();
        assert!(matches!(err, MaterialError::NotFound(id) if id == created.id));
        assert_eq!(repo.writes(), writes);
    }

    #[tokio::test]
    async fn test_deleted_material_is_not_listed() {
        let repo = InMemoryMaterialRepository::new();
        let created = repo
            .create(Material::new(create_input("Material A", 100)), None)
            .await
            .unwrap();

        DeleteMaterialUseCase::new(Arc::new(repo.clone()), transactions())
            .execute(created.id)
            .await
            .unwrap();

        assert!(repo.find_by_id(created.id).await.unwrap().is_none());
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_row_deleted_after_lookup_is_not_found() {
        let repo = InMemoryMaterialRepository::new();
        let created = repo
            .create(Material::new(create_input("Material A", 100)), None)
            .await
            .unwrap();
        repo.delete(created.clone().mark_deleted(Utc::now()), None)
            .await
            .unwrap();
        let stale = StaleReads {
            inner: repo,
            snapshot: created.clone(),
        };

        let err = DeleteMaterialUseCase::new(Arc::new(stale), transactions())
            .execute(created.id)
            .await
            .unwrap_err();

        assert!(matches!(err, MaterialError::NotFound(id) if id == created.id));
    }
}
