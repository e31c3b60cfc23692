use database::TransactionManager;
use std::sync::Arc;
use tracing::{error, info, warn};
use validator::Validate;

use crate::error::{MaterialError, MaterialResult};
use crate::models::{Material, UpdateMaterial};
use crate::repository::MaterialRepository;
use axum_helpers::ErrorCode;

pub struct UpdateMaterialUseCase<R> {
    repository: Arc<R>,
    transactions: TransactionManager,
}

impl<R: MaterialRepository + 'static> UpdateMaterialUseCase<R> {
    pub fn new(repository: Arc<R>, transactions: TransactionManager) -> Self {
        Self {
            repository,
            transactions,
        }
    }

    /// Replaces every mutable field of material `id`.
    ///
    /// The lookup happens before the transaction; a missing id never
    /// reaches the write path.
    pub async fn execute(&self, id: i32, input: UpdateMaterial) -> MaterialResult<Material> {
        let existing = self
            .repository
            .find_by_id(id)
            .await
            .map_err(|source| Self::failed(id, source))?
            .ok_or(MaterialError::NotFound(id))?;

        if let Err(errors) = input.validate() {
            warn!(material_id = id, error_code = %ErrorCode::ValidationError, "Rejected material update");
            return Err(errors.into());
        }

        let material = existing.with_update(input);
        let repository = Arc::clone(&self.repository);

        let updated = self
            .transactions
            .run_in_transaction(move |txn| {
                Box::pin(async move { repository.update(material, Some(txn)).await })
            })
            .await
            .map_err(|source| Self::failed(id, source))?;

        info!(material_id = id, "Material updated");
        Ok(updated)
    }

    fn failed(id: i32, source: database::DatabaseError) -> MaterialError {
        if let database::DatabaseError::RecordNotFound(_) = source {
            // Soft-deleted between the lookup and the write
            info!(material_id = id, "Material vanished before update");
            return MaterialError::NotFound(id);
        }

        error!(material_id = id, error_code = %ErrorCode::UpdateFailed, error = %source, "Failed to update material");
        MaterialError::Database {
            message: "Failed to update material",
            code: ErrorCode::UpdateFailed,
            source,
        }
    }
}
