use database::TransactionManager;
use std::sync::Arc;
use tracing::{error, info, warn};
use validator::Validate;

use crate::error::{MaterialError, MaterialResult};
use crate::models::{CreateMaterial, Material};
use crate::repository::MaterialRepository;
use axum_helpers::ErrorCode;

pub struct CreateMaterialUseCase<R> {
    repository: Arc<R>,
    transactions: TransactionManager,
}

impl<R: MaterialRepository + 'static> CreateMaterialUseCase<R> {
    pub fn new(repository: Arc<R>, transactions: TransactionManager) -> Self {
        Self {
            repository,
            transactions,
        }
    }

    /// Validates `input` and inserts it in a transaction.
    ///
    /// Nothing is written when validation fails.
    pub async fn execute(&self, input: CreateMaterial) -> MaterialResult<Material> {
        if let Err(errors) = input.validate() {
            warn!(error_code = %ErrorCode::ValidationError, "Rejected material create");
            return Err(errors.into());
        }

        let material = Material::new(input);
        let repository = Arc::clone(&self.repository);

        let created = self
            .transactions
            .run_in_transaction(move |txn| {
                Box::pin(async move { repository.create(material, Some(txn)).await })
            })
            .await
            .map_err(|source| {
                error!(error_code = %ErrorCode::CreateFailed, error = %source, "Failed to create material");
                MaterialError::Database {
                    message: "Failed to create material",
                    code: ErrorCode::CreateFailed,
                    source,
                }
            })?;

        info!(material_id = created.id, "Material created");
        Ok(created)
    }
}
