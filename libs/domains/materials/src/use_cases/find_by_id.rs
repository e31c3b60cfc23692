use std::sync::Arc;
use tracing::error;

use crate::error::{MaterialError, MaterialResult};
use crate::models::Material;
use crate::repository::MaterialRepository;
use axum_helpers::ErrorCode;

pub struct FindMaterialByIdUseCase<R> {
    repository: Arc<R>,
}

impl<R: MaterialRepository> FindMaterialByIdUseCase<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, id: i32) -> MaterialResult<Material> {
        let found = self.repository.find_by_id(id).await.map_err(|source| {
            error!(material_id = id, error_code = %ErrorCode::ReadFailed, error = %source, "Failed to fetch material");
            MaterialError::Database {
                message: "Failed to fetch material",
                code: ErrorCode::ReadFailed,
                source,
            }
        })?;

        found.ok_or(MaterialError::NotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryMaterialRepository;
    use crate::use_cases::fixtures::create_input;

    #[tokio::test]
    async fn test_finds_live_material() {
        let repo = InMemoryMaterialRepository::new();
        let created = repo
            .create(Material::new(create_input("Material A", 100)), None)
            .await
            .unwrap();

        let found = FindMaterialByIdUseCase::new(Arc::new(repo))
            .execute(created.id)
            .await
            .unwrap();

        assert_eq!(found, created);
    }

    #[tokio::test]
    async fn test_missing_id_is_not_found() {
        let use_case = FindMaterialByIdUseCase::new(Arc::new(InMemoryMaterialRepository::new()));

        let err = use_case.execute(999_999).await.unwrap_err();
        assert!(matches!(err, MaterialError::NotFound(999_999)));
    }

    #[tokio::test]
    async fn test_store_failure_is_read_failed() {
        let repo = InMemoryMaterialRepository::new();
        repo.set_failing(true);

        let err = FindMaterialByIdUseCase::new(Arc::new(repo))
            .execute(1)
            .await
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::ReadFailed);
    }
}
