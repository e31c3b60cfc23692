use database::{PageRequest, Paginated};
use std::sync::Arc;
use tracing::{debug, error};

use crate::error::{MaterialError, MaterialResult};
use crate::models::Material;
use crate::repository::MaterialRepository;
use axum_helpers::ErrorCode;

pub struct FindMaterialsUseCase<R> {
    repository: Arc<R>,
}

impl<R: MaterialRepository> FindMaterialsUseCase<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Returns the page envelope as is; an empty page is a valid result.
    pub async fn execute(&self, page: PageRequest) -> MaterialResult<Paginated<Material>> {
        let result = self.repository.find_all(page).await.map_err(|source| {
            error!(error_code = %ErrorCode::ReadFailed, error = %source, "Failed to fetch materials");
            MaterialError::Database {
                message: "Failed to fetch materials",
                code: ErrorCode::ReadFailed,
                source,
            }
        })?;

        debug!(page = page.page, limit = page.limit, total = result.total, "Listed materials");
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryMaterialRepository;
    use crate::use_cases::fixtures::create_input;

    #[tokio::test]
    async fn test_empty_table_yields_empty_envelope() {
        let use_case = FindMaterialsUseCase::new(Arc::new(InMemoryMaterialRepository::new()));

        let page = use_case.execute(PageRequest::default()).await.unwrap();

        assert!(page.data.is_empty());
        assert_eq!((page.total, page.page, page.limit, page.total_pages), (0, 1, 10, 0));
    }

    #[tokio::test]
    async fn test_page_never_exceeds_limit() {
        let repo = InMemoryMaterialRepository::new();
        for i in 0..7 {
            repo.create(Material::new(create_input(&format!("Material {i}"), i)), None)
                .await
                .unwrap();
        }
        let use_case = FindMaterialsUseCase::new(Arc::new(repo));

        for limit in 1..=8 {
            let request = PageRequest::new(1, limit).unwrap();
            let page = use_case.execute(request).await.unwrap();

            assert!(page.data.len() as u64 <= limit);
            assert_eq!(page.total_pages, 7u64.div_ceil(limit));
        }
    }

    #[tokio::test]
    async fn test_page_past_the_end_is_empty() {
        let repo = InMemoryMaterialRepository::new();
        repo.create(Material::new(create_input("Material A", 1)), None)
            .await
            .unwrap();

        let page = FindMaterialsUseCase::new(Arc::new(repo))
            .execute(PageRequest::new(5, 10).unwrap())
            .await
            .unwrap();

        assert!(page.data.is_empty());
        assert_eq!(page.total, 1);
    }

    #[tokio::test]
    async fn test_largest_addressable_pages_are_empty_envelopes() {
        let repo = InMemoryMaterialRepository::new();
        repo.create(Material::new(create_input("Material A", 1)), None)
            .await
            .unwrap();
        let use_case = FindMaterialsUseCase::new(Arc::new(repo));

        let widest = use_case
            .execute(PageRequest::new(1, database::MAX_ROWS).unwrap())
            .await
            .unwrap();
        assert_eq!(widest.data.len(), 1);
        assert_eq!(widest.total_pages, 1);

        let last = use_case
            .execute(PageRequest::new(922_337_203_685_477_581, 10).unwrap())
            .await
            .unwrap();
        assert!(last.data.is_empty());
        assert_eq!((last.total, last.total_pages), (1, 1));
    }
}
