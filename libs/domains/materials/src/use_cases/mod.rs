//! One use-case per operation.
//!
//! Each holds the repository and the [`TransactionManager`] it needs and
//! exposes a single `execute`. Reads run directly on the pool; writes
//! locate the target first, then persist inside a transaction.

mod create;
mod delete;
mod find_all;
mod find_by_id;
mod update;

pub use create::CreateMaterialUseCase;
pub use delete::DeleteMaterialUseCase;
pub use find_all::FindMaterialsUseCase;
pub use find_by_id::FindMaterialByIdUseCase;
pub use update::UpdateMaterialUseCase;

use database::TransactionManager;
use std::sync::Arc;

use crate::repository::MaterialRepository;

/// Every material use-case wired to one repository.
pub struct MaterialUseCases<R> {
    pub create: CreateMaterialUseCase<R>,
    pub find_by_id: FindMaterialByIdUseCase<R>,
    pub find_all: FindMaterialsUseCase<R>,
    pub update: UpdateMaterialUseCase<R>,
    pub delete: DeleteMaterialUseCase<R>,
}

impl<R: MaterialRepository + 'static> MaterialUseCases<R> {
    pub fn new(repository: R, transactions: TransactionManager) -> Self {
        let repository = Arc::new(repository);

        Self {
            create: CreateMaterialUseCase::new(Arc::clone(&repository), transactions.clone()),
            find_by_id: FindMaterialByIdUseCase::new(Arc::clone(&repository)),
            find_all: FindMaterialsUseCase::new(Arc::clone(&repository)),
            update: UpdateMaterialUseCase::new(Arc::clone(&repository), transactions.clone()),
            delete: DeleteMaterialUseCase::new(repository, transactions),
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use database::{DatabaseResult, PageRequest, Paginated, TransactionManager};
    use sea_orm::{DatabaseBackend, DatabaseTransaction, MockDatabase};

    use crate::models::{CreateMaterial, Material};
    use crate::repository::{InMemoryMaterialRepository, MaterialRepository};

    /// Transactions over a mock connection; begin/commit always succeed.
    pub fn transactions() -> TransactionManager {
        TransactionManager::new(MockDatabase::new(DatabaseBackend::Postgres).into_connection())
    }

    pub fn create_input(name: &str, quantity: i32) -> CreateMaterial {
        CreateMaterial {
            name: name.to_string(),
            description: None,
            quantity,
            unit: "pcs".to_string(),
        }
    }

    /// Serves a fixed snapshot from `find_by_id` while every write reaches
    /// `inner`, as if the row changed between the lookup and the write.
    pub struct StaleReads {
        pub inner: InMemoryMaterialRepository,
        pub snapshot: Material,
    }

    #[async_trait::async_trait]
    impl MaterialRepository for StaleReads {
        async fn find_by_id(&self, _id: i32) -> DatabaseResult<Option<Material>> {
            Ok(Some(self.snapshot.clone()))
        }

        async fn find_all(&self, page: PageRequest) -> DatabaseResult<Paginated<Material>> {
            self.inner.find_all(page).await
        }

        async fn create(
            &self,
            material: Material,
            txn: Option<&DatabaseTransaction>,
        ) -> DatabaseResult<Material> {
            self.inner.create(material, txn).await
        }

        async fn update(
            &self,
            material: Material,
            txn: Option<&DatabaseTransaction>,
        ) -> DatabaseResult<Material> {
            self.inner.update(material, txn).await
        }

        async fn delete(
            &self,
            material: Material,
            txn: Option<&DatabaseTransaction>,
        ) -> DatabaseResult<Material> {
            self.inner.delete(material, txn).await
        }

        async fn count(&self) -> DatabaseResult<u64> {
            self.inner.count().await
        }
    }
}
