use async_trait::async_trait;
use chrono::Utc;
use database::{DatabaseError, DatabaseResult, PageRequest, Paginated};
use sea_orm::DatabaseTransaction;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tokio::sync::RwLock;

use crate::models::Material;

/// Repository trait for Material persistence
///
/// Every read skips soft-deleted rows. Writes take an optional open
/// transaction; without one each call is its own atomic unit.
#[async_trait]
pub trait MaterialRepository: Send + Sync {
    /// Get a live material by ID
    async fn find_by_id(&self, id: i32) -> DatabaseResult<Option<Material>>;

    /// One page of live materials, ordered by ID
    async fn find_all(&self, page: PageRequest) -> DatabaseResult<Paginated<Material>>;

    /// Insert a material; the store assigns `id` and `created_at`
    async fn create(
        &self,
        material: Material,
        txn: Option<&DatabaseTransaction>,
    ) -> DatabaseResult<Material>;

    /// Replace the mutable fields and refresh `updated_at`.
    ///
    /// Fails with `RecordNotFound` when the row is missing or soft-deleted.
    async fn update(
        &self,
        material: Material,
        txn: Option<&DatabaseTransaction>,
    ) -> DatabaseResult<Material>;

    /// Persist the snapshot's `deleted_at` marker and return the stored row.
    async fn delete(
        &self,
        material: Material,
        txn: Option<&DatabaseTransaction>,
    ) -> DatabaseResult<Material>;

    /// Number of live materials
    async fn count(&self) -> DatabaseResult<u64>;
}

/// In-memory implementation of MaterialRepository (for development/testing)
///
/// Transactions are accepted but not honored: writes apply immediately.
#[derive(Debug, Default, Clone)]
pub struct InMemoryMaterialRepository {
    materials: Arc<RwLock<BTreeMap<i32, Material>>>,
    next_id: Arc<AtomicUsize>,
    writes: Arc<AtomicUsize>,
    failing: Arc<AtomicBool>,
}

impl InMemoryMaterialRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of create/update/delete calls that reached the store.
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Makes every subsequent call fail with a generic store error.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn check_available(&self) -> DatabaseResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(DatabaseError::Generic("store unavailable".to_string()));
        }
        Ok(())
    }

    fn record_write(&self) -> DatabaseResult<()> {
        self.check_available()?;
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn live(materials: &BTreeMap<i32, Material>, id: i32) -> DatabaseResult<&Material> {
        materials
            .get(&id)
            .filter(|m| !m.is_deleted())
            .ok_or_else(|| DatabaseError::RecordNotFound(format!("materials id={id}")))
    }
}

#[async_trait]
impl MaterialRepository for InMemoryMaterialRepository {
    async fn find_by_id(&self, id: i32) -> DatabaseResult<Option<Material>> {
        self.check_available()?;
        let materials = self.materials.read().await;
        Ok(materials.get(&id).filter(|m| !m.is_deleted()).cloned())
    }

    async fn find_all(&self, page: PageRequest) -> DatabaseResult<Paginated<Material>> {
        self.check_available()?;
        let materials = self.materials.read().await;

        let live: Vec<&Material> = materials.values().filter(|m| !m.is_deleted()).collect();
        let total = live.len() as u64;
        let data = live
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit as usize)
            .cloned()
            .collect();

        Ok(Paginated::new(data, total, page))
    }

    async fn create(
        &self,
        material: Material,
        _txn: Option<&DatabaseTransaction>,
    ) -> DatabaseResult<Material> {
        self.record_write()?;
        let mut materials = self.materials.write().await;

        let id = self.next_id.fetch_add(1, Ordering::SeqCst) as i32 + 1;
        let created = Material {
            id,
            created_at: Utc::now(),
            updated_at: None,
            deleted_at: None,
            ..material
        };
        materials.insert(id, created.clone());

        tracing::info!(material_id = id, "Created material");
        Ok(created)
    }

    async fn update(
        &self,
        material: Material,
        _txn: Option<&DatabaseTransaction>,
    ) -> DatabaseResult<Material> {
        self.record_write()?;
        let mut materials = self.materials.write().await;

        let current = Self::live(&materials, material.id)?;
        let updated = Material {
            name: material.name,
            description: material.description,
            quantity: material.quantity,
            unit: material.unit,
            updated_at: Some(Utc::now()),
            ..current.clone()
        };
        materials.insert(updated.id, updated.clone());

        Ok(updated)
    }

    async fn delete(
        &self,
        material: Material,
        _txn: Option<&DatabaseTransaction>,
    ) -> DatabaseResult<Material> {
        self.record_write()?;
        let mut materials = self.materials.write().await;

        let current = Self::live(&materials, material.id)?;
        let deleted = current
            .clone()
            .mark_deleted(material.deleted_at.unwrap_or_else(Utc::now));
        materials.insert(deleted.id, deleted.clone());

        Ok(deleted)
    }

    async fn count(&self) -> DatabaseResult<u64> {
        self.check_available()?;
        let materials = self.materials.read().await;
        Ok(materials.values().filter(|m| !m.is_deleted()).count() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CreateMaterial;

    fn material(name: &str, quantity: i32) -> Material {
        Material::new(CreateMaterial {
            name: name.to_string(),
            description: None,
            quantity,
            unit: "pcs".to_string(),
        })
    }

    #[tokio::test]
    async fn test_create_assigns_increasing_ids() {
        let repo = InMemoryMaterialRepository::new();

        let a = repo.create(material("Material A", 100), None).await.unwrap();
        let b = repo.create(material("Material B", 200), None).await.unwrap();

        assert_eq!((a.id, b.id), (1, 2));
        assert_eq!(repo.count().await.unwrap(), 2);
        assert_eq!(repo.writes(), 2);
    }

    #[tokio::test]
    async fn test_deleted_rows_are_hidden() {
        let repo = InMemoryMaterialRepository::new();
        let created = repo.create(material("Material A", 1), None).await.unwrap();

        let deleted = repo
            .delete(created.clone().mark_deleted(Utc::now()), None)
            .await
            .unwrap();

        assert!(deleted.is_deleted());
        assert!(repo.find_by_id(created.id).await.unwrap().is_none());
        assert_eq!(repo.find_all(PageRequest::default()).await.unwrap().total, 0);
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_update_of_deleted_row_fails() {
        let repo = InMemoryMaterialRepository::new();
        let created = repo.create(material("Material A", 1), None).await.unwrap();
        repo.delete(created.clone().mark_deleted(Utc::now()), None)
            .await
            .unwrap();

        let err = repo.update(created, None).await.unwrap_err();
        assert!(matches!(err, DatabaseError::RecordNotFound(_)));
    }

    #[tokio::test]
    async fn test_find_all_pages_in_id_order() {
        let repo = InMemoryMaterialRepository::new();
        for i in 0..5 {
            repo.create(material(&format!("Material {i}"), i), None)
                .await
                .unwrap();
        }

        let page = repo
            .find_all(PageRequest::new(2, 2).unwrap())
            .await
            .unwrap();

        assert_eq!(page.total, 5);
        assert_eq!(page.total_pages, 3);
        let ids: Vec<_> = page.data.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![3, 4]);
    }

    #[tokio::test]
    async fn test_failing_store_reports_errors() {
        let repo = InMemoryMaterialRepository::new();
        repo.set_failing(true);

        assert!(repo.find_by_id(1).await.is_err());
        assert!(repo.create(material("Material A", 1), None).await.is_err());
        assert_eq!(repo.writes(), 0);
    }
}
