use async_trait::async_trait;
use chrono::Utc;
use database::{DatabaseError, DatabaseResult, PageRequest, Paginated};
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{
    AccessMode, ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction,
    EntityTrait, IsolationLevel, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
    TransactionTrait,
};

use crate::{entity, models::Material, repository::MaterialRepository};

/// Postgres-backed [`MaterialRepository`].
///
/// Holds a handle to the process-wide pool; cloning it is cheap.
#[derive(Clone)]
pub struct PgMaterialRepository {
    db: DatabaseConnection,
}

impl PgMaterialRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn live() -> sea_orm::Select<entity::Entity> {
        entity::Entity::find().filter(entity::Column::DeletedAt.is_null())
    }

    /// Applies `changes` to the row only while it is not soft-deleted.
    async fn update_live(
        &self,
        id: i32,
        changes: entity::ActiveModel,
        txn: Option<&DatabaseTransaction>,
    ) -> DatabaseResult<entity::Model> {
        let query = entity::Entity::update_many()
            .set(changes)
            .filter(entity::Column::Id.eq(id))
            .filter(entity::Column::DeletedAt.is_null());

        let updated = match txn {
            Some(txn) => query.exec_with_returning(txn).await,
            None => query.exec_with_returning(&self.db).await,
        }
        .map_err(|e| DatabaseError::from_db_err(e, format!("materials id={id}")))?;

        updated
            .into_iter()
            .next()
            .ok_or_else(|| DatabaseError::RecordNotFound(format!("materials id={id}")))
    }
}

#[async_trait]
impl MaterialRepository for PgMaterialRepository {
    async fn find_by_id(&self, id: i32) -> DatabaseResult<Option<Material>> {
        let model = Self::live()
            .filter(entity::Column::Id.eq(id))
            .one(&self.db)
            .await?;

        Ok(model.map(Into::into))
    }

    async fn find_all(&self, page: PageRequest) -> DatabaseResult<Paginated<Material>> {
        // One snapshot for both statements so `total` agrees with `data`.
        let txn = self
            .db
            .begin_with_config(
                Some(IsolationLevel::RepeatableRead),
                Some(AccessMode::ReadOnly),
            )
            .await?;

        let total = Self::live().count(&txn).await?;
        let models = Self::live()
            .order_by_asc(entity::Column::Id)
            .offset(page.offset())
            .limit(page.row_limit())
            .all(&txn)
            .await?;

        txn.commit().await?;

        let data = models.into_iter().map(Into::into).collect();
        Ok(Paginated::new(data, total, page))
    }

    async fn create(
        &self,
        material: Material,
        txn: Option<&DatabaseTransaction>,
    ) -> DatabaseResult<Material> {
        let active_model = entity::ActiveModel {
            id: NotSet,
            name: Set(material.name),
            description: Set(material.description),
            quantity: Set(material.quantity),
            unit: Set(material.unit),
            created_at: Set(Utc::now().into()),
            updated_at: Set(None),
            deleted_at: Set(None),
        };

        let model = match txn {
            Some(txn) => active_model.insert(txn).await,
            None => active_model.insert(&self.db).await,
        }
        .map_err(|e| DatabaseError::from_db_err(e, "materials"))?;

        tracing::info!(material_id = model.id, "Created material");
        Ok(model.into())
    }

    async fn update(
        &self,
        material: Material,
        txn: Option<&DatabaseTransaction>,
    ) -> DatabaseResult<Material> {
        let id = material.id;
        let active_model = entity::ActiveModel {
            name: Set(material.name),
            description: Set(material.description),
            quantity: Set(material.quantity),
            unit: Set(material.unit),
            updated_at: Set(Some(Utc::now().into())),
            ..Default::default()
        };

        let model = self.update_live(id, active_model, txn).await?;

        tracing::info!(material_id = id, "Updated material");
        Ok(model.into())
    }

    async fn delete(
        &self,
        material: Material,
        txn: Option<&DatabaseTransaction>,
    ) -> DatabaseResult<Material> {
        let id = material.id;
        let deleted_at = material.deleted_at.unwrap_or_else(Utc::now);
        let active_model = entity::ActiveModel {
            deleted_at: Set(Some(deleted_at.into())),
            ..Default::default()
        };

        let model = self.update_live(id, active_model, txn).await?;

        tracing::info!(material_id = id, "Soft-deleted material");
        Ok(model.into())
    }

    async fn count(&self) -> DatabaseResult<u64> {
        Ok(Self::live().count(&self.db).await?)
    }
}
