use async_trait::async_trait;
use chrono::Utc;
use database::{DatabaseError, DatabaseResult, PageRequest, Paginated};
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{
    AccessMode, ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction,
    EntityTrait, IsolationLevel, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
    TransactionTrait,
};

use crate::{entity, models::User, repository::UserRepository};

/// Postgres-backed [`UserRepository`].
///
/// Username uniqueness among live users is enforced by the partial index
/// `idx_users_username_active`; a clash surfaces as `UniqueViolation`.
#[derive(Clone)]
pub struct PgUserRepository {
    db: DatabaseConnection,
}

impl PgUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn live() -> sea_orm::Select<entity::Entity> {
        entity::Entity::find().filter(entity::Column::DeletedAt.is_null())
    }

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
        .map_err(|e| DatabaseError::from_db_err(e, format!("users id={id}")))?;

        updated
            .into_iter()
            .next()
            .ok_or_else(|| DatabaseError::RecordNotFound(format!("users id={id}")))
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_id(&self, id: i32) -> DatabaseResult<Option<User>> {
        let model = Self::live()
            .filter(entity::Column::Id.eq(id))
            .one(&self.db)
            .await?;

        Ok(model.map(Into::into))
    }

    async fn find_all(&self, page: PageRequest) -> DatabaseResult<Paginated<User>> {
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

    async fn create(&self, user: User, txn: Option<&DatabaseTransaction>) -> DatabaseResult<User> {
        let active_model = entity::ActiveModel {
            id: NotSet,
            username: Set(user.username),
            first_name: Set(user.first_name),
            last_name: Set(user.last_name),
            phone: Set(user.phone),
            department: Set(user.department),
            role: Set(user.role),
            created_at: Set(Utc::now().into()),
            updated_at: Set(None),
            deleted_at: Set(None),
        };

        let model = match txn {
            Some(txn) => active_model.insert(txn).await,
            None => active_model.insert(&self.db).await,
        }
        .map_err(|e| DatabaseError::from_db_err(e, "users"))?;

        tracing::info!(user_id = model.id, "Created user");
        Ok(model.into())
    }

    async fn update(&self, user: User, txn: Option<&DatabaseTransaction>) -> DatabaseResult<User> {
        let id = user.id;
        let active_model = entity::ActiveModel {
            first_name: Set(user.first_name),
            last_name: Set(user.last_name),
            phone: Set(user.phone),
            department: Set(user.department),
            role: Set(user.role),
            updated_at: Set(Some(Utc::now().into())),
            ..Default::default()
        };

        let model = self.update_live(id, active_model, txn).await?;

        tracing::info!(user_id = id, "Updated user");
        Ok(model.into())
    }

    async fn delete(&self, user: User, txn: Option<&DatabaseTransaction>) -> DatabaseResult<User> {
        let id = user.id;
        let active_model = entity::ActiveModel {
            deleted_at: Set(Some(user.deleted_at.unwrap_or_else(Utc::now).into())),
            ..Default::default()
        };

        let model = self.update_live(id, active_model, txn).await?;

        tracing::info!(user_id = id, "Soft-deleted user");
        Ok(model.into())
    }

    async fn count(&self) -> DatabaseResult<u64> {
        Ok(Self::live().count(&self.db).await?)
    }
}
