use async_trait::async_trait;
use chrono::Utc;
use database::{DatabaseError, DatabaseResult, PageRequest, Paginated};
use sea_orm::DatabaseTransaction;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tokio::sync::RwLock;

use crate::models::User;

/// Repository trait for User persistence
///
/// Same contract as the materials repository: reads skip soft-deleted rows,
/// writes optionally join an open transaction. `create` reports a taken
/// username as [`DatabaseError::UniqueViolation`].
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> DatabaseResult<Option<User>>;

    async fn find_all(&self, page: PageRequest) -> DatabaseResult<Paginated<User>>;

    async fn create(&self, user: User, txn: Option<&DatabaseTransaction>) -> DatabaseResult<User>;

    async fn update(&self, user: User, txn: Option<&DatabaseTransaction>) -> DatabaseResult<User>;

    async fn delete(&self, user: User, txn: Option<&DatabaseTransaction>) -> DatabaseResult<User>;

    async fn count(&self) -> DatabaseResult<u64>;
}

/// In-memory implementation of UserRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<BTreeMap<i32, User>>>,
    next_id: Arc<AtomicUsize>,
    writes: Arc<AtomicUsize>,
    failing: Arc<AtomicBool>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

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

    fn live(users: &BTreeMap<i32, User>, id: i32) -> DatabaseResult<&User> {
        users
            .get(&id)
            .filter(|u| !u.is_deleted())
            .ok_or_else(|| DatabaseError::RecordNotFound(format!("users id={id}")))
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: i32) -> DatabaseResult<Option<User>> {
        self.check_available()?;
        let users = self.users.read().await;
        Ok(users.get(&id).filter(|u| !u.is_deleted()).cloned())
    }

    async fn find_all(&self, page: PageRequest) -> DatabaseResult<Paginated<User>> {
        self.check_available()?;
        let users = self.users.read().await;

        let live: Vec<&User> = users.values().filter(|u| !u.is_deleted()).collect();
        let total = live.len() as u64;
        let data = live
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit as usize)
            .cloned()
            .collect();

        Ok(Paginated::new(data, total, page))
    }

    async fn create(&self, user: User, _txn: Option<&DatabaseTransaction>) -> DatabaseResult<User> {
        self.record_write()?;
        let mut users = self.users.write().await;

        // Usernames are unique among live users only
        if users
            .values()
            .any(|u| !u.is_deleted() && u.username == user.username)
        {
            return Err(DatabaseError::UniqueViolation(format!(
                "users.username={}",
                user.username
            )));
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst) as i32 + 1;
        let created = User {
            id,
            created_at: Utc::now(),
            updated_at: None,
            deleted_at: None,
            ..user
        };
        users.insert(id, created.clone());

        tracing::info!(user_id = id, "Created user");
        Ok(created)
    }

    async fn update(&self, user: User, _txn: Option<&DatabaseTransaction>) -> DatabaseResult<User> {
        self.record_write()?;
        let mut users = self.users.write().await;

        let current = Self::live(&users, user.id)?;
        let updated = User {
            first_name: user.first_name,
            last_name: user.last_name,
            phone: user.phone,
            department: user.department,
            role: user.role,
            updated_at: Some(Utc::now()),
            ..current.clone()
        };
        users.insert(updated.id, updated.clone());

        Ok(updated)
    }

    async fn delete(&self, user: User, _txn: Option<&DatabaseTransaction>) -> DatabaseResult<User> {
        self.record_write()?;
        let mut users = self.users.write().await;

        let current = Self::live(&users, user.id)?;
        let deleted = current
            .clone()
            .mark_deleted(user.deleted_at.unwrap_or_else(Utc::now));
        users.insert(deleted.id, deleted.clone());

        Ok(deleted)
    }

    async fn count(&self) -> DatabaseResult<u64> {
        self.check_available()?;
        let users = self.users.read().await;
        Ok(users.values().filter(|u| !u.is_deleted()).count() as u64)
    }
}
