//! Message repository: contact-form inbox and its read/unread state.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

use super::base::{impl_read_repository, impl_write_repository, ReadRepository, WriteRepository};
use super::entities::contact::{self, ActiveModel, Entity as ContactEntity};
use super::query::{Criteria, QueryOptions};
use common::AppResult;
use domain::Message;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Inbox operations.
///
/// Messages move between unread and read. Transitions on a missing
/// message return `false` rather than failing.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Unread messages, newest first
    async fn get_unread(&self) -> AppResult<Vec<Message>>;

    /// The `limit` most recently received messages
    async fn get_recent(&self, limit: u64) -> AppResult<Vec<Message>>;

    /// Messages with the given free-text status
    async fn get_by_status(&self, status: &str) -> AppResult<Vec<Message>>;

    /// Mark read and stamp `read_at`
    async fn mark_as_read(&self, id: i32) -> AppResult<bool>;

    /// Mark unread and clear `read_at`
    async fn mark_as_unread(&self, id: i32) -> AppResult<bool>;

    async fn count_unread(&self) -> AppResult<u64>;
}

pub struct MessageStore {
    db: DatabaseConnection,
}

impl MessageStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl_read_repository!(MessageStore, ContactEntity, Message);
impl_write_repository!(MessageStore, ContactEntity, Message, ActiveModel);

#[async_trait]
impl MessageRepository for MessageStore {
    async fn get_unread(&self) -> AppResult<Vec<Message>> {
        let criteria = Criteria::new().where_eq("is_read", false);
        self.find_where(&criteria, &QueryOptions::default()).await
    }

    async fn get_recent(&self, limit: u64) -> AppResult<Vec<Message>> {
        let models = ContactEntity::find()
            .order_by_desc(contact::Column::CreatedAt)
            .order_by_desc(contact::Column::Id)
            .limit(limit)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Message::from).collect())
    }

    async fn get_by_status(&self, status: &str) -> AppResult<Vec<Message>> {
        let criteria = Criteria::new().where_eq("status", status);
        self.find_where(&criteria, &QueryOptions::default()).await
    }

    async fn mark_as_read(&self, id: i32) -> AppResult<bool> {
        let changes = ActiveModel {
            is_read: Set(true),
            read_at: Set(Some(Utc::now())),
            ..Default::default()
        };
        self.update(id, changes).await
    }

    async fn mark_as_unread(&self, id: i32) -> AppResult<bool> {
        let changes = ActiveModel {
            is_read: Set(false),
            read_at: Set(None),
            ..Default::default()
        };
        self.update(id, changes).await
    }

    async fn count_unread(&self) -> AppResult<u64> {
        let count = ContactEntity::find()
            .filter(contact::Column::IsRead.eq(false))
            .count(&self.db)
            .await?;
        Ok(count)
    }
}
