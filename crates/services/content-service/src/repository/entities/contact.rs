//! Contact message database entity for SeaORM.

use sea_orm::entity::prelude::*;

use super::stamp_timestamps;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "contacts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub message: String,
    pub status: String,
    pub is_read: bool,
    pub read_at: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        stamp_timestamps(&mut self.created_at, &mut self.updated_at, insert);
        Ok(self)
    }
}

impl From<Model> for domain::Message {
    fn from(model: Model) -> Self {
        domain::Message {
            id: model.id,
            name: model.name,
            email: model.email,
            phone: model.phone,
            subject: model.subject,
            message: model.message,
            status: model.status,
            is_read: model.is_read,
            read_at: model.read_at,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
