//! Testimonial database entity for SeaORM.

use sea_orm::entity::prelude::*;

use super::stamp_timestamps;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "testimonials")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub client_name: String,
    pub client_position: Option<String>,
    pub client_company: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub rating: i32,
    pub avatar_url: Option<String>,
    pub client_id: Option<i32>,
    pub is_featured: bool,
    pub is_published: bool,
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

impl From<Model> for domain::Testimonial {
    fn from(model: Model) -> Self {
        domain::Testimonial {
            id: model.id,
            client_name: model.client_name,
            client_position: model.client_position,
            client_company: model.client_company,
            content: model.content,
            rating: model.rating,
            avatar_url: model.avatar_url,
            client_id: model.client_id,
            is_featured: model.is_featured,
            is_published: model.is_published,
            created_at: model.created_at,
            updated_at: model.updated_at,
            client: None,
        }
    }
}
