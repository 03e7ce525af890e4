//! Blog post database entity for SeaORM.

use sea_orm::entity::prelude::*;

use super::{fill_slug, stamp_timestamps};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "blog_posts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(unique)]
    pub slug: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub excerpt: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub featured_image: Option<String>,
    pub category: Option<String>,
    pub tags: Option<String>,
    pub author: Option<String>,
    pub status: String,
    pub published_at: Option<DateTimeUtc>,
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
        if insert {
            fill_slug(&mut self.slug, &self.title);
        }
        stamp_timestamps(&mut self.created_at, &mut self.updated_at, insert);
        Ok(self)
    }
}

impl From<Model> for domain::BlogPost {
    fn from(model: Model) -> Self {
        domain::BlogPost {
            id: model.id,
            title: model.title,
            slug: model.slug,
            excerpt: model.excerpt,
            content: model.content,
            featured_image: model.featured_image,
            category: model.category,
            tags: model.tags,
            author: model.author,
            status: model.status,
            published_at: model.published_at,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
