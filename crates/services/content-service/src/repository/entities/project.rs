//! Project database entity for SeaORM.

use sea_orm::entity::prelude::*;

use super::{fill_slug, stamp_timestamps};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(unique)]
    pub slug: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub content: Option<String>,
    pub category: String,
    #[sea_orm(column_type = "Text")]
    pub technologies: String,
    pub image_url: Option<String>,
    pub project_url: Option<String>,
    pub github_url: Option<String>,
    pub client_id: Option<i32>,
    pub status: String,
    pub featured: bool,
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

/// Convert database model to domain record (relations not loaded)
impl From<Model> for domain::Project {
    fn from(model: Model) -> Self {
        domain::Project {
            id: model.id,
            title: model.title,
            slug: model.slug,
            description: model.description,
            content: model.content,
            category: model.category,
            technologies: model.technologies,
            image_url: model.image_url,
            project_url: model.project_url,
            github_url: model.github_url,
            client_id: model.client_id,
            status: model.status,
            featured: model.featured,
            published_at: model.published_at,
            created_at: model.created_at,
            updated_at: model.updated_at,
            client: None,
        }
    }
}
