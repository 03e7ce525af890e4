//! Team member database entity for SeaORM.

use sea_orm::entity::prelude::*;

use super::{fill_slug, stamp_timestamps};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "team_members")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub slug: String,
    pub position: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub bio: Option<String>,
    pub email: Option<String>,
    pub photo_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub github_url: Option<String>,
    pub sort_order: i32,
    pub is_active: bool,
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
            fill_slug(&mut self.slug, &self.name);
        }
        stamp_timestamps(&mut self.created_at, &mut self.updated_at, insert);
        Ok(self)
    }
}

impl From<Model> for domain::TeamMember {
    fn from(model: Model) -> Self {
        domain::TeamMember {
            id: model.id,
            name: model.name,
            slug: model.slug,
            position: model.position,
            bio: model.bio,
            email: model.email,
            photo_url: model.photo_url,
            linkedin_url: model.linkedin_url,
            github_url: model.github_url,
            sort_order: model.sort_order,
            is_active: model.is_active,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
