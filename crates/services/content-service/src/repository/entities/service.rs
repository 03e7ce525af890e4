//! Service offering database entity for SeaORM.

use sea_orm::entity::prelude::*;

use super::{fill_slug, stamp_timestamps};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "services")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(unique)]
    pub slug: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub icon: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub features: Option<String>,
    pub price_range: Option<String>,
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
            fill_slug(&mut self.slug, &self.title);
        }
        stamp_timestamps(&mut self.created_at, &mut self.updated_at, insert);
        Ok(self)
    }
}

impl From<Model> for domain::Service {
    fn from(model: Model) -> Self {
        domain::Service {
            id: model.id,
            title: model.title,
            slug: model.slug,
            description: model.description,
            icon: model.icon,
            features: model.features,
            price_range: model.price_range,
            sort_order: model.sort_order,
            is_active: model.is_active,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
