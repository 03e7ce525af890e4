//! Client database entity for SeaORM.

use sea_orm::entity::prelude::*;

use super::stamp_timestamps;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "clients")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub email: Option<String>,
    pub company: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub logo_url: Option<String>,
    pub industry: Option<String>,
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
        stamp_timestamps(&mut self.created_at, &mut self.updated_at, insert);
        Ok(self)
    }
}

impl From<Model> for domain::Client {
    fn from(model: Model) -> Self {
        domain::Client {
            id: model.id,
            name: model.name,
            email: model.email,
            company: model.company,
            phone: model.phone,
            website: model.website,
            logo_url: model.logo_url,
            industry: model.industry,
            is_active: model.is_active,
            created_at: model.created_at,
            updated_at: model.updated_at,
            projects: Vec::new(),
            testimonials: Vec::new(),
        }
    }
}
