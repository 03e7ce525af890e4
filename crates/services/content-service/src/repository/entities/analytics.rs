//! Page visit database entity for SeaORM.
//!
//! Rows are append-only; nothing in this crate updates or deletes them.

use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::Set;

use domain::Visit;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "analytics")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub visitor_ip: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub user_agent: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub page_url: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub referrer: Option<String>,
    pub device_type: String,
    pub browser: String,
    pub os: String,
    pub country: Option<String>,
    pub city: Option<String>,
    pub visited_at: DateTimeUtc,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if insert && self.created_at.is_not_set() {
            self.created_at = Set(Utc::now());
        }
        Ok(self)
    }
}

impl From<Visit> for ActiveModel {
    fn from(visit: Visit) -> Self {
        ActiveModel {
            visitor_ip: Set(visit.visitor_ip),
            user_agent: Set(visit.user_agent),
            page_url: Set(visit.page_url),
            referrer: Set(visit.referrer),
            device_type: Set(visit.device_type),
            browser: Set(visit.browser),
            os: Set(visit.os),
            country: Set(visit.country),
            city: Set(visit.city),
            visited_at: Set(visit.visited_at),
            ..Default::default()
        }
    }
}

impl From<Model> for domain::AnalyticsEvent {
    fn from(model: Model) -> Self {
        domain::AnalyticsEvent {
            id: model.id,
            visitor_ip: model.visitor_ip,
            user_agent: model.user_agent,
            page_url: model.page_url,
            referrer: model.referrer,
            device_type: model.device_type,
            browser: model.browser,
            os: model.os,
            country: model.country,
            city: model.city,
            visited_at: model.visited_at,
            created_at: model.created_at,
        }
    }
}
