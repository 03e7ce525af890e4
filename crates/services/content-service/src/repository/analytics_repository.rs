//! Analytics repository: append-only visit log and windowed aggregates.
//!
//! The store implements `ReadRepository` only. Events are never updated
//! or deleted through this layer.

use async_trait::async_trait;
use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbBackend, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select,
};

use super::base::impl_read_repository;
use super::entities::analytics::{self, ActiveModel, Entity as AnalyticsEntity};
use common::AppResult;
use domain::{AnalyticsEvent, CountEntry, DailyCount, NewVisit, VisitContext};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Visit tracking and aggregate reporting.
///
/// Every aggregate covers the trailing `days` window ending now; callers
/// without a preference pass `DEFAULT_ANALYTICS_WINDOW_DAYS`.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AnalyticsRepository: Send + Sync {
    /// Record one visit. Fields missing from `visit` are taken from
    /// `context` or derived from the user agent.
    async fn track_visit(&self, context: VisitContext, visit: NewVisit)
        -> AppResult<AnalyticsEvent>;

    /// Distinct visitor IPs in the window
    async fn get_visitors_count(&self, days: i64) -> AppResult<u64>;

    /// Raw event count in the window
    async fn get_page_views(&self, days: i64) -> AppResult<u64>;

    /// Most viewed URLs, highest count first
    async fn get_top_pages(&self, limit: u64, days: i64) -> AppResult<Vec<CountEntry>>;

    /// Distinct visitors per UTC day, oldest day first
    async fn get_visitors_by_date(&self, days: i64) -> AppResult<Vec<DailyCount>>;

    async fn get_device_stats(&self, days: i64) -> AppResult<Vec<CountEntry>>;

    async fn get_browser_stats(&self, days: i64) -> AppResult<Vec<CountEntry>>;

    async fn get_os_stats(&self, days: i64) -> AppResult<Vec<CountEntry>>;
}

pub struct AnalyticsStore {
    db: DatabaseConnection,
}

impl AnalyticsStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Events visited at or after `now - days`. Negative windows are
    /// treated as empty-length windows ending now; windows reaching past
    /// year 1 cover every event.
    fn within(days: i64) -> Select<AnalyticsEntity> {
        let select = AnalyticsEntity::find();
        match window_start(days) {
            Some(start) => select.filter(analytics::Column::VisitedAt.gte(start)),
            None => select,
        }
    }

    /// UTC calendar day of `visited_at`, as `YYYY-MM-DD` text.
    fn visit_day(&self) -> &'static str {
        match self.db.get_database_backend() {
            DbBackend::Postgres => "CAST(DATE(visited_at AT TIME ZONE 'UTC') AS TEXT)",
            _ => "DATE(visited_at)",
        }
    }

    async fn count_by(
        &self,
        column: analytics::Column,
        days: i64,
        limit: Option<u64>,
    ) -> AppResult<Vec<CountEntry>> {
        let mut select = Self::within(days)
            .select_only()
            .column(column)
            .column_as(analytics::Column::Id.count(), "total")
            .group_by(column)
            .order_by_desc(analytics::Column::Id.count())
            .order_by_asc(column);
        if let Some(limit) = limit {
            select = select.limit(limit);
        }

        let rows: Vec<(String, i64)> = select
            .into_tuple()
            .all(&self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(label, count)| CountEntry { label, count })
            .collect())
    }
}

fn window_start(days: i64) -> Option<DateTime<Utc>> {
    Duration::try_days(days.max(0))
        .and_then(|window| Utc::now().checked_sub_signed(window))
        .filter(|start| start.year() >= 1)
}

impl_read_repository!(AnalyticsStore, AnalyticsEntity, AnalyticsEvent);

#[async_trait]
impl AnalyticsRepository for AnalyticsStore {
    async fn track_visit(
        &self,
        context: VisitContext,
        visit: NewVisit,
    ) -> AppResult<AnalyticsEvent> {
        let visit = visit.resolve(context, Utc::now());
        let model = ActiveModel::from(visit).insert(&self.db).await?;

        tracing::debug!(
            id = model.id,
            page_url = %model.page_url,
            device = %model.device_type,
            "visit tracked"
        );
        Ok(AnalyticsEvent::from(model))
    }

    async fn get_visitors_count(&self, days: i64) -> AppResult<u64> {
        let count = Self::within(days)
            .select_only()
            .column(analytics::Column::VisitorIp)
            .distinct()
            .count(&self.db)
            .await?;
        Ok(count)
    }

    async fn get_page_views(&self, days: i64) -> AppResult<u64> {
        let count = Self::within(days).count(&self.db).await?;
        Ok(count)
    }

    async fn get_top_pages(&self, limit: u64, days: i64) -> AppResult<Vec<CountEntry>> {
        self.count_by(analytics::Column::PageUrl, days, Some(limit)).await
    }

    async fn get_visitors_by_date(&self, days: i64) -> AppResult<Vec<DailyCount>> {
        let day = self.visit_day();
        let rows: Vec<(String, i64)> = Self::within(days)
            .select_only()
            .column_as(Expr::cust(day), "day")
            .column_as(Expr::cust("COUNT(DISTINCT visitor_ip)"), "visitors")
            .group_by(Expr::cust(day))
            .order_by_asc(Expr::cust(day))
            .into_tuple()
            .all(&self.db)
            .await?;

        rows.into_iter()
            .map(|(day, count)| {
                let date = NaiveDate::parse_from_str(&day, "%Y-%m-%d")
                    .map_err(|e| DbErr::Type(format!("visit day `{}`: {}", day, e)))?;
                Ok(DailyCount { date, count })
            })
            .collect()
    }

    async fn get_device_stats(&self, days: i64) -> AppResult<Vec<CountEntry>> {
        self.count_by(analytics::Column::DeviceType, days, None).await
    }

    async fn get_browser_stats(&self, days: i64) -> AppResult<Vec<CountEntry>> {
        self.count_by(analytics::Column::Browser, days, None).await
    }

    async fn get_os_stats(&self, days: i64) -> AppResult<Vec<CountEntry>> {
        self.count_by(analytics::Column::Os, days, None).await
    }
}
