//! Dashboard service - the admin landing page numbers.
//!
//! Reads only. Every figure comes from one repository call; nothing is
//! cached between calls.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;

use common::{AppError, AppResult};
use domain::{CountEntry, DailyCount, DEFAULT_TOP_PAGES_LIMIT};

use crate::repository::{AnalyticsRepository, MessageRepository, ProjectRepository};

/// Figures for one trailing window
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardOverview {
    pub window_days: i64,
    pub visitors: u64,
    pub page_views: u64,
    pub unread_messages: u64,
    pub published_projects: u64,
    pub top_pages: Vec<CountEntry>,
    pub devices: Vec<CountEntry>,
    pub visitors_by_date: Vec<DailyCount>,
}

#[async_trait]
pub trait DashboardService: Send + Sync {
    /// Overview of the last `days` days
    async fn overview(&self, days: i64) -> AppResult<DashboardOverview>;
}

/// Concrete implementation of DashboardService using repositories.
pub struct DashboardManager {
    analytics: Arc<dyn AnalyticsRepository>,
    messages: Arc<dyn MessageRepository>,
    projects: Arc<dyn ProjectRepository>,
}

impl DashboardManager {
    pub fn new(
        analytics: Arc<dyn AnalyticsRepository>,
        messages: Arc<dyn MessageRepository>,
        projects: Arc<dyn ProjectRepository>,
    ) -> Self {
        Self {
            analytics,
            messages,
            projects,
        }
    }
}

#[async_trait]
impl DashboardService for DashboardManager {
    async fn overview(&self, days: i64) -> AppResult<DashboardOverview> {
        if days < 1 {
            return Err(AppError::validation("Window must cover at least one day"));
        }

        Ok(DashboardOverview {
            window_days: days,
            visitors: self.analytics.get_visitors_count(days).await?,
            page_views: self.analytics.get_page_views(days).await?,
            unread_messages: self.messages.count_unread().await?,
            published_projects: self.projects.count_published().await?,
            top_pages: self
                .analytics
                .get_top_pages(DEFAULT_TOP_PAGES_LIMIT, days)
                .await?,
            devices: self.analytics.get_device_stats(days).await?,
            visitors_by_date: self.analytics.get_visitors_by_date(days).await?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{MockAnalyticsRepository, MockMessageRepository, MockProjectRepository};
    use chrono::NaiveDate;
    use mockall::predicate::eq;
    use sea_orm::DbErr;

    fn entry(label: &str, count: i64) -> CountEntry {
        CountEntry {
            label: label.to_string(),
            count,
        }
    }

    fn manager(
        analytics: MockAnalyticsRepository,
        messages: MockMessageRepository,
        projects: MockProjectRepository,
    ) -> DashboardManager {
        DashboardManager::new(Arc::new(analytics), Arc::new(messages), Arc::new(projects))
    }

    #[tokio::test]
    async fn test_overview_collects_every_figure() {
        let mut analytics = MockAnalyticsRepository::new();
        analytics
            .expect_get_visitors_count()
            .with(eq(7))
            .returning(|_| Ok(3));
        analytics
            .expect_get_page_views()
            .with(eq(7))
            .returning(|_| Ok(12));
        analytics
            .expect_get_top_pages()
            .with(eq(DEFAULT_TOP_PAGES_LIMIT), eq(7))
            .returning(|_, _| Ok(vec![entry("/", 8), entry("/work", 4)]));
        analytics
            .expect_get_device_stats()
            .with(eq(7))
            .returning(|_| Ok(vec![entry("desktop", 9), entry("mobile", 3)]));
        analytics
            .expect_get_visitors_by_date()
            .with(eq(7))
            .returning(|_| {
                Ok(vec![DailyCount {
                    date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
                    count: 3,
                }])
            });

        let mut messages = MockMessageRepository::new();
        messages.expect_count_unread().times(1).returning(|| Ok(2));

        let mut projects = MockProjectRepository::new();
        projects
            .expect_count_published()
            .times(1)
            .returning(|| Ok(4));

        let overview = manager(analytics, messages, projects)
            .overview(7)
            .await
            .unwrap();

        assert_eq!(overview.window_days, 7);
        assert_eq!(overview.visitors, 3);
        assert_eq!(overview.page_views, 12);
        assert_eq!(overview.unread_messages, 2);
        assert_eq!(overview.published_projects, 4);
        assert_eq!(overview.top_pages[0], entry("/", 8));
        assert_eq!(overview.devices.len(), 2);
        assert_eq!(overview.visitors_by_date.len(), 1);
    }

    #[tokio::test]
    async fn test_overview_rejects_empty_window() {
        let result = manager(
            MockAnalyticsRepository::new(),
            MockMessageRepository::new(),
            MockProjectRepository::new(),
        )
        .overview(0)
        .await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_overview_propagates_repository_errors() {
        let mut analytics = MockAnalyticsRepository::new();
        analytics
            .expect_get_visitors_count()
            .returning(|_| Err(DbErr::Custom("connection reset".into()).into()));

        let result = manager(
            analytics,
            MockMessageRepository::new(),
            MockProjectRepository::new(),
        )
        .overview(30)
        .await;

        assert!(matches!(result, Err(AppError::Database(DbErr::Custom(_)))));
    }
}
