//! Content Service Library
//!
//! Data access for the agency admin panel: portfolio content, the
//! contact inbox, visit analytics and per-user settings. Callers build a
//! [`Repositories`] bundle over one database connection and use the
//! stores directly.

pub mod config;
pub mod infra;
pub mod repository;
pub mod service;

use std::sync::Arc;

use sea_orm::DatabaseConnection;
use tracing::info;

use crate::config::ContentServiceConfig;
use crate::infra::Database;
use crate::repository::{
    AnalyticsStore, BlogPostStore, ClientStore, MessageStore, ProjectStore, ServiceStore,
    TeamMemberStore, TestimonialStore, UserSettingsStore,
};
use crate::service::DashboardManager;

/// Every store, sharing one connection pool.
#[derive(Clone)]
pub struct Repositories {
    pub projects: Arc<ProjectStore>,
    pub blog_posts: Arc<BlogPostStore>,
    pub services: Arc<ServiceStore>,
    pub clients: Arc<ClientStore>,
    pub team_members: Arc<TeamMemberStore>,
    pub testimonials: Arc<TestimonialStore>,
    pub analytics: Arc<AnalyticsStore>,
    pub messages: Arc<MessageStore>,
    pub user_settings: Arc<UserSettingsStore>,
}

impl Repositories {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            projects: Arc::new(ProjectStore::new(db.clone())),
            blog_posts: Arc::new(BlogPostStore::new(db.clone())),
            services: Arc::new(ServiceStore::new(db.clone())),
            clients: Arc::new(ClientStore::new(db.clone())),
            team_members: Arc::new(TeamMemberStore::new(db.clone())),
            testimonials: Arc::new(TestimonialStore::new(db.clone())),
            analytics: Arc::new(AnalyticsStore::new(db.clone())),
            messages: Arc::new(MessageStore::new(db.clone())),
            user_settings: Arc::new(UserSettingsStore::new(db)),
        }
    }

    /// Dashboard service over these stores
    pub fn dashboard(&self) -> DashboardManager {
        DashboardManager::new(
            self.analytics.clone(),
            self.messages.clone(),
            self.projects.clone(),
        )
    }
}

/// Connect with environment configuration, apply migrations and build
/// the stores.
pub async fn connect_from_env() -> Result<(Database, Repositories), Box<dyn std::error::Error>> {
    let config = ContentServiceConfig::from_env();
    let db = Database::connect(&config.database).await?;
    let repositories = Repositories::new(db.get_connection());
    Ok((db, repositories))
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(action: MigrateAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = ContentServiceConfig::from_env();
    let db = Database::connect_without_migrations(&config.database).await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            let status = db.migration_status().await?;
            for (name, applied) in status {
                let marker = if applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, name);
            }
        }
        MigrateAction::Fresh => {
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    Ok(())
}

/// Verify the configured database answers a trivial query.
pub async fn check_connection() -> Result<(), Box<dyn std::error::Error>> {
    let config = ContentServiceConfig::from_env();
    let db = Database::connect_without_migrations(&config.database).await?;
    db.ping().await?;
    info!("Database is reachable");
    Ok(())
}

/// Migration action type.
#[derive(Debug, Clone, Copy)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}
