//! Database connection and schema lifecycle.

use std::collections::HashSet;
use std::time::Duration;

use sea_orm::{
    ConnectOptions, ConnectionTrait, Database as SeaDatabase, DatabaseConnection, DbErr,
    EntityTrait, QueryOrder, Statement,
};
use sea_orm_migration::{seaql_migrations, MigratorTrait, SchemaManager};

use common::DatabaseConfig;

use super::migrations::Migrator;

/// Database wrapper for connection management
#[derive(Clone)]
pub struct Database {
    connection: DatabaseConnection,
}

fn connect_options(config: &DatabaseConfig) -> ConnectOptions {
    let mut options = ConnectOptions::new(config.url.clone());
    options
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
        .sqlx_logging(config.sqlx_logging);
    options
}

impl Database {
    /// Connect and apply pending migrations.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DbErr> {
        let database = Self::connect_without_migrations(config).await?;
        database.run_migrations().await?;
        tracing::info!("Database connected and migrations applied");
        Ok(database)
    }

    /// Connect without touching the schema (for CLI commands).
    pub async fn connect_without_migrations(config: &DatabaseConfig) -> Result<Self, DbErr> {
        let connection = SeaDatabase::connect(connect_options(config)).await?;
        tracing::info!(
            max_connections = config.max_connections,
            backend = ?connection.get_database_backend(),
            "Database connection established"
        );
        Ok(Self { connection })
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.connection
    }

    /// Get a clone of the database connection.
    pub fn get_connection(&self) -> DatabaseConnection {
        self.connection.clone()
    }

    /// Run pending migrations.
    pub async fn run_migrations(&self) -> Result<(), DbErr> {
        Migrator::up(&self.connection, None).await
    }

    /// Rollback the last migration.
    pub async fn rollback_migration(&self) -> Result<(), DbErr> {
        Migrator::down(&self.connection, Some(1)).await
    }

    /// Every known migration paired with whether it has been applied.
    pub async fn migration_status(&self) -> Result<Vec<(String, bool)>, DbErr> {
        // Tracking table is created by the first `up`
        let manager = SchemaManager::new(&self.connection);
        let applied: HashSet<String> = if manager.has_table("seaql_migrations").await? {
            seaql_migrations::Entity::find()
                .order_by_asc(seaql_migrations::Column::Version)
                .all(&self.connection)
                .await?
                .into_iter()
                .map(|m| m.version)
                .collect()
        } else {
            HashSet::new()
        };

        Ok(Migrator::migrations()
            .iter()
            .map(|m| {
                let name = m.name().to_string();
                let is_applied = applied.contains(&name);
                (name, is_applied)
            })
            .collect())
    }

    /// Drop every table and re-run all migrations.
    pub async fn fresh_migrations(&self) -> Result<(), DbErr> {
        Migrator::fresh(&self.connection).await
    }

    /// Check database connectivity by executing a simple query.
    pub async fn ping(&self) -> Result<(), DbErr> {
        self.connection
            .execute(Statement::from_string(
                self.connection.get_database_backend(),
                "SELECT 1".to_string(),
            ))
            .await?;
        Ok(())
    }
}
