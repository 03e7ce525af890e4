//! Project repository: published portfolio queries.

use async_trait::async_trait;
use sea_orm::sea_query::{LikeExpr, SimpleExpr};
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Select,
};

use super::base::{impl_write_repository, ReadRepository};
use super::entities::project::{self, ActiveModel, Entity as ProjectEntity};
use super::query::QueryOptions;
use super::relations::{self, reject_relations, CLIENT};
use common::AppResult;
use domain::{Project, STATUS_PUBLISHED};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Read-side filtering of published projects.
///
/// Every query here only returns projects whose status is `published`.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn get_published(&self, options: &QueryOptions) -> AppResult<Vec<Project>>;

    /// Published projects in one category
    async fn get_by_category(
        &self,
        category: &str,
        options: &QueryOptions,
    ) -> AppResult<Vec<Project>>;

    /// At most `limit` published, featured projects
    async fn get_featured(&self, limit: u64, options: &QueryOptions) -> AppResult<Vec<Project>>;

    /// Latest `limit` published projects by publish date. The ordering
    /// in `options` is ignored.
    async fn get_recent(&self, limit: u64, options: &QueryOptions) -> AppResult<Vec<Project>>;

    /// Substring match on title, description or technologies
    async fn search(&self, query: &str, options: &QueryOptions) -> AppResult<Vec<Project>>;

    async fn count_published(&self) -> AppResult<u64>;
}

pub struct ProjectStore {
    db: DatabaseConnection,
}

impl ProjectStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn published() -> Select<ProjectEntity> {
        ProjectEntity::find().filter(project::Column::Status.eq(STATUS_PUBLISHED))
    }

    fn contains(column: project::Column, pattern: &str) -> SimpleExpr {
        column.like(LikeExpr::new(pattern).escape('\\'))
    }

    async fn fetch(
        &self,
        select: Select<ProjectEntity>,
        options: &QueryOptions,
    ) -> AppResult<Vec<Project>> {
        let models = options.apply(select)?.all(&self.db).await?;
        self.load_relations(models, options.relations()).await
    }
}

#[async_trait]
impl ReadRepository<ProjectEntity, Project> for ProjectStore {
    fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    async fn load_relations(
        &self,
        models: Vec<project::Model>,
        relations: &[String],
    ) -> AppResult<Vec<Project>> {
        reject_relations::<ProjectEntity>(relations, &[CLIENT])?;

        let clients = if relations.iter().any(|r| r == CLIENT) {
            relations::clients_by_id(&self.db, models.iter().filter_map(|m| m.client_id)).await?
        } else {
            Default::default()
        };

        Ok(models
            .into_iter()
            .map(|model| {
                let client = model.client_id.and_then(|id| clients.get(&id).cloned());
                let mut project = Project::from(model);
                project.client = client;
                project
            })
            .collect())
    }
}

impl_write_repository!(ProjectStore, ProjectEntity, Project, ActiveModel);

#[async_trait]
impl ProjectRepository for ProjectStore {
    async fn get_published(&self, options: &QueryOptions) -> AppResult<Vec<Project>> {
        self.fetch(Self::published(), options).await
    }

    async fn get_by_category(
        &self,
        category: &str,
        options: &QueryOptions,
    ) -> AppResult<Vec<Project>> {
        let select = Self::published().filter(project::Column::Category.eq(category));
        self.fetch(select, options).await
    }

    async fn get_featured(&self, limit: u64, options: &QueryOptions) -> AppResult<Vec<Project>> {
        let select = Self::published()
            .filter(project::Column::Featured.eq(true))
            .limit(limit);
        self.fetch(select, options).await
    }

    async fn get_recent(&self, limit: u64, options: &QueryOptions) -> AppResult<Vec<Project>> {
        let models = Self::published()
            .order_by_desc(project::Column::PublishedAt)
            .limit(limit)
            .all(&self.db)
            .await?;
        self.load_relations(models, options.relations()).await
    }

    async fn search(&self, query: &str, options: &QueryOptions) -> AppResult<Vec<Project>> {
        let pattern = format!("%{}%", escape_like(query));
        let matches = Condition::any()
            .add(Self::contains(project::Column::Title, &pattern))
            .add(Self::contains(project::Column::Description, &pattern))
            .add(Self::contains(project::Column::Technologies, &pattern));
        self.fetch(Self::published().filter(matches), options).await
    }

    async fn count_published(&self) -> AppResult<u64> {
        let count = Self::published().count(&self.db).await?;
        Ok(count)
    }
}

/// Make `%`, `_` and `\` match literally under `ESCAPE '\'`.
fn escape_like(query: &str) -> String {
    let mut escaped = String::with_capacity(query.len());
    for c in query.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
