//! Base repository traits following Interface Segregation Principle (ISP).
//!
//! These traits provide uniform CRUD and query composition for every
//! entity. Stores implement `ReadRepository` and opt into writes with
//! `WriteRepository`/`DeleteRepository`; the append-only analytics store
//! does not.
//!
//! Not-found is never an error here: lookups return `None`, `update`
//! and `delete` return `false`. Datastore failures propagate unchanged.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection,
    IntoActiveModel, Iterable, PaginatorTrait, QueryFilter, Value,
};

use common::{AppResult, Paginated, PaginationParams};

use super::entities::Identity;
use super::query::{Criteria, QueryOptions};
use super::relations::reject_relations;

/// Read operations (Query)
#[async_trait]
pub trait ReadRepository<E, R>: Send + Sync
where
    E: Identity + 'static,
    E::Model: Send + Sync,
    R: From<E::Model> + Send + 'static,
{
    /// Get database connection reference
    fn db(&self) -> &DatabaseConnection;

    /// Convert fetched models into records with the requested relations
    /// resolved. Stores with relations override this.
    async fn load_relations(&self, models: Vec<E::Model>, relations: &[String]) -> AppResult<Vec<R>> {
        reject_relations::<E>(relations, &[])?;
        Ok(models.into_iter().map(R::from).collect())
    }

    /// Every record, honoring eager-loads and ordering
    async fn all(&self, options: &QueryOptions) -> AppResult<Vec<R>> {
        let models = options.apply(E::find())?.all(self.db()).await?;
        self.load_relations(models, options.relations()).await
    }

    /// Record by identity
    async fn find(&self, id: i32, options: &QueryOptions) -> AppResult<Option<R>> {
        let model = E::find()
            .filter(E::id_column().eq(id))
            .one(self.db())
            .await?;

        match model {
            Some(model) => Ok(self.load_relations(vec![model], options.relations()).await?.pop()),
            None => Ok(None),
        }
    }

    /// First record (in option order) whose `field` equals `value`
    async fn find_by(
        &self,
        field: &str,
        value: Value,
        options: &QueryOptions,
    ) -> AppResult<Option<R>> {
        let select = Criteria::new().where_eq(field, value).apply(E::find())?;
        let model = options.apply(select)?.one(self.db()).await?;

        match model {
            Some(model) => Ok(self.load_relations(vec![model], options.relations()).await?.pop()),
            None => Ok(None),
        }
    }

    /// Records matching every criterion
    async fn find_where(&self, criteria: &Criteria, options: &QueryOptions) -> AppResult<Vec<R>> {
        let select = criteria.apply(E::find())?;
        let models = options.apply(select)?.all(self.db()).await?;
        self.load_relations(models, options.relations()).await
    }

    /// One page of `all()` plus totals
    async fn paginate(
        &self,
        params: &PaginationParams,
        options: &QueryOptions,
    ) -> AppResult<Paginated<R>> {
        let per_page = params.limit();
        let paginator = options.apply(E::find())?.paginate(self.db(), per_page);
        let total = paginator.num_items().await?;
        let models = paginator.fetch_page(params.page() - 1).await?;
        let data = self.load_relations(models, options.relations()).await?;
        Ok(Paginated::new(data, params.page(), per_page, total))
    }

    /// Count all records
    async fn count(&self) -> AppResult<u64> {
        E::find().count(self.db()).await.map_err(Into::into)
    }
}

/// Write operations (Command)
#[async_trait]
pub trait WriteRepository<E, R, A>: ReadRepository<E, R>
where
    E: Identity + 'static,
    E::Model: Send + Sync + IntoActiveModel<A>,
    R: From<E::Model> + Send + 'static,
    A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + 'static,
{
    /// Insert a new record. Constraint violations propagate.
    async fn create(&self, attributes: A) -> AppResult<R> {
        let model = attributes.insert(self.db()).await?;
        tracing::debug!(table = E::default().table_name(), "record created");
        Ok(R::from(model))
    }

    /// Merge the `Set` fields of `attributes` onto the stored record.
    ///
    /// Returns `false` without writing when `id` does not exist. An
    /// attribute set with nothing to change succeeds without a write.
    async fn update(&self, id: i32, attributes: A) -> AppResult<bool> {
        let Some(model) = E::find()
            .filter(E::id_column().eq(id))
            .one(self.db())
            .await?
        else {
            tracing::warn!(table = E::default().table_name(), id, "update of missing record");
            return Ok(false);
        };

        let mut active: A = model.into_active_model();
        for column in E::Column::iter() {
            if let ActiveValue::Set(value) = attributes.get(column) {
                active.set(column, value);
            }
        }

        if active.is_changed() {
            active.update(self.db()).await?;
            tracing::debug!(table = E::default().table_name(), id, "record updated");
        }
        Ok(true)
    }
}

/// Delete operations
#[async_trait]
pub trait DeleteRepository<E, R>: ReadRepository<E, R>
where
    E: Identity + 'static,
    E::Model: Send + Sync,
    R: From<E::Model> + Send + 'static,
{
    /// Delete by identity. `false` when nothing matched.
    async fn delete(&self, id: i32) -> AppResult<bool> {
        let result = E::delete_many()
            .filter(E::id_column().eq(id))
            .exec(self.db())
            .await?;

        if result.rows_affected == 0 {
            tracing::warn!(table = E::default().table_name(), id, "delete of missing record");
            return Ok(false);
        }

        tracing::debug!(table = E::default().table_name(), id, "record deleted");
        Ok(true)
    }
}

/// Full CRUD repository - Combines all operations
pub trait CrudRepository<E, R, A>: WriteRepository<E, R, A> + DeleteRepository<E, R>
where
    E: Identity + 'static,
    E::Model: Send + Sync + IntoActiveModel<A>,
    R: From<E::Model> + Send + 'static,
    A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + 'static,
{
}

// Auto-implement CrudRepository for types implementing all traits
impl<T, E, R, A> CrudRepository<E, R, A> for T
where
    T: WriteRepository<E, R, A> + DeleteRepository<E, R>,
    E: Identity + 'static,
    E::Model: Send + Sync + IntoActiveModel<A>,
    R: From<E::Model> + Send + 'static,
    A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + 'static,
{
}

/// `ReadRepository` for a store with a `db: DatabaseConnection` field
/// and no relations.
macro_rules! impl_read_repository {
    ($store:ty, $entity:ty, $record:ty) => {
        impl $crate::repository::ReadRepository<$entity, $record> for $store {
            fn db(&self) -> &sea_orm::DatabaseConnection {
                &self.db
            }
        }
    };
}

/// `WriteRepository` + `DeleteRepository` with the default behavior.
macro_rules! impl_write_repository {
    ($store:ty, $entity:ty, $record:ty, $active:ty) => {
        impl $crate::repository::WriteRepository<$entity, $record, $active> for $store {}
        impl $crate::repository::DeleteRepository<$entity, $record> for $store {}
    };
}

pub(crate) use impl_read_repository;
pub(crate) use impl_write_repository;
