//! Query composition values passed into repository reads.
//!
//! `QueryOptions` replaces mutable per-repository configuration: every
//! query-producing call receives the eager-loads and ordering it should
//! use, and nothing carries over to the next call.

use sea_orm::{
    ColumnTrait, Condition, DbErr, EntityTrait, IdenStatic, Iterable, Order,
    QueryFilter, QueryOrder, Select, Value,
};
use serde::Deserialize;

use domain::DEFAULT_ORDER_COLUMN;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Asc,
    Desc,
}

impl From<Direction> for Order {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Asc => Order::Asc,
            Direction::Desc => Order::Desc,
        }
    }
}

/// Eager-load and ordering configuration for one repository call.
///
/// Defaults to no relations, ordered by `created_at` descending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryOptions {
    relations: Vec<String>,
    order_column: String,
    direction: Direction,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            relations: Vec::new(),
            order_column: DEFAULT_ORDER_COLUMN.to_string(),
            direction: Direction::Desc,
        }
    }
}

impl QueryOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add relations to eager-load.
    pub fn with<I, S>(mut self, relations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for relation in relations {
            let relation = relation.into();
            if !self.relations.contains(&relation) {
                self.relations.push(relation);
            }
        }
        self
    }

    /// Replace the ordering.
    pub fn order_by(mut self, column: impl Into<String>, direction: Direction) -> Self {
        self.order_column = column.into();
        self.direction = direction;
        self
    }

    /// Newest first by `column`
    pub fn latest(self, column: impl Into<String>) -> Self {
        self.order_by(column, Direction::Desc)
    }

    /// Oldest first by `column`
    pub fn oldest(self, column: impl Into<String>) -> Self {
        self.order_by(column, Direction::Asc)
    }

    pub fn relations(&self) -> &[String] {
        &self.relations
    }

    pub fn wants(&self, relation: &str) -> bool {
        self.relations.iter().any(|r| r == relation)
    }

    pub fn order_column(&self) -> &str {
        &self.order_column
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Apply the ordering to `select`. Fails on a column the entity
    /// does not have.
    pub fn apply<E: EntityTrait>(&self, select: Select<E>) -> Result<Select<E>, DbErr> {
        let column = resolve_column::<E>(&self.order_column)?;
        Ok(select.order_by(column, self.direction.into()))
    }
}

/// Look up an entity column by its database name.
pub fn resolve_column<E: EntityTrait>(name: &str) -> Result<E::Column, DbErr> {
    E::Column::iter()
        .find(|column| column.as_str() == name)
        .ok_or_else(|| {
            DbErr::Custom(format!(
                "Unknown column `{}` on table `{}`",
                name,
                E::default().table_name()
            ))
        })
}

/// Match rule for one field
#[derive(Debug, Clone, PartialEq)]
pub enum Criterion {
    /// field = value
    Equals(Value),
    /// field IN (values)
    OneOf(Vec<Value>),
}

/// Conjunction of field criteria for `find_where`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Criteria {
    entries: Vec<(String, Criterion)>,
}

impl Criteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn where_eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.entries
            .push((field.into(), Criterion::Equals(value.into())));
        self
    }

    pub fn where_in<V, I>(mut self, field: impl Into<String>, values: I) -> Self
    where
        V: Into<Value>,
        I: IntoIterator<Item = V>,
    {
        let values = values.into_iter().map(Into::into).collect();
        self.entries.push((field.into(), Criterion::OneOf(values)));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Build the SQL condition, resolving field names against `E`.
    pub fn condition<E: EntityTrait>(&self) -> Result<Condition, DbErr> {
        let mut condition = Condition::all();
        for (field, criterion) in &self.entries {
            let column = resolve_column::<E>(field)?;
            condition = match criterion {
                Criterion::Equals(value) => condition.add(column.eq(value.clone())),
                Criterion::OneOf(values) => condition.add(column.is_in(values.clone())),
            };
        }
        Ok(condition)
    }

    /// Filter `select` by every criterion.
    pub fn apply<E: EntityTrait>(&self, select: Select<E>) -> Result<Select<E>, DbErr> {
        Ok(select.filter(self.condition::<E>()?))
    }
}
