//! Eager-load support: relation names and batched loaders.
//!
//! Each loader issues one `IN` query for the whole batch of parents so a
//! page of records costs one extra statement per requested relation.

use std::collections::HashMap;

use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityName, EntityTrait, QueryFilter, QueryOrder,
};

use common::{AppError, AppResult};
use domain::{Client, Project, Testimonial};

use super::entities::{client, project, testimonial};

/// Project / Testimonial -> Client
pub const CLIENT: &str = "client";
/// Client -> Projects
pub const PROJECTS: &str = "projects";
/// Client -> Testimonials
pub const TESTIMONIALS: &str = "testimonials";

/// Error raised when a caller asks for a relation the entity lacks.
pub fn undefined_relation<E: EntityName>(name: &str) -> AppError {
    AppError::Database(DbErr::Custom(format!(
        "Call to undefined relationship [{}] on table [{}]",
        name,
        E::default().table_name()
    )))
}

/// Fail on the first requested relation not listed in `known`.
pub fn reject_relations<E: EntityName>(requested: &[String], known: &[&str]) -> AppResult<()> {
    match requested.iter().find(|name| !known.contains(&name.as_str())) {
        Some(name) => Err(undefined_relation::<E>(name)),
        None => Ok(()),
    }
}

fn distinct(ids: impl IntoIterator<Item = i32>) -> Vec<i32> {
    let mut ids: Vec<i32> = ids.into_iter().collect();
    ids.sort_unstable();
    ids.dedup();
    ids
}

/// Clients keyed by id
pub async fn clients_by_id(
    db: &DatabaseConnection,
    ids: impl IntoIterator<Item = i32>,
) -> AppResult<HashMap<i32, Client>> {
    let ids = distinct(ids);
    if ids.is_empty() {
        return Ok(HashMap::new());
    }

    let clients = client::Entity::find()
        .filter(client::Column::Id.is_in(ids))
        .all(db)
        .await?;

    Ok(clients
        .into_iter()
        .map(|model| (model.id, Client::from(model)))
        .collect())
}

/// Projects grouped by owning client, newest first
pub async fn projects_by_client(
    db: &DatabaseConnection,
    client_ids: impl IntoIterator<Item = i32>,
) -> AppResult<HashMap<i32, Vec<Project>>> {
    let ids = distinct(client_ids);
    let mut grouped: HashMap<i32, Vec<Project>> = HashMap::new();
    if ids.is_empty() {
        return Ok(grouped);
    }

    let projects = project::Entity::find()
        .filter(project::Column::ClientId.is_in(ids))
        .order_by_desc(project::Column::CreatedAt)
        .all(db)
        .await?;

    for model in projects {
        if let Some(client_id) = model.client_id {
            grouped.entry(client_id).or_default().push(model.into());
        }
    }
    Ok(grouped)
}

/// Testimonials grouped by owning client, newest first
pub async fn testimonials_by_client(
    db: &DatabaseConnection,
    client_ids: impl IntoIterator<Item = i32>,
) -> AppResult<HashMap<i32, Vec<Testimonial>>> {
    let ids = distinct(client_ids);
    let mut grouped: HashMap<i32, Vec<Testimonial>> = HashMap::new();
    if ids.is_empty() {
        return Ok(grouped);
    }

    let testimonials = testimonial::Entity::find()
        .filter(testimonial::Column::ClientId.is_in(ids))
        .order_by_desc(testimonial::Column::CreatedAt)
        .all(db)
        .await?;

    for model in testimonials {
        if let Some(client_id) = model.client_id {
            grouped.entry(client_id).or_default().push(model.into());
        }
    }
    Ok(grouped)
}
