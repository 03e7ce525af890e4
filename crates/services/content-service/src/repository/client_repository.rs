//! Client and testimonial stores, the two sides of the client relations.

use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use super::base::{impl_write_repository, ReadRepository};
use super::entities::{client, testimonial};
use super::relations::{self, reject_relations, CLIENT, PROJECTS, TESTIMONIALS};
use common::AppResult;
use domain::{Client, Testimonial};

/// Clients, with `projects` and `testimonials` loadable
pub struct ClientStore {
    db: DatabaseConnection,
}

impl ClientStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReadRepository<client::Entity, Client> for ClientStore {
    fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    async fn load_relations(
        &self,
        models: Vec<client::Model>,
        relations: &[String],
    ) -> AppResult<Vec<Client>> {
        reject_relations::<client::Entity>(relations, &[PROJECTS, TESTIMONIALS])?;

        let ids: Vec<i32> = models.iter().map(|m| m.id).collect();
        let wants = |name: &str| relations.iter().any(|r| r == name);

        let mut projects = if wants(PROJECTS) {
            relations::projects_by_client(&self.db, ids.iter().copied()).await?
        } else {
            Default::default()
        };
        let mut testimonials = if wants(TESTIMONIALS) {
            relations::testimonials_by_client(&self.db, ids.iter().copied()).await?
        } else {
            Default::default()
        };

        Ok(models
            .into_iter()
            .map(|model| {
                let id = model.id;
                let mut client = Client::from(model);
                client.projects = projects.remove(&id).unwrap_or_default();
                client.testimonials = testimonials.remove(&id).unwrap_or_default();
                client
            })
            .collect())
    }
}

impl_write_repository!(ClientStore, client::Entity, Client, client::ActiveModel);

/// Testimonials, with `client` loadable
pub struct TestimonialStore {
    db: DatabaseConnection,
}

impl TestimonialStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReadRepository<testimonial::Entity, Testimonial> for TestimonialStore {
    fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    async fn load_relations(
        &self,
        models: Vec<testimonial::Model>,
        relations: &[String],
    ) -> AppResult<Vec<Testimonial>> {
        reject_relations::<testimonial::Entity>(relations, &[CLIENT])?;

        let clients = if relations.iter().any(|r| r == CLIENT) {
            relations::clients_by_id(&self.db, models.iter().filter_map(|m| m.client_id)).await?
        } else {
            Default::default()
        };

        Ok(models
            .into_iter()
            .map(|model| {
                let client = model.client_id.and_then(|id| clients.get(&id).cloned());
                let mut testimonial = Testimonial::from(model);
                testimonial.client = client;
                testimonial
            })
            .collect())
    }
}

impl_write_repository!(
    TestimonialStore,
    testimonial::Entity,
    Testimonial,
    testimonial::ActiveModel
);
