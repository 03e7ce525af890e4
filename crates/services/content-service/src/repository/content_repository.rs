//! Stores for content that needs nothing beyond the base repository.

use sea_orm::DatabaseConnection;

use super::base::{impl_read_repository, impl_write_repository};
use super::entities::{
    BlogPostActiveModel, BlogPostEntity, ServiceActiveModel, ServiceEntity, TeamMemberActiveModel,
    TeamMemberEntity,
};
use domain::{BlogPost, Service, TeamMember};

macro_rules! content_store {
    ($(#[$doc:meta])* $store:ident, $entity:ty, $record:ty, $active:ty) => {
        $(#[$doc])*
        pub struct $store {
            db: DatabaseConnection,
        }

        impl $store {
            pub fn new(db: DatabaseConnection) -> Self {
                Self { db }
            }
        }

        impl_read_repository!($store, $entity, $record);
        impl_write_repository!($store, $entity, $record, $active);
    };
}

content_store!(
    /// Blog posts
    BlogPostStore,
    BlogPostEntity,
    BlogPost,
    BlogPostActiveModel
);
content_store!(
    /// Offered services
    ServiceStore,
    ServiceEntity,
    Service,
    ServiceActiveModel
);
content_store!(
    /// Team members
    TeamMemberStore,
    TeamMemberEntity,
    TeamMember,
    TeamMemberActiveModel
);
