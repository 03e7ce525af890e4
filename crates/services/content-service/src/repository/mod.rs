//! Repository layer for data access.
//!
//! `base` holds the generic CRUD traits every store implements; the
//! remaining modules add entity-specific queries.

mod analytics_repository;
mod base;
mod client_repository;
mod content_repository;
pub mod entities;
mod message_repository;
mod project_repository;
pub mod query;
pub mod relations;
mod settings_repository;

pub use analytics_repository::{AnalyticsRepository, AnalyticsStore};
pub use base::{CrudRepository, DeleteRepository, ReadRepository, WriteRepository};
pub use client_repository::{ClientStore, TestimonialStore};
pub use content_repository::{BlogPostStore, ServiceStore, TeamMemberStore};
pub use message_repository::{MessageRepository, MessageStore};
pub use project_repository::{ProjectRepository, ProjectStore};
pub use query::{Criteria, Criterion, Direction, QueryOptions};
pub use settings_repository::{UserSettingsRepository, UserSettingsStore};

#[cfg(any(test, feature = "test-utils"))]
pub use analytics_repository::MockAnalyticsRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use message_repository::MockMessageRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use project_repository::MockProjectRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use settings_repository::MockUserSettingsRepository;
