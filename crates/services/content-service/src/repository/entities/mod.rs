//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain records.

use chrono::Utc;
use sea_orm::{ActiveValue, Set};

pub mod analytics;
pub mod blog_post;
pub mod client;
pub mod contact;
pub mod project;
pub mod service;
pub mod team_member;
pub mod testimonial;
pub mod user_settings;

/// Entities addressable by their integer `id` column
pub trait Identity: sea_orm::EntityTrait {
    fn id_column() -> Self::Column;
}

/// Stamp `created_at` on insert and `updated_at` on every save.
/// Explicitly supplied insert timestamps are kept.
pub(crate) fn stamp_timestamps(
    created_at: &mut ActiveValue<sea_orm::prelude::DateTimeUtc>,
    updated_at: &mut ActiveValue<sea_orm::prelude::DateTimeUtc>,
    insert: bool,
) {
    let now = Utc::now();
    if insert {
        if created_at.is_not_set() {
            *created_at = Set(now);
        }
        if updated_at.is_not_set() {
            *updated_at = Set(now);
        }
    } else {
        *updated_at = Set(now);
    }
}

/// Derive a slug from `source` when none was supplied.
pub(crate) fn fill_slug(slug: &mut ActiveValue<String>, source: &ActiveValue<String>) {
    if !slug.is_not_set() {
        return;
    }
    if let ActiveValue::Set(text) | ActiveValue::Unchanged(text) = source {
        *slug = Set(slug::slugify(text));
    }
}

macro_rules! impl_identity {
    ($($module:ident),+ $(,)?) => {
        $(
            impl Identity for $module::Entity {
                fn id_column() -> Self::Column {
                    $module::Column::Id
                }
            }
        )+
    };
}

impl_identity!(
    analytics,
    blog_post,
    client,
    contact,
    project,
    service,
    team_member,
    testimonial,
    user_settings,
);

// Re-exports for public API convenience
pub use analytics::{ActiveModel as AnalyticsActiveModel, Entity as AnalyticsEntity};
pub use blog_post::{ActiveModel as BlogPostActiveModel, Entity as BlogPostEntity};
pub use client::{ActiveModel as ClientActiveModel, Entity as ClientEntity};
pub use contact::{ActiveModel as ContactActiveModel, Entity as ContactEntity};
pub use project::{ActiveModel as ProjectActiveModel, Entity as ProjectEntity};
pub use service::{ActiveModel as ServiceActiveModel, Entity as ServiceEntity};
pub use team_member::{ActiveModel as TeamMemberActiveModel, Entity as TeamMemberEntity};
pub use testimonial::{ActiveModel as TestimonialActiveModel, Entity as TestimonialEntity};
pub use user_settings::{ActiveModel as UserSettingsActiveModel, Entity as UserSettingsEntity};
