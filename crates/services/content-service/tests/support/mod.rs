//! Shared fixtures for the repository integration tests.
#![allow(dead_code)]

use chrono::{DateTime, Duration, Utc};
use sea_orm::{DatabaseConnection, Set};

use common::DatabaseConfig;
use content_service_lib::infra::Database;
use content_service_lib::repository::entities::{client, contact, project, testimonial};
use domain::{STATUS_DRAFT, STATUS_PUBLISHED};

/// Fresh in-memory SQLite database with every migration applied.
///
/// A single pooled connection keeps every query on the same in-memory
/// database.
pub async fn setup() -> DatabaseConnection {
    let config = DatabaseConfig {
        max_connections: 1,
        min_connections: 1,
        ..DatabaseConfig::with_url("sqlite::memory:")
    };
    Database::connect(&config)
        .await
        .expect("in-memory database")
        .get_connection()
}

pub fn days_ago(days: i64) -> DateTime<Utc> {
    Utc::now() - Duration::days(days)
}

pub fn new_project(title: &str, published: bool) -> project::ActiveModel {
    project::ActiveModel {
        title: Set(title.to_string()),
        description: Set(format!("About {}", title)),
        category: Set("web".to_string()),
        technologies: Set("Rust, PostgreSQL".to_string()),
        status: Set(if published { STATUS_PUBLISHED } else { STATUS_DRAFT }.to_string()),
        featured: Set(false),
        published_at: Set(published.then(Utc::now)),
        ..Default::default()
    }
}

pub fn new_client(name: &str) -> client::ActiveModel {
    client::ActiveModel {
        name: Set(name.to_string()),
        is_active: Set(true),
        ..Default::default()
    }
}

pub fn new_testimonial(author: &str, client_id: Option<i32>) -> testimonial::ActiveModel {
    testimonial::ActiveModel {
        client_name: Set(author.to_string()),
        content: Set("Delivered on time.".to_string()),
        rating: Set(5),
        client_id: Set(client_id),
        is_featured: Set(false),
        is_published: Set(true),
        ..Default::default()
    }
}

pub fn new_message(subject: &str) -> contact::ActiveModel {
    contact::ActiveModel {
        name: Set("Grace".to_string()),
        email: Set("grace@example.com".to_string()),
        subject: Set(Some(subject.to_string())),
        message: Set("We would like a quote.".to_string()),
        status: Set(domain::MESSAGE_STATUS_NEW.to_string()),
        is_read: Set(false),
        ..Default::default()
    }
}
