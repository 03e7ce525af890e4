//! Portfolio and marketing content records.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{STATUS_DRAFT, STATUS_PUBLISHED};
use crate::error::DomainError;

/// Publishing state shared by projects and blog posts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentStatus {
    Draft,
    Published,
}

impl ContentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentStatus::Draft => STATUS_DRAFT,
            ContentStatus::Published => STATUS_PUBLISHED,
        }
    }
}

impl FromStr for ContentStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            STATUS_PUBLISHED => Ok(ContentStatus::Published),
            STATUS_DRAFT => Ok(ContentStatus::Draft),
            other => Err(DomainError::validation(format!(
                "unknown content status `{}`",
                other
            ))),
        }
    }
}

impl std::fmt::Display for ContentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Portfolio project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub content: Option<String>,
    pub category: String,
    /// Comma separated list, e.g. "React, Node.js"
    pub technologies: String,
    pub image_url: Option<String>,
    pub project_url: Option<String>,
    pub github_url: Option<String>,
    pub client_id: Option<i32>,
    pub status: String,
    pub featured: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Present only when the `client` relation was eager-loaded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client: Option<Client>,
}

impl Project {
    /// Check if the project is visible on the public site
    pub fn is_published(&self) -> bool {
        self.status == STATUS_PUBLISHED
    }

    /// Individual technologies, trimmed, empty entries dropped
    pub fn technology_list(&self) -> Vec<&str> {
        self.technologies
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect()
    }
}

/// Blog article
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub content: String,
    pub featured_image: Option<String>,
    pub category: Option<String>,
    pub tags: Option<String>,
    pub author: Option<String>,
    pub status: String,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BlogPost {
    pub fn is_published(&self) -> bool {
        self.status == STATUS_PUBLISHED
    }
}

/// Service offered by the agency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub icon: Option<String>,
    pub features: Option<String>,
    pub price_range: Option<String>,
    pub sort_order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Client organisation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: i32,
    pub name: String,
    pub email: Option<String>,
    pub company: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub logo_url: Option<String>,
    pub industry: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Filled by the `projects` relation
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub projects: Vec<Project>,
    /// Filled by the `testimonials` relation
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub testimonials: Vec<Testimonial>,
}

/// Team member shown on the about page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub position: String,
    pub bio: Option<String>,
    pub email: Option<String>,
    pub photo_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub github_url: Option<String>,
    pub sort_order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Client testimonial
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: i32,
    pub client_name: String,
    pub client_position: Option<String>,
    pub client_company: Option<String>,
    pub content: String,
    pub rating: i32,
    pub avatar_url: Option<String>,
    pub client_id: Option<i32>,
    pub is_featured: bool,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Present only when the `client` relation was eager-loaded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client: Option<Client>,
}
