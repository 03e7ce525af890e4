//! Contact form submissions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Contact message with its read/unread inbox state.
///
/// `read_at` is set exactly when `is_read` is true.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: Option<String>,
    pub message: String,
    /// Free-text workflow status ("new", "replied", ...)
    pub status: String,
    pub is_read: bool,
    pub read_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Message {
    pub fn is_unread(&self) -> bool {
        !self.is_read
    }
}
