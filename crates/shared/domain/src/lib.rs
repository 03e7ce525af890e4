//! Domain layer - Core business records and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies:
//! the agency's content records, the contact inbox, page visit analytics
//! and per-user settings with their merge rules.

pub mod analytics;
pub mod constants;
pub mod content;
pub mod error;
pub mod message;
pub mod settings;

pub use analytics::{
    classify_browser, classify_device, classify_os, AnalyticsEvent, CountEntry, DailyCount,
    NewVisit, Visit, VisitContext,
};
pub use constants::*;
pub use content::{BlogPost, Client, ContentStatus, Project, Service, TeamMember, Testimonial};
pub use error::DomainError;
pub use message::Message;
pub use settings::{
    DisplayPreferences, DisplayPreferencesUpdate, NotificationSettings, NotificationUpdate,
    PrivacySettings, PrivacyUpdate, ProfileSettings, ProfileUpdate, SecuritySettings,
    SecurityUpdate, SettingsPatch, SocialLinks, SocialLinksUpdate, UserSettings,
};
