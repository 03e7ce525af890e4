//! Per-user admin settings.
//!
//! A settings record is a singleton per user spanning six independent
//! categories. Each category has an update type whose `None` fields keep
//! the stored value, so a partial payload never clears what it does not
//! mention.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_DATE_FORMAT, DEFAULT_ITEMS_PER_PAGE, DEFAULT_LANGUAGE, DEFAULT_SESSION_TIMEOUT_MINUTES,
    DEFAULT_THEME, DEFAULT_TIMEZONE,
};

/// Replace `slot` with the supplied value, keep it otherwise.
fn keep_or<T>(slot: &mut T, supplied: Option<T>) {
    if let Some(value) = supplied {
        *slot = value;
    }
}

/// Same as [`keep_or`] for nullable fields: a supplied value always
/// wins, an omitted one never clears.
fn keep_or_some<T>(slot: &mut Option<T>, supplied: Option<T>) {
    if supplied.is_some() {
        *slot = supplied;
    }
}

// =============================================================================
// Categories
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSettings {
    pub display_name: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    pub twitter: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub facebook: Option<String>,
    pub instagram: Option<String>,
    pub dribbble: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSettings {
    pub email_notifications: bool,
    pub push_notifications: bool,
    pub new_message_alerts: bool,
    pub project_updates: bool,
    pub weekly_digest: bool,
    pub marketing_emails: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            email_notifications: true,
            push_notifications: true,
            new_message_alerts: true,
            project_updates: true,
            weekly_digest: false,
            marketing_emails: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivacySettings {
    pub profile_public: bool,
    pub show_email: bool,
    pub show_activity: bool,
    pub allow_search_indexing: bool,
}

impl Default for PrivacySettings {
    fn default() -> Self {
        Self {
            profile_public: true,
            show_email: false,
            show_activity: true,
            allow_search_indexing: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayPreferences {
    pub theme: String,
    pub language: String,
    pub timezone: String,
    pub date_format: String,
    pub items_per_page: i32,
    pub compact_mode: bool,
}

impl Default for DisplayPreferences {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            timezone: DEFAULT_TIMEZONE.to_string(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            compact_mode: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecuritySettings {
    pub two_factor_enabled: bool,
    pub login_alerts: bool,
    pub session_timeout_minutes: i32,
}

impl Default for SecuritySettings {
    fn default() -> Self {
        Self {
            two_factor_enabled: false,
            login_alerts: true,
            session_timeout_minutes: DEFAULT_SESSION_TIMEOUT_MINUTES,
        }
    }
}

// =============================================================================
// Updates
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProfileUpdate {
    pub display_name: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SocialLinksUpdate {
    pub twitter: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub facebook: Option<String>,
    pub instagram: Option<String>,
    pub dribbble: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NotificationUpdate {
    pub email_notifications: Option<bool>,
    pub push_notifications: Option<bool>,
    pub new_message_alerts: Option<bool>,
    pub project_updates: Option<bool>,
    pub weekly_digest: Option<bool>,
    pub marketing_emails: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PrivacyUpdate {
    pub profile_public: Option<bool>,
    pub show_email: Option<bool>,
    pub show_activity: Option<bool>,
    pub allow_search_indexing: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DisplayPreferencesUpdate {
    pub theme: Option<String>,
    pub language: Option<String>,
    pub timezone: Option<String>,
    pub date_format: Option<String>,
    pub items_per_page: Option<i32>,
    pub compact_mode: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SecurityUpdate {
    pub two_factor_enabled: Option<bool>,
    pub login_alerts: Option<bool>,
    pub session_timeout_minutes: Option<i32>,
}

impl ProfileSettings {
    pub fn merge(&mut self, update: ProfileUpdate) {
        keep_or_some(&mut self.display_name, update.display_name);
        keep_or_some(&mut self.bio, update.bio);
        keep_or_some(&mut self.avatar_url, update.avatar_url);
        keep_or_some(&mut self.phone, update.phone);
        keep_or_some(&mut self.location, update.location);
        keep_or_some(&mut self.website, update.website);
    }
}

impl SocialLinks {
    pub fn merge(&mut self, update: SocialLinksUpdate) {
        keep_or_some(&mut self.twitter, update.twitter);
        keep_or_some(&mut self.linkedin, update.linkedin);
        keep_or_some(&mut self.github, update.github);
        keep_or_some(&mut self.facebook, update.facebook);
        keep_or_some(&mut self.instagram, update.instagram);
        keep_or_some(&mut self.dribbble, update.dribbble);
    }
}

impl NotificationSettings {
    pub fn merge(&mut self, update: NotificationUpdate) {
        keep_or(&mut self.email_notifications, update.email_notifications);
        keep_or(&mut self.push_notifications, update.push_notifications);
        keep_or(&mut self.new_message_alerts, update.new_message_alerts);
        keep_or(&mut self.project_updates, update.project_updates);
        keep_or(&mut self.weekly_digest, update.weekly_digest);
        keep_or(&mut self.marketing_emails, update.marketing_emails);
    }
}

impl PrivacySettings {
    pub fn merge(&mut self, update: PrivacyUpdate) {
        keep_or(&mut self.profile_public, update.profile_public);
        keep_or(&mut self.show_email, update.show_email);
        keep_or(&mut self.show_activity, update.show_activity);
        keep_or(&mut self.allow_search_indexing, update.allow_search_indexing);
    }
}

impl DisplayPreferences {
    pub fn merge(&mut self, update: DisplayPreferencesUpdate) {
        keep_or(&mut self.theme, update.theme);
        keep_or(&mut self.language, update.language);
        keep_or(&mut self.timezone, update.timezone);
        keep_or(&mut self.date_format, update.date_format);
        keep_or(&mut self.items_per_page, update.items_per_page);
        keep_or(&mut self.compact_mode, update.compact_mode);
    }
}

impl SecuritySettings {
    pub fn merge(&mut self, update: SecurityUpdate) {
        keep_or(&mut self.two_factor_enabled, update.two_factor_enabled);
        keep_or(&mut self.login_alerts, update.login_alerts);
        keep_or(&mut self.session_timeout_minutes, update.session_timeout_minutes);
    }
}

/// Updates for any combination of categories
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SettingsPatch {
    pub profile: ProfileUpdate,
    pub social: SocialLinksUpdate,
    pub notifications: NotificationUpdate,
    pub privacy: PrivacyUpdate,
    pub display: DisplayPreferencesUpdate,
    pub security: SecurityUpdate,
}

impl From<ProfileUpdate> for SettingsPatch {
    fn from(profile: ProfileUpdate) -> Self {
        Self { profile, ..Default::default() }
    }
}

impl From<SocialLinksUpdate> for SettingsPatch {
    fn from(social: SocialLinksUpdate) -> Self {
        Self { social, ..Default::default() }
    }
}

impl From<NotificationUpdate> for SettingsPatch {
    fn from(notifications: NotificationUpdate) -> Self {
        Self { notifications, ..Default::default() }
    }
}

impl From<PrivacyUpdate> for SettingsPatch {
    fn from(privacy: PrivacyUpdate) -> Self {
        Self { privacy, ..Default::default() }
    }
}

impl From<DisplayPreferencesUpdate> for SettingsPatch {
    fn from(display: DisplayPreferencesUpdate) -> Self {
        Self { display, ..Default::default() }
    }
}

impl From<SecurityUpdate> for SettingsPatch {
    fn from(security: SecurityUpdate) -> Self {
        Self { security, ..Default::default() }
    }
}

// =============================================================================
// Record
// =============================================================================

/// Settings record. `id` is `None` until the record has been stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSettings {
    pub id: Option<i32>,
    pub user_id: i32,
    pub profile: ProfileSettings,
    pub social: SocialLinks,
    pub notifications: NotificationSettings,
    pub privacy: PrivacySettings,
    pub display: DisplayPreferences,
    pub security: SecuritySettings,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl UserSettings {
    /// Unsaved record holding the defaults of every category
    pub fn defaults_for(user_id: i32) -> Self {
        Self {
            id: None,
            user_id,
            profile: ProfileSettings::default(),
            social: SocialLinks::default(),
            notifications: NotificationSettings::default(),
            privacy: PrivacySettings::default(),
            display: DisplayPreferences::default(),
            security: SecuritySettings::default(),
            created_at: None,
            updated_at: None,
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Shallow merge of every category in `patch`.
    pub fn apply(&mut self, patch: SettingsPatch) {
        self.profile.merge(patch.profile);
        self.social.merge(patch.social);
        self.notifications.merge(patch.notifications);
        self.privacy.merge(patch.privacy);
        self.display.merge(patch.display);
        self.security.merge(patch.security);
    }

    /// Stored record, or defaults when there is none yet, with `patch` applied.
    pub fn merged(existing: Option<UserSettings>, user_id: i32, patch: SettingsPatch) -> Self {
        let mut settings = existing.unwrap_or_else(|| Self::defaults_for(user_id));
        settings.apply(patch);
        settings
    }
}
