//! User settings database entity for SeaORM.
//!
//! The six settings categories are stored as flat columns of one row per
//! user; `user_id` is unique.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use domain::{
    DisplayPreferences, NotificationSettings, PrivacySettings, ProfileSettings, SecuritySettings,
    SocialLinks, UserSettings,
};

use super::stamp_timestamps;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user_settings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub user_id: i32,

    // Profile
    pub display_name: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,

    // Social media
    pub twitter: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub facebook: Option<String>,
    pub instagram: Option<String>,
    pub dribbble: Option<String>,

    // Notifications
    pub email_notifications: bool,
    pub push_notifications: bool,
    pub new_message_alerts: bool,
    pub project_updates: bool,
    pub weekly_digest: bool,
    pub marketing_emails: bool,

    // Privacy
    pub profile_public: bool,
    pub show_email: bool,
    pub show_activity: bool,
    pub allow_search_indexing: bool,

    // Display
    pub theme: String,
    pub language: String,
    pub timezone: String,
    pub date_format: String,
    pub items_per_page: i32,
    pub compact_mode: bool,

    // Security
    pub two_factor_enabled: bool,
    pub login_alerts: bool,
    pub session_timeout_minutes: i32,

    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        stamp_timestamps(&mut self.created_at, &mut self.updated_at, insert);
        Ok(self)
    }
}

impl ActiveModel {
    /// Set every settings column from `settings`. Identity and
    /// timestamps are left to the caller and `before_save`.
    pub fn assign(&mut self, settings: UserSettings) {
        self.user_id = Set(settings.user_id);

        let profile = settings.profile;
        self.display_name = Set(profile.display_name);
        self.bio = Set(profile.bio);
        self.avatar_url = Set(profile.avatar_url);
        self.phone = Set(profile.phone);
        self.location = Set(profile.location);
        self.website = Set(profile.website);

        let social = settings.social;
        self.twitter = Set(social.twitter);
        self.linkedin = Set(social.linkedin);
        self.github = Set(social.github);
        self.facebook = Set(social.facebook);
        self.instagram = Set(social.instagram);
        self.dribbble = Set(social.dribbble);

        let notifications = settings.notifications;
        self.email_notifications = Set(notifications.email_notifications);
        self.push_notifications = Set(notifications.push_notifications);
        self.new_message_alerts = Set(notifications.new_message_alerts);
        self.project_updates = Set(notifications.project_updates);
        self.weekly_digest = Set(notifications.weekly_digest);
        self.marketing_emails = Set(notifications.marketing_emails);

        let privacy = settings.privacy;
        self.profile_public = Set(privacy.profile_public);
        self.show_email = Set(privacy.show_email);
        self.show_activity = Set(privacy.show_activity);
        self.allow_search_indexing = Set(privacy.allow_search_indexing);

        let display = settings.display;
        self.theme = Set(display.theme);
        self.language = Set(display.language);
        self.timezone = Set(display.timezone);
        self.date_format = Set(display.date_format);
        self.items_per_page = Set(display.items_per_page);
        self.compact_mode = Set(display.compact_mode);

        let security = settings.security;
        self.two_factor_enabled = Set(security.two_factor_enabled);
        self.login_alerts = Set(security.login_alerts);
        self.session_timeout_minutes = Set(security.session_timeout_minutes);
    }
}

impl From<Model> for UserSettings {
    fn from(model: Model) -> Self {
        UserSettings {
            id: Some(model.id),
            user_id: model.user_id,
            profile: ProfileSettings {
                display_name: model.display_name,
                bio: model.bio,
                avatar_url: model.avatar_url,
                phone: model.phone,
                location: model.location,
                website: model.website,
            },
            social: SocialLinks {
                twitter: model.twitter,
                linkedin: model.linkedin,
                github: model.github,
                facebook: model.facebook,
                instagram: model.instagram,
                dribbble: model.dribbble,
            },
            notifications: NotificationSettings {
                email_notifications: model.email_notifications,
                push_notifications: model.push_notifications,
                new_message_alerts: model.new_message_alerts,
                project_updates: model.project_updates,
                weekly_digest: model.weekly_digest,
                marketing_emails: model.marketing_emails,
            },
            privacy: PrivacySettings {
                profile_public: model.profile_public,
                show_email: model.show_email,
                show_activity: model.show_activity,
                allow_search_indexing: model.allow_search_indexing,
            },
            display: DisplayPreferences {
                theme: model.theme,
                language: model.language,
                timezone: model.timezone,
                date_format: model.date_format,
                items_per_page: model.items_per_page,
                compact_mode: model.compact_mode,
            },
            security: SecuritySettings {
                two_factor_enabled: model.two_factor_enabled,
                login_alerts: model.login_alerts,
                session_timeout_minutes: model.session_timeout_minutes,
            },
            created_at: Some(model.created_at),
            updated_at: Some(model.updated_at),
        }
    }
}
