//! User settings repository: one record per user, merged on write.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
};

use super::base::{impl_read_repository, impl_write_repository};
use super::entities::user_settings::{self, ActiveModel, Entity as UserSettingsEntity};
use common::AppResult;
use domain::{
    DisplayPreferencesUpdate, NotificationUpdate, PrivacyUpdate, ProfileUpdate, SecurityUpdate,
    SettingsPatch, SocialLinksUpdate, UserSettings,
};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Settings persistence with category-scoped partial updates.
///
/// Updaters never fail for a user without settings: the record is
/// materialized with defaults before the patch is applied. Fields the
/// patch leaves as `None` keep their stored value.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserSettingsRepository: Send + Sync {
    async fn get_by_user_id(&self, user_id: i32) -> AppResult<Option<UserSettings>>;

    /// Create the record if absent, then merge `patch` and persist.
    /// Returns the stored record.
    async fn create_or_update(&self, user_id: i32, patch: SettingsPatch)
        -> AppResult<UserSettings>;

    async fn update_profile(&self, user_id: i32, update: ProfileUpdate) -> AppResult<UserSettings> {
        self.create_or_update(user_id, update.into()).await
    }

    async fn update_social_media(
        &self,
        user_id: i32,
        update: SocialLinksUpdate,
    ) -> AppResult<UserSettings> {
        self.create_or_update(user_id, update.into()).await
    }

    async fn update_notifications(
        &self,
        user_id: i32,
        update: NotificationUpdate,
    ) -> AppResult<UserSettings> {
        self.create_or_update(user_id, update.into()).await
    }

    async fn update_privacy(&self, user_id: i32, update: PrivacyUpdate) -> AppResult<UserSettings> {
        self.create_or_update(user_id, update.into()).await
    }

    async fn update_display_preferences(
        &self,
        user_id: i32,
        update: DisplayPreferencesUpdate,
    ) -> AppResult<UserSettings> {
        self.create_or_update(user_id, update.into()).await
    }

    async fn update_security(
        &self,
        user_id: i32,
        update: SecurityUpdate,
    ) -> AppResult<UserSettings> {
        self.create_or_update(user_id, update.into()).await
    }
}

pub struct UserSettingsStore {
    db: DatabaseConnection,
}

impl UserSettingsStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl_read_repository!(UserSettingsStore, UserSettingsEntity, UserSettings);
impl_write_repository!(UserSettingsStore, UserSettingsEntity, UserSettings, ActiveModel);

#[async_trait]
impl UserSettingsRepository for UserSettingsStore {
    async fn get_by_user_id(&self, user_id: i32) -> AppResult<Option<UserSettings>> {
        let model = UserSettingsEntity::find()
            .filter(user_settings::Column::UserId.eq(user_id))
            .one(&self.db)
            .await?;

        Ok(model.map(UserSettings::from))
    }

    async fn create_or_update(
        &self,
        user_id: i32,
        patch: SettingsPatch,
    ) -> AppResult<UserSettings> {
        let existing = self.get_by_user_id(user_id).await?;
        let settings = UserSettings::merged(existing.clone(), user_id, patch);

        let model = match (existing, settings.id) {
            (Some(existing), _) if existing == settings => return Ok(existing),
            (_, Some(id)) => {
                let mut active = ActiveModel {
                    id: ActiveValue::Unchanged(id),
                    ..Default::default()
                };
                active.assign(settings);
                let model = active.update(&self.db).await?;
                tracing::debug!(user_id, id, "user settings updated");
                model
            }
            (_, None) => {
                let mut active = <ActiveModel as Default>::default();
                active.assign(settings);
                let model = active.insert(&self.db).await?;
                tracing::debug!(user_id, id = model.id, "user settings created");
                model
            }
        };

        Ok(UserSettings::from(model))
    }
}
