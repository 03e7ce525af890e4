mod support;

use sea_orm::Set;

use content_service_lib::repository::entities::user_settings;
use content_service_lib::repository::{UserSettingsRepository, UserSettingsStore, WriteRepository};
use domain::{
    DisplayPreferences, DisplayPreferencesUpdate, NotificationSettings, NotificationUpdate,
    PrivacyUpdate, ProfileSettings, ProfileUpdate, SecurityUpdate, SettingsPatch,
    SocialLinksUpdate, UserSettings,
};
use support::setup;

#[tokio::test]
async fn test_updater_materializes_defaults_for_new_user() {
    let store = UserSettingsStore::new(setup().await);
    assert!(store.get_by_user_id(7).await.unwrap().is_none());

    let settings = store
        .update_profile(
            7,
            ProfileUpdate {
                display_name: Some("Ada".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert!(settings.is_persisted());
    assert_eq!(settings.user_id, 7);
    assert_eq!(settings.profile.display_name.as_deref(), Some("Ada"));
    assert_eq!(settings.profile.bio, None);
    assert_eq!(settings.notifications, NotificationSettings::default());
    assert_eq!(settings.display, DisplayPreferences::default());

    let stored = store.get_by_user_id(7).await.unwrap().unwrap();
    assert_eq!(stored, settings);
}

#[tokio::test]
async fn test_empty_update_on_existing_record_is_a_noop() {
    let store = UserSettingsStore::new(setup().await);
    let before = store
        .update_display_preferences(
            3,
            DisplayPreferencesUpdate {
                theme: Some("dark".to_string()),
                items_per_page: Some(25),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let after = store
        .update_profile(3, ProfileUpdate::default())
        .await
        .unwrap();
    assert_eq!(after, before);
}

#[tokio::test]
async fn test_empty_update_for_new_user_stores_defaults() {
    let store = UserSettingsStore::new(setup().await);
    let created = store
        .update_privacy(11, PrivacyUpdate::default())
        .await
        .unwrap();

    let mut expected = UserSettings::defaults_for(11);
    expected.id = created.id;
    expected.created_at = created.created_at;
    expected.updated_at = created.updated_at;
    assert_eq!(created, expected);
}

#[tokio::test]
async fn test_category_updates_preserve_other_fields() {
    let store = UserSettingsStore::new(setup().await);
    store
        .update_profile(
            5,
            ProfileUpdate {
                display_name: Some("Grace".to_string()),
                bio: Some("Rear admiral".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    store
        .update_social_media(
            5,
            SocialLinksUpdate {
                github: Some("grace".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    store
        .update_notifications(
            5,
            NotificationUpdate {
                weekly_digest: Some(true),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    let settings = store
        .update_security(
            5,
            SecurityUpdate {
                two_factor_enabled: Some(true),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(
        settings.profile,
        ProfileSettings {
            display_name: Some("Grace".to_string()),
            bio: Some("Rear admiral".to_string()),
            ..Default::default()
        }
    );
    assert_eq!(settings.social.github.as_deref(), Some("grace"));
    assert!(settings.notifications.weekly_digest);
    assert!(settings.notifications.email_notifications);
    assert!(settings.security.two_factor_enabled);
    assert_eq!(settings.security.session_timeout_minutes, 120);

    let partial = store
        .update_profile(
            5,
            ProfileUpdate {
                bio: Some("Computer scientist".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(partial.profile.display_name.as_deref(), Some("Grace"));
    assert_eq!(partial.profile.bio.as_deref(), Some("Computer scientist"));
    assert_eq!(partial.id, settings.id);
}

#[tokio::test]
async fn test_create_or_update_applies_every_category() {
    let store = UserSettingsStore::new(setup().await);
    let patch = SettingsPatch {
        profile: ProfileUpdate {
            location: Some("Lisbon".to_string()),
            ..Default::default()
        },
        display: DisplayPreferencesUpdate {
            compact_mode: Some(true),
            ..Default::default()
        },
        ..Default::default()
    };

    let settings = store.create_or_update(9, patch).await.unwrap();
    assert_eq!(settings.profile.location.as_deref(), Some("Lisbon"));
    assert!(settings.display.compact_mode);
    assert_eq!(settings.display.theme, "light");
}

#[tokio::test]
async fn test_second_row_for_same_user_violates_uniqueness() {
    let store = UserSettingsStore::new(setup().await);
    store
        .update_profile(2, ProfileUpdate::default())
        .await
        .unwrap();

    let mut duplicate = user_settings::ActiveModel::default();
    duplicate.assign(UserSettings::defaults_for(2));
    let err = store.create(duplicate).await.unwrap_err();
    assert!(err.is_unique_violation());

    // The updaters keep targeting the single stored row
    let settings = store
        .update_profile(
            2,
            ProfileUpdate {
                phone: Some("555-0100".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(settings.profile.phone.as_deref(), Some("555-0100"));

    let mut direct = user_settings::ActiveModel::default();
    direct.assign(UserSettings::defaults_for(3));
    direct.theme = Set("dark".to_string());
    let created = store.create(direct).await.unwrap();
    assert_eq!(created.display.theme, "dark");
}
