//! Migration: Create the per-user settings table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let optional = [
            UserSettings::DisplayName,
            UserSettings::AvatarUrl,
            UserSettings::Phone,
            UserSettings::Location,
            UserSettings::Website,
            UserSettings::Twitter,
            UserSettings::Linkedin,
            UserSettings::Github,
            UserSettings::Facebook,
            UserSettings::Instagram,
            UserSettings::Dribbble,
        ];
        let flags = [
            (UserSettings::EmailNotifications, true),
            (UserSettings::PushNotifications, true),
            (UserSettings::NewMessageAlerts, true),
            (UserSettings::ProjectUpdates, true),
            (UserSettings::WeeklyDigest, false),
            (UserSettings::MarketingEmails, false),
            (UserSettings::ProfilePublic, true),
            (UserSettings::ShowEmail, false),
            (UserSettings::ShowActivity, true),
            (UserSettings::AllowSearchIndexing, true),
            (UserSettings::CompactMode, false),
            (UserSettings::TwoFactorEnabled, false),
            (UserSettings::LoginAlerts, true),
        ];

        let mut table = Table::create();
        table
            .table(UserSettings::Table)
            .if_not_exists()
            .col(
                ColumnDef::new(UserSettings::Id)
                    .integer()
                    .not_null()
                    .auto_increment()
                    .primary_key(),
            )
            .col(ColumnDef::new(UserSettings::UserId).integer().not_null().unique_key())
            .col(ColumnDef::new(UserSettings::Bio).text().null());

        for column in optional {
            table.col(ColumnDef::new(column).string().null());
        }
        for (column, default) in flags {
            table.col(ColumnDef::new(column).boolean().not_null().default(default));
        }

        table
            .col(ColumnDef::new(UserSettings::Theme).string().not_null().default("light"))
            .col(ColumnDef::new(UserSettings::Language).string().not_null().default("en"))
            .col(ColumnDef::new(UserSettings::Timezone).string().not_null().default("UTC"))
            .col(ColumnDef::new(UserSettings::DateFormat).string().not_null().default("Y-m-d"))
            .col(ColumnDef::new(UserSettings::ItemsPerPage).integer().not_null().default(10))
            .col(
                ColumnDef::new(UserSettings::SessionTimeoutMinutes)
                    .integer()
                    .not_null()
                    .default(120),
            )
            .col(ColumnDef::new(UserSettings::CreatedAt).timestamp_with_time_zone().not_null())
            .col(ColumnDef::new(UserSettings::UpdatedAt).timestamp_with_time_zone().not_null());

        manager.create_table(table.to_owned()).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserSettings::Table).to_owned())
            .await
    }
}

#[derive(Iden, Clone, Copy)]
enum UserSettings {
    Table,
    Id,
    UserId,
    DisplayName,
    Bio,
    AvatarUrl,
    Phone,
    Location,
    Website,
    Twitter,
    Linkedin,
    Github,
    Facebook,
    Instagram,
    Dribbble,
    EmailNotifications,
    PushNotifications,
    NewMessageAlerts,
    ProjectUpdates,
    WeeklyDigest,
    MarketingEmails,
    ProfilePublic,
    ShowEmail,
    ShowActivity,
    AllowSearchIndexing,
    Theme,
    Language,
    Timezone,
    DateFormat,
    ItemsPerPage,
    CompactMode,
    TwoFactorEnabled,
    LoginAlerts,
    SessionTimeoutMinutes,
    CreatedAt,
    UpdatedAt,
}
