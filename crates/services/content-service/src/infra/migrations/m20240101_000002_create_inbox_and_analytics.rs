//! Migration: Create the contact inbox and the visit log.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Contacts::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Contacts::Id).integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(Contacts::Name).string().not_null())
                    .col(ColumnDef::new(Contacts::Email).string().not_null())
                    .col(ColumnDef::new(Contacts::Phone).string().null())
                    .col(ColumnDef::new(Contacts::Subject).string().null())
                    .col(ColumnDef::new(Contacts::Message).text().not_null())
                    .col(ColumnDef::new(Contacts::Status).string().not_null().default("new"))
                    .col(ColumnDef::new(Contacts::IsRead).boolean().not_null().default(false))
                    .col(ColumnDef::new(Contacts::ReadAt).timestamp_with_time_zone().null())
                    .col(ColumnDef::new(Contacts::CreatedAt).timestamp_with_time_zone().not_null())
                    .col(ColumnDef::new(Contacts::UpdatedAt).timestamp_with_time_zone().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_contacts_is_read")
                    .table(Contacts::Table)
                    .col(Contacts::IsRead)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Analytics::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Analytics::Id).integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(Analytics::VisitorIp).string().not_null())
                    .col(ColumnDef::new(Analytics::UserAgent).text().null())
                    .col(ColumnDef::new(Analytics::PageUrl).text().not_null())
                    .col(ColumnDef::new(Analytics::Referrer).text().null())
                    .col(ColumnDef::new(Analytics::DeviceType).string().not_null())
                    .col(ColumnDef::new(Analytics::Browser).string().not_null())
                    .col(ColumnDef::new(Analytics::Os).string().not_null())
                    .col(ColumnDef::new(Analytics::Country).string().null())
                    .col(ColumnDef::new(Analytics::City).string().null())
                    .col(ColumnDef::new(Analytics::VisitedAt).timestamp_with_time_zone().not_null())
                    .col(ColumnDef::new(Analytics::CreatedAt).timestamp_with_time_zone().not_null())
                    .to_owned(),
            )
            .await?;

        // Every aggregate filters on the visit window
        manager
            .create_index(
                Index::create()
                    .name("idx_analytics_visited_at")
                    .table(Analytics::Table)
                    .col(Analytics::VisitedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Analytics::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Contacts::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Contacts {
    Table,
    Id,
    Name,
    Email,
    Phone,
    Subject,
    Message,
    Status,
    IsRead,
    ReadAt,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Analytics {
    Table,
    Id,
    VisitorIp,
    UserAgent,
    PageUrl,
    Referrer,
    DeviceType,
    Browser,
    Os,
    Country,
    City,
    VisitedAt,
    CreatedAt,
}
