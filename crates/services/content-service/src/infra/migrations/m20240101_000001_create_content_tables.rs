//! Migration: Create the portfolio content tables.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Clients::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Clients::Id).integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(Clients::Name).string().not_null())
                    .col(ColumnDef::new(Clients::Email).string().null().unique_key())
                    .col(ColumnDef::new(Clients::Company).string().null())
                    .col(ColumnDef::new(Clients::Phone).string().null())
                    .col(ColumnDef::new(Clients::Website).string().null())
                    .col(ColumnDef::new(Clients::LogoUrl).string().null())
                    .col(ColumnDef::new(Clients::Industry).string().null())
                    .col(ColumnDef::new(Clients::IsActive).boolean().not_null().default(true))
                    .col(ColumnDef::new(Clients::CreatedAt).timestamp_with_time_zone().not_null())
                    .col(ColumnDef::new(Clients::UpdatedAt).timestamp_with_time_zone().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Projects::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Projects::Id).integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(Projects::Title).string().not_null())
                    .col(ColumnDef::new(Projects::Slug).string().not_null().unique_key())
                    .col(ColumnDef::new(Projects::Description).text().not_null())
                    .col(ColumnDef::new(Projects::Content).text().null())
                    .col(ColumnDef::new(Projects::Category).string().not_null())
                    .col(ColumnDef::new(Projects::Technologies).text().not_null())
                    .col(ColumnDef::new(Projects::ImageUrl).string().null())
                    .col(ColumnDef::new(Projects::ProjectUrl).string().null())
                    .col(ColumnDef::new(Projects::GithubUrl).string().null())
                    .col(ColumnDef::new(Projects::ClientId).integer().null())
                    .col(ColumnDef::new(Projects::Status).string().not_null().default("draft"))
                    .col(ColumnDef::new(Projects::Featured).boolean().not_null().default(false))
                    .col(ColumnDef::new(Projects::PublishedAt).timestamp_with_time_zone().null())
                    .col(ColumnDef::new(Projects::CreatedAt).timestamp_with_time_zone().not_null())
                    .col(ColumnDef::new(Projects::UpdatedAt).timestamp_with_time_zone().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_projects_client_id")
                            .from(Projects::Table, Projects::ClientId)
                            .to(Clients::Table, Clients::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_projects_status")
                    .table(Projects::Table)
                    .col(Projects::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(BlogPosts::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(BlogPosts::Id).integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(BlogPosts::Title).string().not_null())
                    .col(ColumnDef::new(BlogPosts::Slug).string().not_null().unique_key())
                    .col(ColumnDef::new(BlogPosts::Excerpt).text().null())
                    .col(ColumnDef::new(BlogPosts::Content).text().not_null())
                    .col(ColumnDef::new(BlogPosts::FeaturedImage).string().null())
                    .col(ColumnDef::new(BlogPosts::Category).string().null())
                    .col(ColumnDef::new(BlogPosts::Tags).string().null())
                    .col(ColumnDef::new(BlogPosts::Author).string().null())
                    .col(ColumnDef::new(BlogPosts::Status).string().not_null().default("draft"))
                    .col(ColumnDef::new(BlogPosts::PublishedAt).timestamp_with_time_zone().null())
                    .col(ColumnDef::new(BlogPosts::CreatedAt).timestamp_with_time_zone().not_null())
                    .col(ColumnDef::new(BlogPosts::UpdatedAt).timestamp_with_time_zone().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Services::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Services::Id).integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(Services::Title).string().not_null())
                    .col(ColumnDef::new(Services::Slug).string().not_null().unique_key())
                    .col(ColumnDef::new(Services::Description).text().not_null())
                    .col(ColumnDef::new(Services::Icon).string().null())
                    .col(ColumnDef::new(Services::Features).text().null())
                    .col(ColumnDef::new(Services::PriceRange).string().null())
                    .col(ColumnDef::new(Services::SortOrder).integer().not_null().default(0))
                    .col(ColumnDef::new(Services::IsActive).boolean().not_null().default(true))
                    .col(ColumnDef::new(Services::CreatedAt).timestamp_with_time_zone().not_null())
                    .col(ColumnDef::new(Services::UpdatedAt).timestamp_with_time_zone().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TeamMembers::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(TeamMembers::Id).integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(TeamMembers::Name).string().not_null())
                    .col(ColumnDef::new(TeamMembers::Slug).string().not_null().unique_key())
                    .col(ColumnDef::new(TeamMembers::Position).string().not_null())
                    .col(ColumnDef::new(TeamMembers::Bio).text().null())
                    .col(ColumnDef::new(TeamMembers::Email).string().null())
                    .col(ColumnDef::new(TeamMembers::PhotoUrl).string().null())
                    .col(ColumnDef::new(TeamMembers::LinkedinUrl).string().null())
                    .col(ColumnDef::new(TeamMembers::GithubUrl).string().null())
                    .col(ColumnDef::new(TeamMembers::SortOrder).integer().not_null().default(0))
                    .col(ColumnDef::new(TeamMembers::IsActive).boolean().not_null().default(true))
                    .col(ColumnDef::new(TeamMembers::CreatedAt).timestamp_with_time_zone().not_null())
                    .col(ColumnDef::new(TeamMembers::UpdatedAt).timestamp_with_time_zone().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Testimonials::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Testimonials::Id).integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(Testimonials::ClientName).string().not_null())
                    .col(ColumnDef::new(Testimonials::ClientPosition).string().null())
                    .col(ColumnDef::new(Testimonials::ClientCompany).string().null())
                    .col(ColumnDef::new(Testimonials::Content).text().not_null())
                    .col(ColumnDef::new(Testimonials::Rating).integer().not_null().default(5))
                    .col(ColumnDef::new(Testimonials::AvatarUrl).string().null())
                    .col(ColumnDef::new(Testimonials::ClientId).integer().null())
                    .col(ColumnDef::new(Testimonials::IsFeatured).boolean().not_null().default(false))
                    .col(ColumnDef::new(Testimonials::IsPublished).boolean().not_null().default(true))
                    .col(ColumnDef::new(Testimonials::CreatedAt).timestamp_with_time_zone().not_null())
                    .col(ColumnDef::new(Testimonials::UpdatedAt).timestamp_with_time_zone().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_testimonials_client_id")
                            .from(Testimonials::Table, Testimonials::ClientId)
                            .to(Clients::Table, Clients::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Testimonials::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TeamMembers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Services::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(BlogPosts::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Projects::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Clients::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Clients {
    Table,
    Id,
    Name,
    Email,
    Company,
    Phone,
    Website,
    LogoUrl,
    Industry,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Projects {
    Table,
    Id,
    Title,
    Slug,
    Description,
    Content,
    Category,
    Technologies,
    ImageUrl,
    ProjectUrl,
    GithubUrl,
    ClientId,
    Status,
    Featured,
    PublishedAt,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum BlogPosts {
    Table,
    Id,
    Title,
    Slug,
    Excerpt,
    Content,
    FeaturedImage,
    Category,
    Tags,
    Author,
    Status,
    PublishedAt,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Services {
    Table,
    Id,
    Title,
    Slug,
    Description,
    Icon,
    Features,
    PriceRange,
    SortOrder,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum TeamMembers {
    Table,
    Id,
    Name,
    Slug,
    Position,
    Bio,
    Email,
    PhotoUrl,
    LinkedinUrl,
    GithubUrl,
    SortOrder,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Testimonials {
    Table,
    Id,
    ClientName,
    ClientPosition,
    ClientCompany,
    Content,
    Rating,
    AvatarUrl,
    ClientId,
    IsFeatured,
    IsPublished,
    CreatedAt,
    UpdatedAt,
}
