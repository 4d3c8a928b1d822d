use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

fn timestamp_now<T: Iden + 'static>(col: T) -> ColumnDef {
    ColumnDef::new(col)
        .timestamp_with_time_zone()
        .not_null()
        .default(Expr::current_timestamp())
        .to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Users::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Users::Name).string().not_null())
                    .col(ColumnDef::new(Users::Email).string().not_null().unique_key())
                    .col(ColumnDef::new(Users::EmailVerifiedAt).timestamp_with_time_zone())
                    .col(ColumnDef::new(Users::Password).string().not_null())
                    .col(ColumnDef::new(Users::Gender).small_integer().not_null())
                    .col(
                        ColumnDef::new(Users::Blocked)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Users::Address).string())
                    .col(ColumnDef::new(Users::Mobile).string())
                    .col(ColumnDef::new(Users::Avatar).string())
                    .col(ColumnDef::new(Users::ProfileableType).string())
                    .col(ColumnDef::new(Users::ProfileableId).uuid())
                    .col(timestamp_now(Users::CreatedAt))
                    .col(timestamp_now(Users::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(Users::Table)
                    .col(Users::ProfileableType)
                    .col(Users::ProfileableId)
                    .name("uq_users_profileable")
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(StudentProfiles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StudentProfiles::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(StudentProfiles::FacultyId).uuid().not_null())
                    .col(
                        ColumnDef::new(StudentProfiles::AcademicYear)
                            .small_integer()
                            .not_null()
                            .default(1),
                    )
                    .col(timestamp_now(StudentProfiles::CreatedAt))
                    .col(timestamp_now(StudentProfiles::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .from(StudentProfiles::Table, StudentProfiles::FacultyId)
                            .to(Faculties::Table, Faculties::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ModeratorProfiles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ModeratorProfiles::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ModeratorProfiles::FacultyId).uuid().not_null())
                    .col(timestamp_now(ModeratorProfiles::CreatedAt))
                    .col(timestamp_now(ModeratorProfiles::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .from(ModeratorProfiles::Table, ModeratorProfiles::FacultyId)
                            .to(Faculties::Table, Faculties::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(AdminProfiles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AdminProfiles::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(timestamp_now(AdminProfiles::CreatedAt))
                    .col(timestamp_now(AdminProfiles::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AdminProfiles::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ModeratorProfiles::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(StudentProfiles::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
    Name,
    Email,
    EmailVerifiedAt,
    Password,
    Gender,
    Blocked,
    Address,
    Mobile,
    Avatar,
    ProfileableType,
    ProfileableId,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum StudentProfiles {
    Table,
    Id,
    FacultyId,
    AcademicYear,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum ModeratorProfiles {
    Table,
    Id,
    FacultyId,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum AdminProfiles {
    Table,
    Id,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Faculties {
    Table,
    Id,
}
