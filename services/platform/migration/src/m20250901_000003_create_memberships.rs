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
                    .table(DepartmentFacultyUsers::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(DepartmentFacultyUsers::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(DepartmentFacultyUsers::DepartmentFacultyId)
                            .uuid()
                            .not_null(),
                    )
                    .col(timestamp_now(DepartmentFacultyUsers::CreatedAt))
                    .col(timestamp_now(DepartmentFacultyUsers::UpdatedAt))
                    .primary_key(
                        Index::create()
                            .col(DepartmentFacultyUsers::UserId)
                            .col(DepartmentFacultyUsers::DepartmentFacultyId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(DepartmentFacultyUsers::Table, DepartmentFacultyUsers::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(
                                DepartmentFacultyUsers::Table,
                                DepartmentFacultyUsers::DepartmentFacultyId,
                            )
                            .to(DepartmentFaculties::Table, DepartmentFaculties::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CourseDepartmentFacultyUsers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CourseDepartmentFacultyUsers::UserId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CourseDepartmentFacultyUsers::CourseDepartmentFacultyId)
                            .uuid()
                            .not_null(),
                    )
                    .col(timestamp_now(CourseDepartmentFacultyUsers::CreatedAt))
                    .col(timestamp_now(CourseDepartmentFacultyUsers::UpdatedAt))
                    .primary_key(
                        Index::create()
                            .col(CourseDepartmentFacultyUsers::UserId)
                            .col(CourseDepartmentFacultyUsers::CourseDepartmentFacultyId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(
                                CourseDepartmentFacultyUsers::Table,
                                CourseDepartmentFacultyUsers::UserId,
                            )
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(
                                CourseDepartmentFacultyUsers::Table,
                                CourseDepartmentFacultyUsers::CourseDepartmentFacultyId,
                            )
                            .to(CourseDepartmentFaculties::Table, CourseDepartmentFaculties::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(CourseDepartmentFacultyUsers::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(DepartmentFacultyUsers::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum DepartmentFacultyUsers {
    Table,
    UserId,
    DepartmentFacultyId,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum CourseDepartmentFacultyUsers {
    Table,
    UserId,
    CourseDepartmentFacultyId,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}

#[derive(Iden)]
enum DepartmentFaculties {
    Table,
    Id,
}

#[derive(Iden)]
enum CourseDepartmentFaculties {
    Table,
    Id,
}
