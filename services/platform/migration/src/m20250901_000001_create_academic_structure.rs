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
                    .table(Universities::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Universities::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(Universities::Name)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(timestamp_now(Universities::CreatedAt))
                    .col(timestamp_now(Universities::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Faculties::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Faculties::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Faculties::Name).string().not_null())
                    .col(ColumnDef::new(Faculties::UniversityId).uuid().not_null())
                    .col(timestamp_now(Faculties::CreatedAt))
                    .col(timestamp_now(Faculties::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .from(Faculties::Table, Faculties::UniversityId)
                            .to(Universities::Table, Universities::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Departments::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Departments::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Departments::Name).string().not_null())
                    .col(timestamp_now(Departments::CreatedAt))
                    .col(timestamp_now(Departments::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(DepartmentFaculties::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DepartmentFaculties::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(DepartmentFaculties::DepartmentId).uuid().not_null())
                    .col(ColumnDef::new(DepartmentFaculties::FacultyId).uuid().not_null())
                    .col(timestamp_now(DepartmentFaculties::CreatedAt))
                    .col(timestamp_now(DepartmentFaculties::UpdatedAt))
                    .index(
                        Index::create()
                            .name("uq_department_faculties_department_faculty")
                            .col(DepartmentFaculties::DepartmentId)
                            .col(DepartmentFaculties::FacultyId)
                            .unique(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(DepartmentFaculties::Table, DepartmentFaculties::DepartmentId)
                            .to(Departments::Table, Departments::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(DepartmentFaculties::Table, DepartmentFaculties::FacultyId)
                            .to(Faculties::Table, Faculties::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Courses::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Courses::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Courses::Name).string().not_null())
                    .col(ColumnDef::new(Courses::Code).string().not_null().unique_key())
                    .col(timestamp_now(Courses::CreatedAt))
                    .col(timestamp_now(Courses::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CourseDepartmentFaculties::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CourseDepartmentFaculties::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CourseDepartmentFaculties::CourseId).uuid().not_null())
                    .col(
                        ColumnDef::new(CourseDepartmentFaculties::DepartmentFacultyId)
                            .uuid()
                            .not_null(),
                    )
                    .col(timestamp_now(CourseDepartmentFaculties::CreatedAt))
                    .col(timestamp_now(CourseDepartmentFaculties::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .from(
                                CourseDepartmentFaculties::Table,
                                CourseDepartmentFaculties::CourseId,
                            )
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(
                                CourseDepartmentFaculties::Table,
                                CourseDepartmentFaculties::DepartmentFacultyId,
                            )
                            .to(DepartmentFaculties::Table, DepartmentFaculties::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CourseDepartmentFaculties::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Courses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(DepartmentFaculties::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Departments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Faculties::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Universities::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Universities {
    Table,
    Id,
    Name,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Faculties {
    Table,
    Id,
    Name,
    UniversityId,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Departments {
    Table,
    Id,
    Name,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum DepartmentFaculties {
    Table,
    Id,
    DepartmentId,
    FacultyId,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Courses {
    Table,
    Id,
    Name,
    Code,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum CourseDepartmentFaculties {
    Table,
    Id,
    CourseId,
    DepartmentFacultyId,
    CreatedAt,
    UpdatedAt,
}
