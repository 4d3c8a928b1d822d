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

// User-owned rows restrict deletion of the author; the user cascade removes them explicitly.
fn authored_by<T: Iden + 'static>(table: T, col: impl Iden + 'static) -> ForeignKeyCreateStatement {
    ForeignKey::create()
        .from(table, col)
        .to(Users::Table, Users::Id)
        .on_delete(ForeignKeyAction::Restrict)
        .to_owned()
}

async fn index_on<T, C>(manager: &SchemaManager<'_>, name: &str, table: T, col: C) -> Result<(), DbErr>
where
    T: Iden + 'static,
    C: Iden + 'static,
{
    manager
        .create_index(Index::create().name(name).table(table).col(col).to_owned())
        .await
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Posts::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Posts::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Posts::UserId).uuid().not_null())
                    .col(ColumnDef::new(Posts::Body).text().not_null())
                    .col(ColumnDef::new(Posts::Image).string())
                    .col(timestamp_now(Posts::CreatedAt))
                    .col(timestamp_now(Posts::UpdatedAt))
                    .foreign_key(&mut authored_by(Posts::Table, Posts::UserId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Events::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Events::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Events::UserId).uuid().not_null())
                    .col(ColumnDef::new(Events::Title).string().not_null())
                    .col(ColumnDef::new(Events::Description).text().not_null())
                    .col(ColumnDef::new(Events::Cover).string())
                    .col(
                        ColumnDef::new(Events::StartsAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(timestamp_now(Events::CreatedAt))
                    .col(timestamp_now(Events::UpdatedAt))
                    .foreign_key(&mut authored_by(Events::Table, Events::UserId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Questions::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Questions::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Questions::UserId).uuid().not_null())
                    .col(ColumnDef::new(Questions::Title).string().not_null())
                    .col(ColumnDef::new(Questions::Body).text().not_null())
                    .col(timestamp_now(Questions::CreatedAt))
                    .col(timestamp_now(Questions::UpdatedAt))
                    .foreign_key(&mut authored_by(Questions::Table, Questions::UserId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Tags::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Tags::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Tags::Name).string().not_null().unique_key())
                    .col(timestamp_now(Tags::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(QuestionTags::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(QuestionTags::QuestionId).uuid().not_null())
                    .col(ColumnDef::new(QuestionTags::TagId).uuid().not_null())
                    .col(timestamp_now(QuestionTags::CreatedAt))
                    .col(timestamp_now(QuestionTags::UpdatedAt))
                    .primary_key(
                        Index::create()
                            .col(QuestionTags::QuestionId)
                            .col(QuestionTags::TagId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(QuestionTags::Table, QuestionTags::QuestionId)
                            .to(Questions::Table, Questions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(QuestionTags::Table, QuestionTags::TagId)
                            .to(Tags::Table, Tags::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Tools::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Tools::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Tools::UserId).uuid().not_null())
                    .col(ColumnDef::new(Tools::Name).string().not_null())
                    .col(ColumnDef::new(Tools::Description).text())
                    .col(ColumnDef::new(Tools::File).string())
                    .col(timestamp_now(Tools::CreatedAt))
                    .col(timestamp_now(Tools::UpdatedAt))
                    .foreign_key(&mut authored_by(Tools::Table, Tools::UserId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Comments::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Comments::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Comments::UserId).uuid().not_null())
                    .col(ColumnDef::new(Comments::PostId).uuid())
                    .col(ColumnDef::new(Comments::QuestionId).uuid())
                    .col(ColumnDef::new(Comments::Body).text().not_null())
                    .col(timestamp_now(Comments::CreatedAt))
                    .col(timestamp_now(Comments::UpdatedAt))
                    .foreign_key(&mut authored_by(Comments::Table, Comments::UserId))
                    .foreign_key(
                        ForeignKey::create()
                            .from(Comments::Table, Comments::PostId)
                            .to(Posts::Table, Posts::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Comments::Table, Comments::QuestionId)
                            .to(Questions::Table, Questions::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CoursePosts::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(CoursePosts::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(CoursePosts::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(CoursePosts::CourseDepartmentFacultyId)
                            .uuid()
                            .not_null(),
                    )
                    .col(ColumnDef::new(CoursePosts::Body).text().not_null())
                    .col(timestamp_now(CoursePosts::CreatedAt))
                    .col(timestamp_now(CoursePosts::UpdatedAt))
                    .foreign_key(&mut authored_by(CoursePosts::Table, CoursePosts::UserId))
                    .foreign_key(
                        ForeignKey::create()
                            .from(CoursePosts::Table, CoursePosts::CourseDepartmentFacultyId)
                            .to(CourseDepartmentFaculties::Table, CourseDepartmentFaculties::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        index_on(manager, "idx_posts_user_id", Posts::Table, Posts::UserId).await?;
        index_on(manager, "idx_events_user_id", Events::Table, Events::UserId).await?;
        index_on(manager, "idx_questions_user_id", Questions::Table, Questions::UserId).await?;
        index_on(manager, "idx_tools_user_id", Tools::Table, Tools::UserId).await?;
        index_on(manager, "idx_comments_user_id", Comments::Table, Comments::UserId).await?;
        index_on(manager, "idx_comments_post_id", Comments::Table, Comments::PostId).await?;
        index_on(
            manager,
            "idx_comments_question_id",
            Comments::Table,
            Comments::QuestionId,
        )
        .await?;
        index_on(
            manager,
            "idx_course_posts_user_id",
            CoursePosts::Table,
            CoursePosts::UserId,
        )
        .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CoursePosts::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Comments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Tools::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(QuestionTags::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Tags::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Questions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Events::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Posts::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Posts {
    Table,
    Id,
    UserId,
    Body,
    Image,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Events {
    Table,
    Id,
    UserId,
    Title,
    Description,
    Cover,
    StartsAt,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Questions {
    Table,
    Id,
    UserId,
    Title,
    Body,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Tags {
    Table,
    Id,
    Name,
    CreatedAt,
}

#[derive(Iden)]
enum QuestionTags {
    Table,
    QuestionId,
    TagId,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Tools {
    Table,
    Id,
    UserId,
    Name,
    Description,
    File,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Comments {
    Table,
    Id,
    UserId,
    PostId,
    QuestionId,
    Body,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum CoursePosts {
    Table,
    Id,
    UserId,
    CourseDepartmentFacultyId,
    Body,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}

#[derive(Iden)]
enum CourseDepartmentFaculties {
    Table,
    Id,
}
