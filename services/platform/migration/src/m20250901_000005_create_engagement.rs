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
                    .table(Interests::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Interests::UserId).uuid().not_null())
                    .col(ColumnDef::new(Interests::EventId).uuid().not_null())
                    .col(timestamp_now(Interests::CreatedAt))
                    .col(timestamp_now(Interests::UpdatedAt))
                    .primary_key(
                        Index::create()
                            .col(Interests::UserId)
                            .col(Interests::EventId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Interests::Table, Interests::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Interests::Table, Interests::EventId)
                            .to(Events::Table, Events::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Rates::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Rates::UserId).uuid().not_null())
                    .col(ColumnDef::new(Rates::CommentId).uuid().not_null())
                    .col(ColumnDef::new(Rates::Rate).small_integer().not_null())
                    .col(timestamp_now(Rates::CreatedAt))
                    .col(timestamp_now(Rates::UpdatedAt))
                    .primary_key(Index::create().col(Rates::UserId).col(Rates::CommentId))
                    .check(Expr::col(Rates::Rate).between(1, 5))
                    .foreign_key(
                        ForeignKey::create()
                            .from(Rates::Table, Rates::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Rates::Table, Rates::CommentId)
                            .to(Comments::Table, Comments::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Messages::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Messages::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Messages::FromUserId).uuid().not_null())
                    .col(ColumnDef::new(Messages::ToUserId).uuid().not_null())
                    .col(ColumnDef::new(Messages::Body).text().not_null())
                    .col(ColumnDef::new(Messages::ReadAt).timestamp_with_time_zone())
                    .col(timestamp_now(Messages::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .from(Messages::Table, Messages::FromUserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Messages::Table, Messages::ToUserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_messages_to_user_id")
                    .table(Messages::Table)
                    .col(Messages::ToUserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Messages::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Rates::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Interests::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Interests {
    Table,
    UserId,
    EventId,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Rates {
    Table,
    UserId,
    CommentId,
    Rate,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Messages {
    Table,
    Id,
    FromUserId,
    ToUserId,
    Body,
    ReadAt,
    CreatedAt,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}

#[derive(Iden)]
enum Events {
    Table,
    Id,
}

#[derive(Iden)]
enum Comments {
    Table,
    Id,
}
