//! Create `student` and `worker` tables migration.
//!
//! Both tables are owned by the directory side of the system. They are created
//! here only if missing so complaint lookups have something to resolve against.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Student::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Student::Id).string_len(32).not_null().primary_key())
                    .col(ColumnDef::new(Student::Name).string_len(256).not_null())
                    .col(ColumnDef::new(Student::RoomNumber).string_len(32).not_null())
                    .col(
                        ColumnDef::new(Student::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Worker::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Worker::Id).string_len(32).not_null().primary_key())
                    .col(ColumnDef::new(Worker::Name).string_len(256).not_null())
                    .col(
                        ColumnDef::new(Worker::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Worker::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Student::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Student {
    Table,
    Id,
    Name,
    RoomNumber,
    CreatedAt,
}

#[derive(Iden)]
enum Worker {
    Table,
    Id,
    Name,
    CreatedAt,
}
