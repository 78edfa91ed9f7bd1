//! Create complaint table migration.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Complaint::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Complaint::Id).string_len(32).not_null().primary_key())
                    .col(ColumnDef::new(Complaint::Description).text().not_null())
                    .col(ColumnDef::new(Complaint::Image).text().not_null().default(""))
                    .col(ColumnDef::new(Complaint::Category).string_len(128).not_null())
                    .col(ColumnDef::new(Complaint::StudentId).string_len(32).not_null())
                    .col(ColumnDef::new(Complaint::StudentName).string_len(256).not_null())
                    .col(ColumnDef::new(Complaint::RoomNumber).string_len(32).not_null())
                    .col(
                        ColumnDef::new(Complaint::Status)
                            .string_len(16)
                            .not_null()
                            .default("pending"),
                    )
                    .col(ColumnDef::new(Complaint::WardenComments).text().not_null().default(""))
                    .col(ColumnDef::new(Complaint::AssignedWorkerId).string_len(32))
                    .col(ColumnDef::new(Complaint::AssignedWorkerName).string_len(256))
                    .col(
                        ColumnDef::new(Complaint::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Complaint::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Index: student_id (per-student listing)
        manager
            .create_index(
                Index::create()
                    .name("idx_complaint_student_id")
                    .table(Complaint::Table)
                    .col(Complaint::StudentId)
                    .to_owned(),
            )
            .await?;

        // Index: created_at (newest-first listing)
        manager
            .create_index(
                Index::create()
                    .name("idx_complaint_created_at")
                    .table(Complaint::Table)
                    .col(Complaint::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Complaint::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Complaint {
    Table,
    Id,
    Description,
    Image,
    Category,
    StudentId,
    StudentName,
    RoomNumber,
    Status,
    WardenComments,
    AssignedWorkerId,
    AssignedWorkerName,
    CreatedAt,
    UpdatedAt,
}
