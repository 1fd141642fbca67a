//! Create `technicians` table.
//!
//! Rows are only written by the startup seeder; the identifier uses
//! AUTOINCREMENT so a value is never handed out twice.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Technicians::Table)
                    .if_not_exists()
                    .col(pk_auto(Technicians::TechnicianId))
                    .col(string(Technicians::Name))
                    .col(string(Technicians::Photo))
                    .col(string(Technicians::Specialization))
                    .col(double(Technicians::Rating))
                    .col(text(Technicians::Description))
                    .col(string(Technicians::Location))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Technicians::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Technicians { Table, TechnicianId, Name, Photo, Specialization, Rating, Description, Location }
