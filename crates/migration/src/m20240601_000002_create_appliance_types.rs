//! Create `appliance_types` table backing the autocomplete endpoint.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ApplianceTypes::Table)
                    .if_not_exists()
                    .col(pk_auto(ApplianceTypes::TypeId))
                    .col(string(ApplianceTypes::TypeName))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(ApplianceTypes::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum ApplianceTypes { Table, TypeId, TypeName }
