//! Create `pizza` table.
//!
//! `name` carries no unique constraint: duplicate menu entries are allowed
//! and lookups return the first match.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Pizza::Table)
                    .if_not_exists()
                    .col(pk_auto(Pizza::Id))
                    .col(string_len(Pizza::Name, 64).not_null())
                    .col(integer(Pizza::Price).not_null())
                    .col(boolean(Pizza::Vegan).not_null())
                    .col(timestamp_with_time_zone(Pizza::CreatedOn).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Pizza::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Pizza { Table, Id, Name, Price, Vegan, CreatedOn }
