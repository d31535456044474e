use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Drone::Table)
                    .if_not_exists()
                    .col(pk_auto(Drone::Id))
                    .col(string_len_uniq(Drone::SerialNumber, 100))
                    .col(string(Drone::Model))
                    .col(integer(Drone::WeightLimit))
                    .col(integer(Drone::BatteryCapacity))
                    .col(string(Drone::State))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_drone_state")
                    .table(Drone::Table)
                    .col(Drone::State)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Drone::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Drone {
    Table,
    Id,
    SerialNumber,
    Model,
    WeightLimit,
    BatteryCapacity,
    State,
}
