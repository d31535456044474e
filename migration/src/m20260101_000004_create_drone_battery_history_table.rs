use sea_orm_migration::{prelude::*, schema::*};

use super::m20260101_000001_create_drone_table::Drone;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DroneBatteryHistory::Table)
                    .if_not_exists()
                    .col(pk_auto(DroneBatteryHistory::Id))
                    .col(integer(DroneBatteryHistory::DroneId))
                    .col(integer(DroneBatteryHistory::BatteryLevel))
                    .col(timestamp(DroneBatteryHistory::RecordedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_drone_battery_history_drone_id")
                            .from(DroneBatteryHistory::Table, DroneBatteryHistory::DroneId)
                            .to(Drone::Table, Drone::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DroneBatteryHistory::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum DroneBatteryHistory {
    Table,
    Id,
    DroneId,
    BatteryLevel,
    RecordedAt,
}
