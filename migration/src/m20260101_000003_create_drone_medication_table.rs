use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260101_000001_create_drone_table::Drone,
    m20260101_000002_create_medication_table::Medication,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DroneMedication::Table)
                    .if_not_exists()
                    .col(pk_auto(DroneMedication::Id))
                    .col(integer(DroneMedication::DroneId))
                    .col(integer(DroneMedication::MedicationId))
                    .col(
                        timestamp(DroneMedication::LoadedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_drone_medication_drone_id")
                            .from(DroneMedication::Table, DroneMedication::DroneId)
                            .to(Drone::Table, Drone::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_drone_medication_medication_id")
                            .from(DroneMedication::Table, DroneMedication::MedicationId)
                            .to(Medication::Table, Medication::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_drone_medication_drone_id")
                    .table(DroneMedication::Table)
                    .col(DroneMedication::DroneId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DroneMedication::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum DroneMedication {
    Table,
    Id,
    DroneId,
    MedicationId,
    LoadedAt,
}
