use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "drone_battery_history")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub drone_id: i32,
    pub battery_level: i32,
    pub recorded_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::drone::Entity",
        from = "Column::DroneId",
        to = "super::drone::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Drone,
}

impl Related<super::drone::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Drone.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
