use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "drone")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub serial_number: String,
    pub model: String,
    pub weight_limit: i32,
    pub battery_capacity: i32,
    pub state: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::drone_medication::Entity")]
    DroneMedication,
    #[sea_orm(has_many = "super::drone_battery_history::Entity")]
    DroneBatteryHistory,
}

impl Related<super::drone_medication::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DroneMedication.def()
    }
}

impl Related<super::drone_battery_history::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DroneBatteryHistory.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
