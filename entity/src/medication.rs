use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "medication")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub weight: i32,
    #[sea_orm(unique)]
    pub code: String,
    pub image_url: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::drone_medication::Entity")]
    DroneMedication,
}

impl Related<super::drone_medication::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DroneMedication.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
