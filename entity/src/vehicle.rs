use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "vehicles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub model: String,
    pub vehicle_class: Option<String>,
    pub manufacturer: Option<String>,
    pub cost_in_credits: Option<String>,
    pub length: Option<String>,
    pub crew: Option<String>,
    pub passengers: Option<String>,
    pub max_atmosphering_speed: Option<String>,
    pub cargo_capacity: Option<String>,
    pub consumables: Option<String>,
    pub description: Option<String>,
    pub photo_url: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user_vehicle::Entity")]
    UserVehicle,
}

impl Related<super::user_vehicle::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserVehicle.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        super::user_vehicle::Relation::User.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::user_vehicle::Relation::Vehicle.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
