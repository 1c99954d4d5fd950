use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    #[sea_orm(unique)]
    pub username: String,
    #[sea_orm(unique)]
    pub email: String,
    /// Stored as submitted, never serialized
    pub password: String,
    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user_person::Entity")]
    UserPerson,
    #[sea_orm(has_many = "super::user_planet::Entity")]
    UserPlanet,
    #[sea_orm(has_many = "super::user_vehicle::Entity")]
    UserVehicle,
}

impl Related<super::user_person::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserPerson.def()
    }
}

impl Related<super::user_planet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserPlanet.def()
    }
}

impl Related<super::user_vehicle::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserVehicle.def()
    }
}

impl Related<super::person::Entity> for Entity {
    fn to() -> RelationDef {
        super::user_person::Relation::Person.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::user_person::Relation::User.def().rev())
    }
}

impl Related<super::planet::Entity> for Entity {
    fn to() -> RelationDef {
        super::user_planet::Relation::Planet.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::user_planet::Relation::User.def().rev())
    }
}

impl Related<super::vehicle::Entity> for Entity {
    fn to() -> RelationDef {
        super::user_vehicle::Relation::Vehicle.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::user_vehicle::Relation::User.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
