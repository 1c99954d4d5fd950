use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "people")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub height: Option<String>,
    pub mass: Option<String>,
    pub hair_color: Option<String>,
    pub skin_color: Option<String>,
    pub eye_color: Option<String>,
    pub birth_year: Option<String>,
    pub gender: Option<String>,
    pub description: Option<String>,
    pub photo_url: Option<String>,
    pub homeworld_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::planet::Entity",
        from = "Column::HomeworldId",
        to = "super::planet::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Homeworld,
    #[sea_orm(has_many = "super::user_person::Entity")]
    UserPerson,
}

impl Related<super::planet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Homeworld.def()
    }
}

impl Related<super::user_person::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserPerson.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        super::user_person::Relation::User.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::user_person::Relation::Person.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
