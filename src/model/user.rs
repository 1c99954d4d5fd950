use serde::{Deserialize, Serialize};

use crate::model::catalog::{PersonDto, PlanetDto, VehicleDto};

/// Public view of a user along with their favorites
///
/// The stored password is never part of this view.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub name: String,
    pub username: String,
    pub email: String,
    pub is_active: bool,
    /// Favorite people
    pub characters: Vec<PersonDto>,
    pub planets: Vec<PlanetDto>,
    pub vehicles: Vec<VehicleDto>,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserListDto {
    pub msg: String,
    pub users: Vec<UserDto>,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserResponseDto {
    pub msg: String,
    pub user: UserDto,
}

/// Body of `PUT /user`, adding a favorite to a user
///
/// Fields are optional so a missing one is reported as a 400 naming the field.
#[derive(Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AddFavoriteDto {
    pub user_id: Option<i32>,
    /// ID of the person, planet or vehicle to add
    pub id: Option<i32>,
    /// One of `person` (or `character`), `planet` or `vehicle`
    #[serde(rename = "type")]
    pub kind: Option<String>,
}
