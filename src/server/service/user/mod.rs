//! User service layer.
//!
//! Builds the public view of users, which embeds each user's favorite people, planets
//! and vehicles, and adds new favorites.

#[cfg(test)]
mod tests;

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    model::user::UserDto,
    server::{
        data::{
            favorite::FavoriteRepository, person::PersonRepository, planet::PlanetRepository,
            user::UserRepository, vehicle::VehicleRepository,
        },
        error::{request::RequestError, Error},
        model::{db::UserModel, favorite::FavoriteKind},
        service::catalog::{person_dto, planet_dto, vehicle_dto},
    },
};

/// Result of adding a favorite to a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteOutcome {
    /// A new favorite was stored
    Added,
    /// The user already had this favorite, nothing changed
    AlreadyPresent,
    /// The resource type was not recognized, nothing changed
    UnknownKind,
}

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of [`UserService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every user along with their favorites, ordered by ID
    pub async fn get_users(&self) -> Result<Vec<UserDto>, Error> {
        let users = UserRepository::new(self.db).get_all().await?;

        let mut user_dtos = Vec::with_capacity(users.len());
        for user in users {
            user_dtos.push(user_dto(self.db, user).await?);
        }

        Ok(user_dtos)
    }

    /// Gets a single user along with their favorites
    ///
    /// # Returns
    /// - `Ok(Some(UserDto))` - User found
    /// - `Ok(None)` - User not found in database
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_user(&self, user_id: i32) -> Result<Option<UserDto>, Error> {
        match UserRepository::new(self.db).get_by_id(user_id).await? {
            Some(user) => Ok(Some(user_dto(self.db, user).await?)),
            None => Ok(None),
        }
    }

    /// Adds a person, planet or vehicle to the favorites of a user
    ///
    /// A `kind` of `None` stands for an unrecognized resource type and adds nothing,
    /// the user is still looked up and returned. The existence checks and the insert run
    /// in one transaction.
    ///
    /// # Returns
    /// - `Ok((FavoriteOutcome, UserDto))` - Outcome and the user's refreshed view
    /// - `Err(Error::RequestError(RequestError::UserNotFound))` - No user with `user_id`
    /// - `Err(Error::RequestError(RequestError::ResourceNotFound))` - No resource with `resource_id`
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn add_favorite(
        &self,
        user_id: i32,
        resource_id: i32,
        kind: Option<FavoriteKind>,
    ) -> Result<(FavoriteOutcome, UserDto), Error> {
        let txn = self.db.begin().await?;

        let user = UserRepository::new(&txn)
            .get_by_id(user_id)
            .await?
            .ok_or(RequestError::UserNotFound(user_id))?;

        let outcome = match kind {
            None => FavoriteOutcome::UnknownKind,
            Some(kind) => {
                ensure_resource_exists(&txn, kind, resource_id).await?;

                let favorite_repo = FavoriteRepository::new(&txn);
                let added = match kind {
                    FavoriteKind::Person => favorite_repo.add_person(user.id, resource_id).await?,
                    FavoriteKind::Planet => favorite_repo.add_planet(user.id, resource_id).await?,
                    FavoriteKind::Vehicle => {
                        favorite_repo.add_vehicle(user.id, resource_id).await?
                    }
                };

                if added {
                    FavoriteOutcome::Added
                } else {
                    FavoriteOutcome::AlreadyPresent
                }
            }
        };

        txn.commit().await?;

        tracing::debug!(
            user_id = %user.id,
            resource_id = %resource_id,
            kind = ?kind,
            outcome = ?outcome,
            "Processed favorite for user"
        );

        Ok((outcome, user_dto(self.db, user).await?))
    }
}

async fn ensure_resource_exists<C: ConnectionTrait>(
    db: &C,
    kind: FavoriteKind,
    resource_id: i32,
) -> Result<(), Error> {
    let exists = match kind {
        FavoriteKind::Person => PersonRepository::new(db)
            .get_by_id(resource_id)
            .await?
            .is_some(),
        FavoriteKind::Planet => PlanetRepository::new(db)
            .get_by_id(resource_id)
            .await?
            .is_some(),
        FavoriteKind::Vehicle => VehicleRepository::new(db)
            .get_by_id(resource_id)
            .await?
            .is_some(),
    };

    if !exists {
        return Err(RequestError::ResourceNotFound {
            kind: kind.as_str(),
            id: resource_id,
        }
        .into());
    }

    Ok(())
}

/// Public view of a user, loading their favorites. The password is dropped here.
async fn user_dto<C: ConnectionTrait>(db: &C, user: UserModel) -> Result<UserDto, Error> {
    let characters = PersonRepository::new(db)
        .get_favorites_of_user(user.id)
        .await?
        .into_iter()
        .map(|(person, homeworld)| person_dto(person, homeworld))
        .collect();
    let planets = PlanetRepository::new(db)
        .get_favorites_of_user(user.id)
        .await?
        .into_iter()
        .map(planet_dto)
        .collect();
    let vehicles = VehicleRepository::new(db)
        .get_favorites_of_user(user.id)
        .await?
        .into_iter()
        .map(vehicle_dto)
        .collect();

    Ok(UserDto {
        id: user.id,
        name: user.name,
        username: user.username,
        email: user.email,
        is_active: user.is_active,
        characters,
        planets,
        vehicles,
    })
}
