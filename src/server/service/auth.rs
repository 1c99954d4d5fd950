use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, Error},
    model::auth::JwtKeys,
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    jwt: &'a JwtKeys,
}

impl<'a> AuthService<'a> {
    /// Creates a new instance of [`AuthService`]
    pub fn new(db: &'a DatabaseConnection, jwt: &'a JwtKeys) -> Self {
        Self { db, jwt }
    }

    /// Checks submitted credentials against the stored user and issues an access token
    ///
    /// Missing fields are treated like a wrong username or password. Passwords are stored
    /// and compared in plaintext.
    ///
    /// # Returns
    /// - `Ok(String)` - Signed access token with the username as subject
    /// - `Err(Error::AuthError(AuthError::InvalidCredentials))` - Unknown user or wrong password
    /// - `Err(Error::DbErr)` - Database operation failed
    /// - `Err(Error::JwtError)` - Token could not be signed
    pub async fn login(
        &self,
        username: Option<&str>,
        password: Option<&str>,
    ) -> Result<String, Error> {
        let (Some(username), Some(password)) = (username, password) else {
            return Err(AuthError::InvalidCredentials.into());
        };

        let Some(user) = UserRepository::new(self.db)
            .find_by_username(username)
            .await?
        else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if user.password != password {
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = self.jwt.issue(&user.username)?;

        tracing::info!(user_id = %user.id, "Issued access token");

        Ok(token)
    }
}
