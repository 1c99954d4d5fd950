use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::server::error::{config::ConfigError, Error};

/// Claims carried by an access token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Username the token was issued to
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

/// HS256 keys used to issue and verify access tokens.
#[derive(Clone)]
pub struct JwtKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    expires_minutes: i64,
}

impl JwtKeys {
    pub fn new(secret: &str, expires_minutes: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            expires_minutes,
        }
    }

    /// Signs a new access token for the given username.
    ///
    /// # Returns
    /// - `Ok(String)` - Signed token
    /// - `Err(Error::ConfigError)` - The token lifetime overflows the supported date range
    /// - `Err(Error::JwtError)` - Signing failed
    pub fn issue(&self, username: &str) -> Result<String, Error> {
        let now = Utc::now();
        let expires_at = Duration::try_minutes(self.expires_minutes)
            .and_then(|lifetime| now.checked_add_signed(lifetime))
            .ok_or_else(|| ConfigError::InvalidEnvValue {
                var: "JWT_EXPIRES_MINUTES".to_string(),
                reason: format!(
                    "token lifetime of {} minutes is out of range",
                    self.expires_minutes
                ),
            })?;

        let claims = Claims {
            sub: username.to_string(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        Ok(encode(&Header::default(), &claims, &self.encoding)?)
    }

    /// Validates signature and expiry of a token, returning its claims.
    pub fn verify(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let data = decode::<Claims>(token, &self.decoding, &Validation::default())?;

        Ok(data.claims)
    }
}
