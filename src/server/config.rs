use crate::server::error::config::ConfigError;

/// Default lifetime of an access token in minutes.
pub const DEFAULT_JWT_EXPIRES_MINUTES: i64 = 15;
/// Longest accepted access token lifetime in minutes, one year.
pub const MAX_JWT_EXPIRES_MINUTES: i64 = 60 * 24 * 365;
/// Default port the server listens on.
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub jwt_expires_minutes: i64,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the configuration from any variable source.
    ///
    /// `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required =
            |var: &str| lookup(var).ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()));

        Ok(Self {
            database_url: required("DB_CONNECTION_STRING")?,
            jwt_secret: required("JWT_SECRET_KEY")?,
            jwt_expires_minutes: jwt_expires_minutes(&lookup)?,
            port: parse_or(&lookup, "PORT", DEFAULT_PORT)?,
        })
    }
}

/// Token lifetime, must lie within `1..=MAX_JWT_EXPIRES_MINUTES`
fn jwt_expires_minutes<F>(lookup: &F) -> Result<i64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let minutes = parse_or(lookup, "JWT_EXPIRES_MINUTES", DEFAULT_JWT_EXPIRES_MINUTES)?;

    if !(1..=MAX_JWT_EXPIRES_MINUTES).contains(&minutes) {
        return Err(ConfigError::InvalidEnvValue {
            var: "JWT_EXPIRES_MINUTES".to_string(),
            reason: format!(
                "expected between 1 and {} minutes, got {}",
                MAX_JWT_EXPIRES_MINUTES, minutes
            ),
        });
    }

    Ok(minutes)
}

fn parse_or<F, T>(lookup: &F, var: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(var) {
        None => Ok(default),
        Some(value) => value.parse().map_err(|e: T::Err| ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: e.to_string(),
        }),
    }
}
