use serde::{Deserialize, Serialize};

/// Credentials submitted to `POST /login`
///
/// Both fields are optional so an incomplete body is rejected as bad credentials
/// rather than as a malformed request.
#[derive(Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct LoginDto {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AccessTokenDto {
    pub access_token: String,
}
