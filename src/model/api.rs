use serde::{Deserialize, Serialize};

/// The response when an error occurs with an API request
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// A single route listed by the sitemap
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct EndpointDto {
    pub method: String,
    pub path: String,
}

/// Every route the API exposes
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SitemapDto {
    pub msg: String,
    pub endpoints: Vec<EndpointDto>,
}
