use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Server entry as returned by the list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ServerDto {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Speedrunners")]
    pub name: String,
    /// Name of the category the server belongs to.
    #[schema(example = "gaming")]
    pub category: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    /// Number of members, only present when `with_num_members=true` was requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_members: Option<u64>,
}

/// Raw query string of the server list endpoint.
///
/// Values are kept as strings here and parsed into `ServerListParams` after the
/// authentication check, so malformed numbers never mask an authentication failure.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ServerListQueryDto {
    /// Only return servers whose category has this name
    #[param(example = "gaming")]
    pub category: Option<String>,
    /// Return at most this many servers
    #[param(example = "10")]
    pub qty: Option<String>,
    /// `true` to only return servers the current user is a member of
    #[param(example = "true")]
    pub by_user: Option<String>,
    /// Only return the server with this id
    #[param(example = "1")]
    pub by_serverid: Option<String>,
    /// `true` to include the member count of each server
    #[param(example = "true")]
    pub with_num_members: Option<String>,
}
