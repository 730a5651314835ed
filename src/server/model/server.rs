//! Server domain models and list parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::server::{ServerDto, ServerListQueryDto},
    server::{
        error::{auth::AuthError, AppError},
        util::parse::{is_true, non_empty, parse_quantity, parse_server_id},
    },
};

/// Server row joined with its category and optional member count.
///
/// Returned by the repository; `num_members` is only populated when the query
/// asked for member counts.
#[derive(Debug, Clone)]
pub struct ServerWithCategory {
    pub server: entity::server::Model,
    pub category: entity::category::Model,
    pub num_members: Option<u64>,
}

/// Server as exposed by the directory.
#[derive(Debug, Clone, PartialEq)]
pub struct Server {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    /// Name of the owning category.
    pub category: String,
    pub created_at: DateTime<Utc>,
    /// Distinct member count, present only when requested.
    pub num_members: Option<u64>,
}

impl Server {
    /// Converts a repository row into the domain model.
    pub fn from_with_category(row: ServerWithCategory) -> Self {
        Self {
            id: row.server.id,
            name: row.server.name,
            description: row.server.description,
            category: row.category.name,
            created_at: row.server.created_at,
            num_members: row.num_members,
        }
    }

    /// Converts domain model to DTO for API responses.
    pub fn into_dto(self) -> ServerDto {
        ServerDto {
            id: self.id,
            name: self.name,
            category: self.category,
            description: self.description,
            created_at: self.created_at,
            num_members: self.num_members,
        }
    }
}

/// Parsed `by_serverid` parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerIdParam {
    pub id: i32,
    /// Parameter text as sent by the client, echoed in the not-found message.
    pub raw: String,
}

/// Typed parameters of the server list pipeline.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServerListParams {
    /// Keep only servers in the category with this name.
    pub category: Option<String>,
    /// Keep only servers this user is a member of.
    pub member_id: Option<i32>,
    /// Annotate each server with its member count.
    pub with_num_members: bool,
    /// Keep only the first N servers of the working set.
    pub quantity: Option<u64>,
    /// Keep only the server with this id.
    pub server_id: Option<ServerIdParam>,
}

impl ServerListParams {
    /// Validates the raw query string against the requester's identity.
    ///
    /// The authentication check runs before any value is parsed, so an anonymous
    /// `by_user=true` request is rejected as unauthenticated whatever else it carries.
    /// `qty` is parsed before `by_serverid`.
    ///
    /// # Arguments
    /// - `dto` - Raw query parameters
    /// - `requester` - Authenticated user id from the session, if any
    ///
    /// # Returns
    /// - `Ok(ServerListParams)` - Parameters ready for the service layer
    /// - `Err(AppError::AuthErr)` - `by_user=true` without an authenticated user
    /// - `Err(AppError::ValidationErr)` - Malformed `qty` or `by_serverid`
    pub fn from_dto(dto: ServerListQueryDto, requester: Option<i32>) -> Result<Self, AppError> {
        let category = non_empty(dto.category);
        let qty = non_empty(dto.qty);
        let by_user = is_true(dto.by_user.as_deref());
        let by_serverid = non_empty(dto.by_serverid);
        let with_num_members = is_true(dto.with_num_members.as_deref());

        let member_id = match (by_user, requester) {
            (false, _) => None,
            (true, Some(user_id)) => Some(user_id),
            (true, None) => return Err(AuthError::AuthenticationRequired.into()),
        };

        let quantity = qty.as_deref().map(parse_quantity).transpose()?;

        let server_id = by_serverid
            .map(|raw| parse_server_id(&raw).map(|id| ServerIdParam { id, raw }))
            .transpose()?;

        Ok(Self {
            category,
            member_id,
            with_num_members,
            quantity,
            server_id,
        })
    }
}
