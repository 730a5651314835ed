use axum::{
    extract::{Query, State},
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        server::{ServerDto, ServerListQueryDto},
    },
    server::{
        error::AppError,
        middleware::session::AuthSession,
        model::server::{Server, ServerListParams},
        service::server::ServerService,
        state::AppState,
    },
};

/// Tag for grouping server endpoints in OpenAPI documentation
pub static SERVER_TAG: &str = "server";

/// List servers in the directory.
///
/// Returns servers narrowed by the optional query parameters, ordered by id.
/// Filters apply in this order: `category`, `by_user`, `with_num_members`, `qty`,
/// `by_serverid`.
///
/// # Access Control
/// - Public, except `by_user=true` which requires an authenticated session
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session, read to identify the requester
/// - `query` - Raw query parameters
///
/// # Returns
/// - `200 OK` - Matching servers, possibly empty
/// - `400 Bad Request` - Malformed `qty`, or `by_serverid` matching no server
/// - `401 Unauthorized` - `by_user=true` without an authenticated session
/// - `500 Internal Server Error` - Database or session error
#[utoipa::path(
    get,
    path = "/api/servers",
    tag = SERVER_TAG,
    params(ServerListQueryDto),
    responses(
        (status = 200, description = "Successfully listed servers", body = Vec<ServerDto>),
        (status = 400, description = "Invalid quantity or server not found", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_servers(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<ServerListQueryDto>,
) -> Result<Json<Vec<ServerDto>>, AppError> {
    let requester = AuthSession::new(&session).get_user_id().await?;

    let params = ServerListParams::from_dto(query, requester)?;

    let service = ServerService::new(&state.db);

    let servers = service.list(params).await?;

    Ok(Json(servers.into_iter().map(Server::into_dto).collect()))
}
