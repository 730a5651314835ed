use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, state::AppState};

/// OpenAPI document root; paths are registered by the router below.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Server Directory API",
        description = "Lists chat servers with category, membership and id filters"
    ),
    tags((name = "server", description = "Server directory endpoints"))
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::server::list_servers))
        .split_for_parts();

    router.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
