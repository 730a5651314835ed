use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Request parameters that cannot be satisfied.
///
/// The display text of each variant is returned verbatim as the `detail` of the
/// 400 response.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// `by_serverid` does not parse as an id, or no server in the working set has it.
    ///
    /// Carries the raw parameter text so the message echoes what the client sent.
    #[error("Server with id {0} not found")]
    ServerNotFound(String),

    /// `qty` is not a non-negative integer.
    #[error("Invalid qty value '{0}'")]
    InvalidQuantity(String),
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                detail: self.to_string(),
            }),
        )
            .into_response()
    }
}
