use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// The request needs an authenticated user but the session holds none.
    ///
    /// Raised when `by_user=true` is requested anonymously. Results in a
    /// 401 Unauthorized response.
    #[error("Authentication credentials were not provided.")]
    AuthenticationRequired,
}

/// Converts authentication errors into HTTP responses.
///
/// # Returns
/// - 401 Unauthorized - For `AuthenticationRequired`
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::AuthenticationRequired => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    detail: self.to_string(),
                }),
            )
                .into_response(),
        }
    }
}
