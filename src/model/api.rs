use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error envelope returned by every failing endpoint.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// Human readable explanation of the failure.
    #[schema(example = "Server with id 999 not found")]
    pub detail: String,
}
