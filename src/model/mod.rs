//! Wire types shared by the API surface.
//!
//! DTOs in this module define the JSON shapes returned by the HTTP endpoints and the
//! query strings they accept. Server-side domain models convert into these at the
//! controller boundary.

pub mod api;
pub mod server;
