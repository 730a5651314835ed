//! Server-side domain models and parameter types.
//!
//! Domain models are built from entity models at the repository boundary and transformed
//! to DTOs at the controller boundary. Parameter types carry already-validated request
//! input into the service layer.

pub mod server;
