//! Business logic layer.
//!
//! Services sit between controllers and repositories. They receive validated parameter
//! models, orchestrate repository calls and return domain models.

pub mod server;
