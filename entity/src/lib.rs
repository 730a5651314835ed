//! SeaORM entities for the server directory schema.
//!
//! Each module mirrors one table created by the `migration` crate. The `prelude`
//! re-exports the entity types under their table names for use in queries.

pub mod prelude;

pub mod category;
pub mod server;
pub mod server_member;
pub mod user;
