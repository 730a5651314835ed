//! Database repository layer.
//!
//! Repositories use SeaORM entity models internally and hand rows to the model layer for
//! conversion. All database queries are performed through these repositories.

pub mod server;
