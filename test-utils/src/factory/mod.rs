//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with a `Factory`
//! struct for customization and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::user::create_user(&db).await?;
//! let category = factory::category::create_category_named(&db, "gaming").await?;
//! let server = factory::server::create_server(&db, user.id, category.id).await?;
//! factory::server_member::add_member(&db, server.id, user.id).await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `category` - Create category entities
//! - `server` - Create server entities
//! - `server_member` - Create server membership entities
//! - `helpers` - Unique id generation and entities with dependencies

pub mod category;
pub mod helpers;
pub mod server;
pub mod server_member;
pub mod user;
