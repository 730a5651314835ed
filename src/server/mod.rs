//! Server-side API backend.
//!
//! The backend uses Axum as the web framework and SeaORM for database access. It serves
//! the server directory list endpoint together with its OpenAPI documentation.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Filter pipeline orchestration and not-found checks
//! - **Data Layer** (`data/`) - Composable server queries and their materialization
//! - **Model Layer** (`model/`) - Domain models and typed request parameters
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Type-safe session access
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (database pool)
//! - **Startup** (`startup`) - Tracing, database, session and CORS initialization
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request, the session layer loads the session
//! 2. **Controller** reads the requester from the session and parses the query into params
//! 3. **Service** composes the filter chain and executes it through the data layer
//! 4. **Controller** converts domain models to DTOs and returns the JSON response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
