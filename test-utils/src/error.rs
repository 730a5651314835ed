use thiserror::Error;

/// Errors that can occur while setting up a test environment.
#[derive(Error, Debug)]
pub enum TestError {
    /// Failed to connect to the in-memory database, create a table, or
    /// migrate the session store.
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),
}
