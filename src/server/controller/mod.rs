//! HTTP request handlers.
//!
//! Controllers extract request data, read the requester from the session, convert DTOs
//! into parameter models, call services and convert the resulting domain models back
//! into DTOs.

pub mod server;

#[cfg(test)]
mod test;
