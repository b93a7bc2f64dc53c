//! Infrastructure Layer
//!
//! Adapters for the repository and joke-feed ports.

pub mod joke_api;
pub mod local_storage;
