//! Application Layer - Use Cases
//!
//! Orchestrates domain logic over the storage and joke-feed ports.

pub mod collection_view;
pub mod config;
pub mod session;
pub mod storage_gateway;
pub mod typewriter;
