//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Key-value storage (in-memory and file-backed `localStorage` equivalents)
//! - Generic pagination engine with sliding page-number window
//! - Injectable wall clock

pub mod clock;
pub mod kv_store;
pub mod pagination;
