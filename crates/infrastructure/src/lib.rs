//! Edda Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports defined in
//! the application layer: the reqwest-backed HTTP transport, the system
//! clock, and environment-based configuration loading.

pub mod adapters;
pub mod env;

pub use adapters::{ReqwestHttpClient, SystemClock};
pub use env::config_from_env;
