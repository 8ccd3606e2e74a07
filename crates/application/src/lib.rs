//! Edda Application - client logic
//!
//! This crate holds the service clients and the ports they depend on.
//! Transport and clock implementations live in the infrastructure layer.

pub mod client;
pub mod elastic_load_balancing;
pub mod error;
pub mod ports;

pub use client::EddaClient;
pub use elastic_load_balancing::ElasticLoadBalancing;
pub use error::{ClientError, ClientResult};
