//! Edda Domain - Core model types
//!
//! This crate defines the domain model for the Edda Elastic Load Balancing
//! client. All types here are pure Rust with no I/O dependencies.

pub mod elb;
pub mod error;
pub mod result;
pub mod settings;
pub mod view;

pub use error::{DomainError, DomainResult};
pub use result::{NamedServiceResult, PaginatedServiceResult, ServiceResult};
pub use settings::EddaConfig;
pub use view::{InstanceStateView, LoadBalancerAttributesView};
