//! AWS Classic ELB model records
//!
//! The record shapes Edda serves for Elastic Load Balancing resources,
//! matching the camelCase JSON the service emits. Field coverage follows
//! the classic ELB API; missing fields deserialize to their defaults.

pub mod api;
mod attributes;
mod instance_state;
mod load_balancer;

pub use attributes::{
    AccessLog, AdditionalAttribute, ConnectionDraining, ConnectionSettings,
    CrossZoneLoadBalancing, LoadBalancerAttributes,
};
pub use instance_state::InstanceState;
pub use load_balancer::{
    AppCookieStickinessPolicy, BackendServerDescription, HealthCheck, Instance,
    LbCookieStickinessPolicy, Listener, ListenerDescription, LoadBalancerDescription, Policies,
    SourceSecurityGroup,
};
