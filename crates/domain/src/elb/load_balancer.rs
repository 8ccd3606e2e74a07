//! Load balancer description records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Full description of a classic load balancer as Edda serves it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoadBalancerDescription {
    /// Name of the load balancer.
    pub load_balancer_name: String,
    /// Public DNS name.
    #[serde(rename = "DNSName")]
    pub dns_name: String,
    /// Route 53 hosted zone name associated with the load balancer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canonical_hosted_zone_name: Option<String>,
    /// Route 53 hosted zone id associated with the load balancer.
    #[serde(rename = "canonicalHostedZoneNameID", skip_serializing_if = "Option::is_none")]
    pub canonical_hosted_zone_name_id: Option<String>,
    /// Listeners configured on the load balancer.
    pub listener_descriptions: Vec<ListenerDescription>,
    /// Policies attached to the load balancer.
    pub policies: Policies,
    /// Per-backend-port policy assignments.
    pub backend_server_descriptions: Vec<BackendServerDescription>,
    /// Availability zones the load balancer spans.
    pub availability_zones: Vec<String>,
    /// VPC subnets the load balancer is attached to.
    pub subnets: Vec<String>,
    /// Id of the VPC the load balancer lives in, if any.
    #[serde(rename = "VPCId", skip_serializing_if = "Option::is_none")]
    pub vpc_id: Option<String>,
    /// Instances registered with the load balancer.
    pub instances: Vec<Instance>,
    /// Health check configuration.
    pub health_check: HealthCheck,
    /// Security group sourced for backend instance rules.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_security_group: Option<SourceSecurityGroup>,
    /// Security groups assigned to the load balancer.
    pub security_groups: Vec<String>,
    /// Creation time, serialized as epoch milliseconds.
    #[serde(with = "chrono::serde::ts_milliseconds_option")]
    pub created_time: Option<DateTime<Utc>>,
    /// `internet-facing` or `internal`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme: Option<String>,
}

/// A listener together with the policies assigned to it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListenerDescription {
    /// The listener configuration.
    pub listener: Listener,
    /// Names of the policies enabled for this listener.
    pub policy_names: Vec<String>,
}

/// A single front-end/back-end port mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Listener {
    /// Front-end protocol (`HTTP`, `HTTPS`, `TCP`, or `SSL`).
    pub protocol: String,
    /// Front-end port.
    pub load_balancer_port: u16,
    /// Back-end protocol.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_protocol: Option<String>,
    /// Back-end port.
    pub instance_port: u16,
    /// ARN of the server certificate for HTTPS/SSL listeners.
    #[serde(rename = "SSLCertificateId", skip_serializing_if = "Option::is_none")]
    pub ssl_certificate_id: Option<String>,
}

/// Health check configuration for registered instances.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HealthCheck {
    /// Probe target, e.g. `HTTP:7001/healthcheck`.
    pub target: String,
    /// Seconds between probes.
    pub interval: u32,
    /// Seconds before a probe is considered failed.
    pub timeout: u32,
    /// Consecutive failures before marking an instance unhealthy.
    pub unhealthy_threshold: u32,
    /// Consecutive successes before marking an instance healthy.
    pub healthy_threshold: u32,
}

/// Reference to a registered EC2 instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Instance {
    /// EC2 instance id.
    pub instance_id: String,
}

impl Instance {
    /// Creates an instance reference.
    #[must_use]
    pub fn new(instance_id: impl Into<String>) -> Self {
        Self {
            instance_id: instance_id.into(),
        }
    }
}

/// Policies attached to a load balancer, grouped by kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Policies {
    /// Application-generated cookie stickiness policies.
    pub app_cookie_stickiness_policies: Vec<AppCookieStickinessPolicy>,
    /// Load-balancer-generated cookie stickiness policies.
    #[serde(rename = "LBCookieStickinessPolicies")]
    pub lb_cookie_stickiness_policies: Vec<LbCookieStickinessPolicy>,
    /// Names of all other policies.
    pub other_policies: Vec<String>,
}

/// Stickiness policy following an application-generated cookie.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppCookieStickinessPolicy {
    /// Name of the policy.
    pub policy_name: String,
    /// Name of the application cookie to follow.
    pub cookie_name: String,
}

/// Stickiness policy using a load-balancer-generated cookie.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LbCookieStickinessPolicy {
    /// Name of the policy.
    pub policy_name: String,
    /// Cookie expiration period in seconds, if set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cookie_expiration_period: Option<u64>,
}

/// Policy assignments for a single backend port.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BackendServerDescription {
    /// Backend port the policies apply to.
    pub instance_port: u16,
    /// Names of the policies enabled for this port.
    pub policy_names: Vec<String>,
}

/// Security group that backend instance rules should allow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SourceSecurityGroup {
    /// Owner of the security group.
    pub owner_alias: String,
    /// Name of the security group.
    pub group_name: String,
}
