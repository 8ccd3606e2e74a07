//! Load balancer attribute records

use serde::{Deserialize, Serialize};

/// Attribute set of a classic load balancer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoadBalancerAttributes {
    /// Cross-zone load balancing toggle.
    pub cross_zone_load_balancing: CrossZoneLoadBalancing,
    /// Access log delivery configuration.
    pub access_log: AccessLog,
    /// Connection draining configuration.
    pub connection_draining: ConnectionDraining,
    /// Idle connection settings.
    pub connection_settings: ConnectionSettings,
    /// Attributes not covered by the typed fields above.
    pub additional_attributes: Vec<AdditionalAttribute>,
}

/// Whether requests are routed across all availability zones.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CrossZoneLoadBalancing {
    /// True if cross-zone routing is enabled.
    pub enabled: bool,
}

/// Access log delivery to S3.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccessLog {
    /// True if access logs are delivered.
    pub enabled: bool,
    /// Bucket receiving the logs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_bucket_name: Option<String>,
    /// Minutes between log deliveries (5 or 60).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emit_interval: Option<u32>,
    /// Key prefix within the bucket.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_bucket_prefix: Option<String>,
}

/// Draining of in-flight requests when instances deregister.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConnectionDraining {
    /// True if connection draining is enabled.
    pub enabled: bool,
    /// Seconds to keep draining connections alive.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u32>,
}

/// Idle connection handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConnectionSettings {
    /// Seconds an idle connection is kept open.
    pub idle_timeout: u32,
}

impl Default for ConnectionSettings {
    fn default() -> Self {
        Self { idle_timeout: 60 }
    }
}

/// Key/value attribute outside the typed attribute set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdditionalAttribute {
    /// Attribute key.
    pub key: String,
    /// Attribute value.
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_deserialize_attributes() {
        let json = r#"{
            "crossZoneLoadBalancing": {"enabled": true},
            "accessLog": {
                "enabled": true,
                "s3BucketName": "my-loadbalancer-logs",
                "emitInterval": 60,
                "s3BucketPrefix": "prod"
            },
            "connectionDraining": {"enabled": true, "timeout": 300},
            "connectionSettings": {"idleTimeout": 30}
        }"#;
        let attrs: LoadBalancerAttributes = serde_json::from_str(json).expect("valid attributes");
        assert!(attrs.cross_zone_load_balancing.enabled);
        assert_eq!(attrs.access_log.s3_bucket_name.as_deref(), Some("my-loadbalancer-logs"));
        assert_eq!(attrs.connection_draining.timeout, Some(300));
        assert_eq!(attrs.connection_settings.idle_timeout, 30);
        assert!(attrs.additional_attributes.is_empty());
    }

    #[test]
    fn test_defaults() {
        let attrs: LoadBalancerAttributes = serde_json::from_str("{}").expect("empty attributes");
        assert!(!attrs.cross_zone_load_balancing.enabled);
        assert!(!attrs.access_log.enabled);
        assert_eq!(attrs.connection_settings.idle_timeout, 60);
    }
}
