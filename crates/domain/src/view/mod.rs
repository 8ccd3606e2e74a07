//! Edda view shapes
//!
//! Intermediate JSON shapes served by Edda's `/api/v2/view/` endpoints.
//! Each view pairs a load balancer name with the domain records for it;
//! the client repackages views into the `elb::api` result types.

use serde::{Deserialize, Serialize};

use crate::elb::{InstanceState, LoadBalancerAttributes};

/// Instance states grouped under their load balancer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InstanceStateView {
    /// Name of the load balancer the instances belong to.
    pub name: String,
    /// State of every instance registered with the load balancer.
    pub instances: Vec<InstanceState>,
}

/// Attribute set grouped under its load balancer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoadBalancerAttributesView {
    /// Name of the load balancer the attributes belong to.
    pub name: String,
    /// The attribute set.
    pub attributes: LoadBalancerAttributes,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_instance_state_view() {
        let json = r#"{
            "name": "api-frontend",
            "instances": [
                {"instanceId": "i-1", "state": "InService"},
                {"instanceId": "i-2", "state": "OutOfService"}
            ]
        }"#;
        let view: InstanceStateView = serde_json::from_str(json).expect("valid view");
        assert_eq!(view.name, "api-frontend");
        assert_eq!(view.instances.len(), 2);
        assert_eq!(view.instances[1].state, "OutOfService");
    }

    #[test]
    fn test_attributes_view() {
        let json = r#"{
            "name": "api-frontend",
            "attributes": {"crossZoneLoadBalancing": {"enabled": true}}
        }"#;
        let view: LoadBalancerAttributesView = serde_json::from_str(json).expect("valid view");
        assert_eq!(view.name, "api-frontend");
        assert!(view.attributes.cross_zone_load_balancing.enabled);
    }
}
