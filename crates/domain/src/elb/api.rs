//! SDK-shaped request and result types
//!
//! These mirror the Elastic Load Balancing API surface so callers written
//! against the cloud SDK can consume Edda-backed results unchanged.

use serde::{Deserialize, Serialize};

use super::attributes::LoadBalancerAttributes;
use super::instance_state::InstanceState;
use super::load_balancer::{Instance, LoadBalancerDescription};

/// Request for the health of instances behind one load balancer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescribeInstanceHealthRequest {
    /// Name of the load balancer to query. Must be non-empty.
    pub load_balancer_name: String,
    /// Instances to restrict the result to. Empty means no filtering.
    pub instances: Vec<Instance>,
}

impl DescribeInstanceHealthRequest {
    /// Creates a request for the named load balancer.
    #[must_use]
    pub fn new(load_balancer_name: impl Into<String>) -> Self {
        Self {
            load_balancer_name: load_balancer_name.into(),
            instances: Vec::new(),
        }
    }

    /// Restricts the result to the given instances.
    #[must_use]
    pub fn with_instances(mut self, instances: Vec<Instance>) -> Self {
        self.instances = instances;
        self
    }

    /// Returns the instance ids named in this request.
    #[must_use]
    pub fn instance_ids(&self) -> Vec<&str> {
        self.instances.iter().map(|i| i.instance_id.as_str()).collect()
    }
}

/// Instance health for one load balancer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DescribeInstanceHealthResult {
    /// State of each queried instance.
    pub instance_states: Vec<InstanceState>,
}

impl DescribeInstanceHealthResult {
    /// Creates a result from a list of instance states.
    #[must_use]
    pub const fn new(instance_states: Vec<InstanceState>) -> Self {
        Self { instance_states }
    }
}

/// Request for load balancer descriptions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescribeLoadBalancersRequest {
    /// Names to restrict the result to. Empty means all load balancers.
    pub load_balancer_names: Vec<String>,
}

impl DescribeLoadBalancersRequest {
    /// Creates a request for all load balancers.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            load_balancer_names: Vec::new(),
        }
    }

    /// Restricts the result to the given load balancer names.
    #[must_use]
    pub fn with_load_balancer_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.load_balancer_names = names.into_iter().map(Into::into).collect();
        self
    }
}

/// Descriptions of the queried load balancers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DescribeLoadBalancersResult {
    /// One description per load balancer.
    pub load_balancer_descriptions: Vec<LoadBalancerDescription>,
    /// Marker for the next page of results, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_marker: Option<String>,
}

impl DescribeLoadBalancersResult {
    /// Creates a result from a list of descriptions.
    #[must_use]
    pub const fn new(load_balancer_descriptions: Vec<LoadBalancerDescription>) -> Self {
        Self {
            load_balancer_descriptions,
            next_marker: None,
        }
    }
}

/// Request for the attributes of one load balancer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescribeLoadBalancerAttributesRequest {
    /// Name of the load balancer to query. Must be non-empty.
    pub load_balancer_name: String,
}

impl DescribeLoadBalancerAttributesRequest {
    /// Creates a request for the named load balancer.
    #[must_use]
    pub fn new(load_balancer_name: impl Into<String>) -> Self {
        Self {
            load_balancer_name: load_balancer_name.into(),
        }
    }
}

/// Attributes of one load balancer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DescribeLoadBalancerAttributesResult {
    /// The attribute set.
    pub load_balancer_attributes: LoadBalancerAttributes,
}

impl DescribeLoadBalancerAttributesResult {
    /// Creates a result from an attribute set.
    #[must_use]
    pub const fn new(load_balancer_attributes: LoadBalancerAttributes) -> Self {
        Self {
            load_balancer_attributes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_instance_health_request_builder() {
        let request = DescribeInstanceHealthRequest::new("api-frontend")
            .with_instances(vec![Instance::new("i-1"), Instance::new("i-2")]);
        assert_eq!(request.load_balancer_name, "api-frontend");
        assert_eq!(request.instance_ids(), vec!["i-1", "i-2"]);
    }

    #[test]
    fn test_load_balancers_request_builder() {
        let request =
            DescribeLoadBalancersRequest::new().with_load_balancer_names(["a", "b"]);
        assert_eq!(request.load_balancer_names, vec!["a", "b"]);

        let all = DescribeLoadBalancersRequest::default();
        assert!(all.load_balancer_names.is_empty());
    }
}
