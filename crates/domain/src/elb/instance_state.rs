//! Instance state record

use serde::{Deserialize, Serialize};

/// Health state of a single backend instance behind a load balancer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InstanceState {
    /// EC2 instance id.
    pub instance_id: String,
    /// Current state: `InService`, `OutOfService`, or `Unknown`.
    pub state: String,
    /// Source of the state information (`ELB`, `Instance`, or `N/A`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason_code: Option<String>,
    /// Human-readable description of the state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl InstanceState {
    /// Creates an instance state with just an id and state.
    #[must_use]
    pub fn new(instance_id: impl Into<String>, state: impl Into<String>) -> Self {
        Self {
            instance_id: instance_id.into(),
            state: state.into(),
            reason_code: None,
            description: None,
        }
    }

    /// Returns true if the instance is reported in service.
    #[must_use]
    pub fn is_in_service(&self) -> bool {
        self.state == "InService"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{
            "instanceId": "i-0123456789abcdef0",
            "state": "InService",
            "reasonCode": "N/A",
            "description": "N/A"
        }"#;
        let state: InstanceState = serde_json::from_str(json).expect("valid instance state");
        assert_eq!(state.instance_id, "i-0123456789abcdef0");
        assert!(state.is_in_service());
        assert_eq!(state.reason_code.as_deref(), Some("N/A"));
    }

    #[test]
    fn test_missing_fields_default() {
        let state: InstanceState = serde_json::from_str(r#"{"instanceId": "i-1"}"#)
            .expect("partial instance state");
        assert_eq!(state.state, "");
        assert_eq!(state.reason_code, None);
        assert!(!state.is_in_service());
    }
}
