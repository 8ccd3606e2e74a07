//! Elastic Load Balancing queries
//!
//! Maps Edda's load balancer views onto SDK-shaped results: instance
//! health, load balancer descriptions, and load balancer attributes.
//! Fetch-all operations return one envelope per load balancer; by-name
//! operations validate their input before any request is issued.

use edda_domain::elb::api::{
    DescribeInstanceHealthRequest, DescribeInstanceHealthResult,
    DescribeLoadBalancerAttributesRequest, DescribeLoadBalancerAttributesResult,
    DescribeLoadBalancersRequest, DescribeLoadBalancersResult,
};
use edda_domain::elb::LoadBalancerDescription;
use edda_domain::view::{InstanceStateView, LoadBalancerAttributesView};
use edda_domain::{
    DomainError, EddaConfig, NamedServiceResult, PaginatedServiceResult, ServiceResult,
};

use crate::client::EddaClient;
use crate::error::ClientResult;
use crate::ports::HttpClient;

/// Client for Elastic Load Balancing queries against Edda.
#[derive(Debug, Clone)]
pub struct ElasticLoadBalancing<C> {
    client: EddaClient<C>,
}

impl<C: HttpClient> ElasticLoadBalancing<C> {
    /// Creates a client from a configuration and a transport.
    #[must_use]
    pub const fn new(config: EddaConfig, http: C) -> Self {
        Self {
            client: EddaClient::new(config, http),
        }
    }

    /// Fetches instance health for every load balancer known to Edda.
    ///
    /// Returns one named result per load balancer, in server order.
    ///
    /// # Errors
    ///
    /// Returns a transport or parse error; failures are not retried.
    pub async fn describe_instance_health(
        &self,
    ) -> ClientResult<Vec<NamedServiceResult<DescribeInstanceHealthResult>>> {
        let url = self
            .client
            .endpoint("/api/v2/view/loadBalancerInstances;_expand");
        let (start_time, views): (_, Vec<InstanceStateView>) =
            self.client.get_parsed(&url).await?;
        Ok(views
            .into_iter()
            .map(|view| {
                NamedServiceResult::new(
                    start_time,
                    view.name,
                    DescribeInstanceHealthResult::new(view.instances),
                )
            })
            .collect())
    }

    /// Fetches instance health for the load balancer named in the request.
    ///
    /// When the request names specific instances, the result is restricted
    /// to those instances, preserving server order. An empty instance list
    /// means no filtering.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `load_balancer_name` is empty, or a
    /// transport/parse error from the request itself.
    pub async fn describe_instance_health_with(
        &self,
        request: &DescribeInstanceHealthRequest,
    ) -> ClientResult<ServiceResult<DescribeInstanceHealthResult>> {
        validate_not_empty("LoadBalancerName", &request.load_balancer_name)?;

        let url = self.client.endpoint(&format!(
            "/api/v2/view/loadBalancerInstances/{};_expand",
            request.load_balancer_name
        ));
        let (start_time, view): (_, InstanceStateView) = self.client.get_parsed(&url).await?;

        let ids = request.instance_ids();
        let mut instance_states = view.instances;
        if should_filter(&ids) {
            instance_states.retain(|state| ids.contains(&state.instance_id.as_str()));
        }

        Ok(ServiceResult::new(
            start_time,
            DescribeInstanceHealthResult::new(instance_states),
        ))
    }

    /// Fetches descriptions of every load balancer known to Edda.
    ///
    /// # Errors
    ///
    /// Returns a transport or parse error; failures are not retried.
    pub async fn describe_load_balancers(
        &self,
    ) -> ClientResult<PaginatedServiceResult<DescribeLoadBalancersResult>> {
        self.describe_load_balancers_with(&DescribeLoadBalancersRequest::default())
            .await
    }

    /// Fetches load balancer descriptions, restricted to the names in the
    /// request when that list is non-empty.
    ///
    /// Edda serves the complete listing in one response, so the result's
    /// pagination token is always `None`.
    ///
    /// # Errors
    ///
    /// Returns a transport or parse error; failures are not retried.
    pub async fn describe_load_balancers_with(
        &self,
        request: &DescribeLoadBalancersRequest,
    ) -> ClientResult<PaginatedServiceResult<DescribeLoadBalancersResult>> {
        let url = self.client.endpoint("/api/v2/aws/loadBalancers;_expand");
        let (start_time, mut descriptions): (_, Vec<LoadBalancerDescription>) =
            self.client.get_parsed(&url).await?;

        let names = &request.load_balancer_names;
        if should_filter(names) {
            descriptions.retain(|lb| names.contains(&lb.load_balancer_name));
        }

        Ok(PaginatedServiceResult::new(
            start_time,
            None,
            DescribeLoadBalancersResult::new(descriptions),
        ))
    }

    /// Fetches attributes for every load balancer known to Edda.
    ///
    /// Returns one named result per load balancer, in server order.
    ///
    /// # Errors
    ///
    /// Returns a transport or parse error; failures are not retried.
    pub async fn describe_load_balancer_attributes(
        &self,
    ) -> ClientResult<Vec<NamedServiceResult<DescribeLoadBalancerAttributesResult>>> {
        let url = self
            .client
            .endpoint("/api/v2/view/loadBalancerAttributes;_expand");
        let (start_time, views): (_, Vec<LoadBalancerAttributesView>) =
            self.client.get_parsed(&url).await?;
        Ok(views
            .into_iter()
            .map(|view| {
                NamedServiceResult::new(
                    start_time,
                    view.name,
                    DescribeLoadBalancerAttributesResult::new(view.attributes),
                )
            })
            .collect())
    }

    /// Fetches attributes for the load balancer named in the request.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `load_balancer_name` is empty, or a
    /// transport/parse error from the request itself.
    pub async fn describe_load_balancer_attributes_with(
        &self,
        request: &DescribeLoadBalancerAttributesRequest,
    ) -> ClientResult<ServiceResult<DescribeLoadBalancerAttributesResult>> {
        validate_not_empty("LoadBalancerName", &request.load_balancer_name)?;

        let url = self.client.endpoint(&format!(
            "/api/v2/view/loadBalancerAttributes/{};_expand",
            request.load_balancer_name
        ));
        let (start_time, view): (_, LoadBalancerAttributesView) =
            self.client.get_parsed(&url).await?;

        Ok(ServiceResult::new(
            start_time,
            DescribeLoadBalancerAttributesResult::new(view.attributes),
        ))
    }
}

/// A caller-supplied restriction list only applies when it is non-empty.
fn should_filter<T>(values: &[T]) -> bool {
    !values.is_empty()
}

/// Rejects empty or whitespace-only required parameters before dispatch.
fn validate_not_empty(name: &str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::InvalidParameter(format!(
            "{name} must not be empty"
        )));
    }
    Ok(())
}
