//! Capability surface consumed by the network proxy under test

use hostnet_api::v2::{HostEndpoint, HostLoadBalancer, HostNetwork};

use crate::Result;

/// HostNetworkService is the minimal host control-plane surface a proxy
/// depends on. Lookups that find nothing return zero-valued documents, not
/// errors; every method on this trait always succeeds.
pub trait HostNetworkService {
    /// Synthesize the network descriptor for the given name
    fn get_network_by_name(&self, network_name: &str) -> Result<HostNetwork>;

    /// All endpoints attached to the given network, in creation order
    fn list_endpoints_of_network(&self, network_id: &str) -> Result<Vec<HostEndpoint>>;

    /// Look up one endpoint by identifier
    fn get_endpoint_by_id(&self, endpoint_id: &str) -> Result<HostEndpoint>;

    /// All endpoints, in creation order
    fn list_endpoints(&self) -> Result<Vec<HostEndpoint>>;

    /// Look up one endpoint by name
    fn get_endpoint_by_name(&self, endpoint_name: &str) -> Result<HostEndpoint>;

    /// All load balancers, in creation order
    fn list_load_balancers(&self) -> Result<Vec<HostLoadBalancer>>;

    /// Look up one load balancer by identifier
    fn get_load_balancer_by_id(&self, load_balancer_id: &str) -> Result<HostLoadBalancer>;

    /// Attach a new endpoint to the simulated network
    fn create_endpoint(&mut self, endpoint: &HostEndpoint) -> Result<HostEndpoint>;

    /// Register a new load balancer
    fn create_load_balancer(&mut self, loadbalancer: &HostLoadBalancer) -> Result<HostLoadBalancer>;
}
