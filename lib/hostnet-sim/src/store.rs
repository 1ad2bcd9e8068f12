//! In-memory store backing the simulated host network service

use hostnet_api::v2::{EndpointFlags, HostEndpoint, HostLoadBalancer, HostNetwork};
use tracing::debug;

use crate::network::{overlay_network, NETWORK_ID};
use crate::service::HostNetworkService;
use crate::{Result, SimError};

/// HostNetworkStore holds the simulator's endpoints and load balancers and
/// answers the `HostNetworkService` surface from them.
///
/// Both collections preserve insertion order and tolerate duplicate
/// identifiers; single-entity lookups resolve duplicates to the most recently
/// created entry. Reads hand out independent copies, so callers can mutate
/// results without touching stored state. The store is single-threaded by
/// design: mutations take `&mut self`.
#[derive(Debug, Default)]
pub struct HostNetworkStore {
    endpoints: Vec<HostEndpoint>,
    load_balancers: Vec<HostLoadBalancer>,
}

impl HostNetworkStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored endpoints
    pub fn endpoint_count(&self) -> usize {
        self.endpoints.len()
    }

    /// Number of stored load balancers
    pub fn load_balancer_count(&self) -> usize {
        self.load_balancers.len()
    }

    /// Attach an endpoint that lives on another host. Identical to
    /// `create_endpoint` except the remote-endpoint flag is OR'd into
    /// whatever flags the request carried.
    pub fn create_remote_endpoint(&mut self, endpoint: &HostEndpoint) -> Result<HostEndpoint> {
        let stored = admit_endpoint(endpoint, EndpointFlags::REMOTE_ENDPOINT | endpoint.flags);
        self.endpoints.push(stored.clone());
        debug!("Created remote endpoint: {}", stored.id);
        Ok(stored)
    }

    /// Remove the first stored load balancer whose identifier matches the
    /// request, keeping the order of the rest. Deleting an identifier the
    /// store never saw is an error.
    pub fn delete_load_balancer(&mut self, loadbalancer: &HostLoadBalancer) -> Result<()> {
        let index = self
            .load_balancers
            .iter()
            .position(|lb| lb.id == loadbalancer.id)
            .ok_or_else(|| SimError::LoadBalancerNotFound(loadbalancer.id.clone()))?;
        self.load_balancers.remove(index);
        debug!("Deleted load balancer: {}", loadbalancer.id);
        Ok(())
    }
}

impl HostNetworkService for HostNetworkStore {
    fn get_network_by_name(&self, network_name: &str) -> Result<HostNetwork> {
        Ok(overlay_network(network_name))
    }

    fn list_endpoints_of_network(&self, network_id: &str) -> Result<Vec<HostEndpoint>> {
        Ok(self
            .endpoints
            .iter()
            .filter(|ep| ep.host_network == network_id)
            .cloned()
            .collect())
    }

    fn get_endpoint_by_id(&self, endpoint_id: &str) -> Result<HostEndpoint> {
        let mut endpoint = HostEndpoint::default();
        for ep in &self.endpoints {
            // last match wins on duplicate identifiers
            if ep.id == endpoint_id {
                endpoint = endpoint_lookup_view(ep);
            }
        }
        Ok(endpoint)
    }

    fn list_endpoints(&self) -> Result<Vec<HostEndpoint>> {
        Ok(self.endpoints.clone())
    }

    fn get_endpoint_by_name(&self, endpoint_name: &str) -> Result<HostEndpoint> {
        let mut endpoint = HostEndpoint::default();
        for ep in &self.endpoints {
            if ep.name == endpoint_name {
                endpoint = endpoint_lookup_view(ep);
            }
        }
        Ok(endpoint)
    }

    fn list_load_balancers(&self) -> Result<Vec<HostLoadBalancer>> {
        Ok(self.load_balancers.clone())
    }

    fn get_load_balancer_by_id(&self, load_balancer_id: &str) -> Result<HostLoadBalancer> {
        let mut loadbalancer = HostLoadBalancer::default();
        for lb in &self.load_balancers {
            if lb.id == load_balancer_id {
                loadbalancer = load_balancer_lookup_view(lb);
            }
        }
        Ok(loadbalancer)
    }

    fn create_endpoint(&mut self, endpoint: &HostEndpoint) -> Result<HostEndpoint> {
        // local endpoints always start with no flags, whatever the request said
        let stored = admit_endpoint(endpoint, EndpointFlags::empty());
        self.endpoints.push(stored.clone());
        debug!("Created endpoint: {}", stored.id);
        Ok(stored)
    }

    fn create_load_balancer(&mut self, loadbalancer: &HostLoadBalancer) -> Result<HostLoadBalancer> {
        let stored = loadbalancer.clone();
        self.load_balancers.push(stored.clone());
        debug!("Created load balancer: {}", stored.id);
        Ok(stored)
    }
}

/// Rebuild a creation request into the stored document. The owning network is
/// always the simulator's fixed network, regardless of what the request named.
fn admit_endpoint(endpoint: &HostEndpoint, flags: EndpointFlags) -> HostEndpoint {
    HostEndpoint {
        id: endpoint.id.clone(),
        name: endpoint.name.clone(),
        host_network: NETWORK_ID.to_string(),
        ip_configurations: endpoint.ip_configurations.clone(),
        mac_address: endpoint.mac_address.clone(),
        flags,
        schema_version: endpoint.schema_version,
        health: endpoint.health.clone(),
    }
}

/// Lookup projection for endpoints: single-endpoint queries report identity,
/// ownership, health and addressing only. MAC address, flags and schema
/// version stay at their zero values, as on the real service.
fn endpoint_lookup_view(endpoint: &HostEndpoint) -> HostEndpoint {
    HostEndpoint {
        id: endpoint.id.clone(),
        name: endpoint.name.clone(),
        host_network: endpoint.host_network.clone(),
        health: endpoint.health.clone(),
        ip_configurations: endpoint.ip_configurations.clone(),
        ..HostEndpoint::default()
    }
}

/// Lookup projection for load balancers: identifier, flags, backing endpoints
/// and source VIP only. Port mappings, frontend VIPs and schema version stay
/// at their zero values.
fn load_balancer_lookup_view(loadbalancer: &HostLoadBalancer) -> HostLoadBalancer {
    HostLoadBalancer {
        id: loadbalancer.id.clone(),
        flags: loadbalancer.flags,
        host_endpoints: loadbalancer.host_endpoints.clone(),
        source_vip: loadbalancer.source_vip.clone(),
        ..HostLoadBalancer::default()
    }
}
