/// Schema version 2 of the host network service documents

pub mod endpoint;
pub mod loadbalancer;
pub mod network;

pub use endpoint::{EndpointFlags, EndpointHealth, HostEndpoint, IpConfiguration};
pub use loadbalancer::{HostLoadBalancer, LoadBalancerFlags, PortMapping, PortMappingFlags};
pub use network::{HostNetwork, Ipam, MacPool, MacRange, Route, Subnet};

use serde::{Deserialize, Serialize};

/// Major schema version spoken by this API surface
pub const SCHEMA_MAJOR: u32 = 2;
/// Minor schema version spoken by this API surface
pub const SCHEMA_MINOR: u32 = 0;

/// Version stamp carried by every document
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SchemaVersion {
    pub major: u32,
    pub minor: u32,
}

impl SchemaVersion {
    /// The version this crate models (2.0)
    pub fn current() -> Self {
        Self {
            major: SCHEMA_MAJOR,
            minor: SCHEMA_MINOR,
        }
    }
}
