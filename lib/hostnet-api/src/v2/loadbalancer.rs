use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::SchemaVersion;

/// HostLoadBalancer describes a rule set distributing traffic across a group
/// of endpoints via virtual IPs and port mappings.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HostLoadBalancer {
    /// Load balancer identifier
    pub id: String,

    /// Identifiers of the endpoints traffic is balanced across
    pub host_endpoints: Vec<String>,

    /// Source VIP used when NATing outbound traffic
    #[serde(rename = "SourceVIP")]
    pub source_vip: String,

    /// Frontend virtual IPs traffic is accepted on
    #[serde(rename = "FrontendVIPs")]
    pub frontend_vips: Vec<String>,

    pub port_mappings: Vec<PortMapping>,

    pub flags: LoadBalancerFlags,

    pub schema_version: SchemaVersion,
}

/// External-to-internal port translation on a load balancer frontend
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PortMapping {
    /// IP protocol number (6 = TCP, 17 = UDP)
    pub protocol: u32,
    pub internal_port: u16,
    pub external_port: u16,
    pub flags: PortMappingFlags,
}

bitflags! {
    /// Behavior flags on a load balancer
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct LoadBalancerFlags: u32 {
        /// Direct server return: responses bypass the load balancer
        const DSR = 1;
    }
}

bitflags! {
    /// Behavior flags on a single port mapping
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct PortMappingFlags: u32 {
        /// Internal load balancer (cluster-internal VIP)
        const ILB = 1;
        /// VIP routed only on the local host
        const LOCAL_ROUTED_VIP = 2;
        /// Traffic traverses the host mux before the endpoint
        const USE_MUX = 4;
        /// Preserve the destination IP through translation
        const PRESERVE_DIP = 8;
    }
}

impl Serialize for LoadBalancerFlags {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.bits())
    }
}

impl<'de> Deserialize<'de> for LoadBalancerFlags {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Self::from_bits_retain(u32::deserialize(deserializer)?))
    }
}

impl Serialize for PortMappingFlags {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.bits())
    }
}

impl<'de> Deserialize<'de> for PortMappingFlags {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Self::from_bits_retain(u32::deserialize(deserializer)?))
    }
}
